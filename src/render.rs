//! Markdown rendering of the grouped star list.

use crate::error::{Result, StargazerError};
use crate::models::{FetchedStars, Star};
use std::collections::HashSet;
use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

pub const AVAILABLE_FORMATS: &[&str] = &["list", "table"];

const TITLE: &str = "Awesome Stars";
const CONTENTS: &str = "Contents";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    List,
    Table,
}

impl FromStr for OutputFormat {
    type Err = StargazerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "list" => Ok(OutputFormat::List),
            "table" => Ok(OutputFormat::Table),
            other => Err(StargazerError::ConfigError(format!(
                "unknown output format '{}', expected one of: {}",
                other,
                AVAILABLE_FORMATS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::List => f.write_str("list"),
            OutputFormat::Table => f.write_str("table"),
        }
    }
}

/// Display switches for the rendered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub with_toc: bool,
    pub with_license: bool,
    pub with_stars: bool,
    pub with_back_to_top: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            with_toc: true,
            with_license: true,
            with_stars: true,
            with_back_to_top: false,
        }
    }
}

/// GitHub-style heading anchors, deduplicated with numeric suffixes.
#[derive(Debug, Default)]
struct Anchors {
    used: HashSet<String>,
}

impl Anchors {
    fn claim(&mut self, heading: &str) -> String {
        let base = slug(heading);
        let mut candidate = base.clone();
        let mut n = 0;
        while self.used.contains(&candidate) {
            n += 1;
            candidate = format!("{}-{}", base, n);
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

/// Lowercased heading with punctuation dropped and spaces turned into dashes.
pub fn slug(heading: &str) -> String {
    heading
        .trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_alphanumeric() || c == '-' || c == '_' => Some(c),
            _ => None,
        })
        .collect()
}

pub fn render(stars: &FetchedStars, format: OutputFormat, options: &RenderOptions) -> String {
    let mut anchors = Anchors::default();
    let mut out = String::new();

    let title_anchor = anchors.claim(TITLE);
    let _ = writeln!(out, "# {}\n", TITLE);
    let _ = writeln!(out, "> A curated list of my starred GitHub repositories.\n");
    let _ = writeln!(out, "Total: **{}** repositories\n", stars.total);

    let groups: Vec<(&String, &Vec<Star>)> =
        stars.groups.iter().filter(|(_, list)| !list.is_empty()).collect();

    let top_anchor = if options.with_toc {
        let contents_anchor = anchors.claim(CONTENTS);
        // Claim language anchors in document order so the links match.
        let language_anchors: Vec<String> =
            groups.iter().map(|(language, _)| anchors.claim(language)).collect();

        let _ = writeln!(out, "## {}\n", CONTENTS);
        for ((language, list), anchor) in groups.iter().zip(&language_anchors) {
            let _ = writeln!(out, "- [{}](#{}) ({})", language, anchor, list.len());
        }
        out.push('\n');
        contents_anchor
    } else {
        title_anchor
    };

    for (language, list) in &groups {
        let _ = writeln!(out, "## {}\n", language);
        match format {
            OutputFormat::List => render_list(&mut out, list, options),
            OutputFormat::Table => render_table(&mut out, list, options),
        }
        out.push('\n');
        if options.with_back_to_top {
            let _ = writeln!(out, "**[⬆ back to top](#{})**\n", top_anchor);
        }
    }

    out
}

fn render_list(out: &mut String, list: &[Star], options: &RenderOptions) {
    for star in list {
        let _ = write!(out, "- [{}]({})", star.full_name, star.url);
        let description = single_line(&star.description);
        if !description.is_empty() {
            let _ = write!(out, " - {}", description);
        }

        let mut details = Vec::new();
        if options.with_stars {
            details.push(format!("★ {}", star.stars));
        }
        if options.with_license {
            details.push(license_cell(star));
        }
        if star.archived {
            details.push("archived".to_string());
        }
        if !details.is_empty() {
            let _ = write!(out, " ({})", details.join(", "));
        }
        out.push('\n');
    }
}

fn render_table(out: &mut String, list: &[Star], options: &RenderOptions) {
    let mut header = vec!["Repository", "Description"];
    if options.with_stars {
        header.push("Stars");
    }
    if options.with_license {
        header.push("License");
    }
    let _ = writeln!(out, "| {} |", header.join(" | "));
    let _ = writeln!(out, "|{}", "---|".repeat(header.len()));

    for star in list {
        let mut repository = format!("[{}]({})", escape_cell(&star.full_name), star.url);
        if star.archived {
            repository.push_str(" *(archived)*");
        }
        let mut cells = vec![repository, escape_cell(&single_line(&star.description))];
        if options.with_stars {
            cells.push(star.stars.to_string());
        }
        if options.with_license {
            cells.push(escape_cell(&license_cell(star)));
        }
        let _ = writeln!(out, "| {} |", cells.join(" | "));
    }
}

fn license_cell(star: &Star) -> String {
    match (star.license.is_empty(), star.license_url.is_empty()) {
        (true, _) => "-".to_string(),
        (false, true) => star.license.clone(),
        (false, false) => format!("[{}]({})", star.license, star.license_url),
    }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Render and write the list to `path`, replacing any previous file.
pub fn write_list(
    path: &Path,
    stars: &FetchedStars,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<()> {
    let content = render(stars, format, options);
    fs::write(path, content)?;
    info!(path = %path.display(), total = stars.total, %format, "Wrote starred repositories list");
    Ok(())
}
