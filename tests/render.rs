mod common;

use common::star;
use stargazer::grouping::group_by_language;
use stargazer::models::FetchedStars;
use stargazer::render::{render, slug, write_list, OutputFormat, RenderOptions};
use tempfile::TempDir;

fn stars() -> FetchedStars {
    let mut ripgrep = star("BurntSushi/ripgrep");
    ripgrep.description = "ripgrep recursively searches directories".to_string();
    ripgrep.license = "Unlicense".to_string();
    ripgrep.stars = 50_000;

    let mut old = star("octocat/old|tool");
    old.archived = true;
    old.license = "MIT".to_string();
    old.license_url = "https://api.github.com/licenses/mit".to_string();

    group_by_language(vec![
        ("Rust", ripgrep),
        ("C#", old),
        ("C++", star("catchorg/Catch2")),
    ])
}

#[test]
fn test_slug() {
    assert_eq!(slug("Awesome Stars"), "awesome-stars");
    assert_eq!(slug("C#"), "c");
    assert_eq!(slug("Jupyter Notebook"), "jupyter-notebook");
    assert_eq!(slug("Vim Script"), "vim-script");
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("list".parse::<OutputFormat>().unwrap(), OutputFormat::List);
    assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
    assert!("html".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::Table.to_string(), "table");
}

#[test]
fn test_list_with_contents() {
    let output = render(&stars(), OutputFormat::List, &RenderOptions::default());

    assert!(output.starts_with("# Awesome Stars\n"));
    assert!(output.contains("Total: **3** repositories"));
    assert!(output.contains("## Contents"));
    // Colliding anchors get numeric suffixes.
    assert!(output.contains("- [C#](#c) (1)"));
    assert!(output.contains("- [C++](#c-1) (1)"));
    assert!(output.contains("- [Rust](#rust) (1)"));
    assert!(output.contains(
        "- [BurntSushi/ripgrep](https://github.com/BurntSushi/ripgrep) - ripgrep recursively searches directories (★ 50000, Unlicense)"
    ));
    assert!(output.contains("(★ 1, [MIT](https://api.github.com/licenses/mit), archived)"));
    assert!(output.contains("- [catchorg/Catch2](https://github.com/catchorg/Catch2) (★ 1, -)"));
    assert!(!output.contains("back to top"));

    let c_sharp = output.find("## C#").unwrap();
    let c_plus = output.find("## C++").unwrap();
    let rust = output.find("## Rust").unwrap();
    assert!(c_sharp < c_plus && c_plus < rust);
}

#[test]
fn test_list_without_optional_columns() {
    let options = RenderOptions {
        with_toc: false,
        with_license: false,
        with_stars: false,
        with_back_to_top: true,
    };

    let output = render(&stars(), OutputFormat::List, &options);

    assert!(!output.contains("## Contents"));
    assert!(!output.contains("★"));
    assert!(output.contains("- [catchorg/Catch2](https://github.com/catchorg/Catch2)\n"));
    assert!(output.contains("**[⬆ back to top](#awesome-stars)**"));
}

#[test]
fn test_table_format() {
    let options = RenderOptions {
        with_back_to_top: true,
        ..RenderOptions::default()
    };

    let output = render(&stars(), OutputFormat::Table, &options);

    assert!(output.contains("| Repository | Description | Stars | License |"));
    assert!(output.contains("|---|---|---|---|"));
    assert!(output.contains("| [catchorg/Catch2](https://github.com/catchorg/Catch2) |  | 1 | - |"));
    assert!(output.contains("[octocat/old\\|tool](https://github.com/octocat/old|tool) *(archived)*"));
    assert!(output.contains("**[⬆ back to top](#contents)**"));
}

#[test]
fn test_table_without_stars() {
    let options = RenderOptions {
        with_stars: false,
        ..RenderOptions::default()
    };

    let output = render(&stars(), OutputFormat::Table, &options);

    assert!(output.contains("| Repository | Description | License |"));
    assert!(output.contains("|---|---|---|\n"));
}

#[test]
fn test_write_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("README.md");

    write_list(&path, &stars(), OutputFormat::List, &RenderOptions::default()).expect("write failed");

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render(&stars(), OutputFormat::List, &RenderOptions::default()));
}
