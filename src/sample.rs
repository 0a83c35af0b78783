use crate::grouping::group_by_language;
use crate::ignore::IgnoreFilter;
use crate::models::{FetchedStars, Star};
use chrono::Utc;

/// Fixed data set used for `--test` runs, so templates can be checked
/// without a token.
#[derive(Debug, Clone, Default)]
pub struct SampleStars {
    ignore: IgnoreFilter,
}

impl SampleStars {
    pub fn new(ignore: IgnoreFilter) -> Self {
        Self { ignore }
    }

    pub fn stars(&self) -> FetchedStars {
        let now = Utc::now();
        let star = |full_name: &str, description: &str, license: &str| {
            let name = full_name.rsplit('/').next().unwrap_or(full_name).to_string();
            Star {
                url: format!("https://github.com/{}", full_name),
                name,
                full_name: full_name.to_string(),
                description: description.to_string(),
                license: license.to_string(),
                license_url: String::new(),
                stars: 1,
                archived: false,
                starred_at: now,
            }
        };

        let records = vec![
            (
                "Rust",
                star("octocat/stargazer", "Creates awesome lists of your starred repositories", "MIT License"),
            ),
            (
                "Markdown",
                star("octocat/stars", "A list of awesome repositories I starred", "MIT License"),
            ),
            ("C#", star("octocat/test", "", "MIT License")),
            ("C++", star("hubot/test_2", "Some description", "")),
        ];

        group_by_language(
            records
                .into_iter()
                .filter(|(_, s)| !self.ignore.is_ignored(&s.full_name)),
        )
    }
}
