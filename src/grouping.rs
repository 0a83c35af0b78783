use crate::models::{FetchedStars, LanguageGroups, Star};

/// Sort every language bucket by `owner/name`, ignoring case.
///
/// The sort is stable: names that compare equal ignoring case keep their
/// input order.
pub fn sort_groups(mut groups: LanguageGroups) -> LanguageGroups {
    for stars in groups.values_mut() {
        sort_stars(stars);
    }
    groups
}

pub fn sort_stars(stars: &mut [Star]) {
    stars.sort_by_cached_key(|s| s.full_name.to_lowercase());
}

/// Bucket loose records by language, then sort each bucket.
pub fn group_by_language<I, L>(records: I) -> FetchedStars
where
    I: IntoIterator<Item = (L, Star)>,
    L: Into<String>,
{
    let mut fetched = FetchedStars::default();
    for (language, star) in records {
        fetched.push(language, star);
    }
    fetched.groups = sort_groups(fetched.groups);
    fetched
}
