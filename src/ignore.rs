/// Repositories excluded from the generated list.
///
/// Entries are compared against a candidate name by case-insensitive
/// string equality; no glob or regex matching is performed.
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    entries: Vec<String>,
}

impl IgnoreFilter {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().to_lowercase())
            .collect();

        Self { entries }
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let name = name.to_lowercase();
        self.entries.iter().any(|e| *e == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
