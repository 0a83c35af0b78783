use crate::error::Result;
use crate::models::RateLimitWindow;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_RATE_LIMIT_FILE: &str = "rate_limit_info.json";

/// Persists the last observed quota window as a small JSON document.
#[derive(Debug, Clone)]
pub struct RateLimitStore {
    path: PathBuf,
}

impl RateLimitStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted window.
    ///
    /// A missing or corrupt file is reported as an error; callers fall back
    /// to [`RateLimitWindow::default`].
    pub fn load(&self) -> Result<RateLimitWindow> {
        let data = fs::read_to_string(&self.path)?;
        let window = serde_json::from_str(&data)?;
        Ok(window)
    }

    /// Overwrite the persisted window.
    pub fn save(&self, window: &RateLimitWindow) -> Result<()> {
        let data = serde_json::to_string(window)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl Default for RateLimitStore {
    fn default() -> Self {
        Self::new(DEFAULT_RATE_LIMIT_FILE)
    }
}
