//! Configuration for a Roster.

use std::path::PathBuf;

/// Default record file, relative to the working directory.
pub const DEFAULT_PATH: &str = "students.csv";

/// Configuration for a Roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Where the CSV file lives.
    pub path: PathBuf,
    /// Fail a reload on the first row that cannot be loaded, instead of
    /// skipping it.
    pub strict_load: bool,
}

impl RosterConfig {
    /// Default configuration with a different file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Set strict loading.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict_load = strict;
        self
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            strict_load: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.path, PathBuf::from("students.csv"));
        assert!(!config.strict_load);
    }

    #[test]
    fn test_with_path_keeps_defaults() {
        let config = RosterConfig::with_path("/tmp/class.csv").strict(true);
        assert_eq!(config.path, PathBuf::from("/tmp/class.csv"));
        assert!(config.strict_load);
    }
}
