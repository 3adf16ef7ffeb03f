use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub presentation: PresentationConfig,
    pub page: PageConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PresentationConfig {
    /// Number of leading sections that start expanded.
    pub auto_expand: usize,
    /// Deepest heading level shown as a collapsible panel; deeper
    /// sections render inline under their parent.
    pub collapsible_max_level: u8,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            auto_expand: 3,
            collapsible_max_level: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub numbers: bool,
    pub paper: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            numbers: false,
            paper: "a4".to_string(),
        }
    }
}

impl Config {
    /// The bundled default configuration.
    pub fn compiled_default() -> Self {
        // build.rs checks this file parses, so the fallback is never hit
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                Self::compiled_default()
            }),
            Err(_) => Self::compiled_default(),
        }
    }

    /// Load config from a TOML file, reporting read and parse errors.
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn compiled_default_matches_default() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[presentation]\nauto_expand = 1\n").unwrap();

        let config = Config::try_load(file.path()).unwrap();
        assert_eq!(config.presentation.auto_expand, 1);
        assert_eq!(config.presentation.collapsible_max_level, 2);
        assert_eq!(config.page, PageConfig::default());
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert_eq!(Config::load(&path), Config::default());
        assert!(Config::try_load(&path).is_err());
    }

    #[test]
    fn invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[page]\nnumbers = \"yes please\"").unwrap();

        assert!(matches!(
            Config::try_load(file.path()),
            Err(crate::Error::Config(_))
        ));
        assert_eq!(Config::load(file.path()), Config::default());
    }
}
