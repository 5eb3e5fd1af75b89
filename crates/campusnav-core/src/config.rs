//! Navigation configuration for campusnav
//!
//! Configuration is read from `campusnav.toml`. Every key is optional.

pub mod types;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{NavError, Result};

pub use types::{Algorithm, DepthFirstMode, NavConfig, CONFIG_FILE_NAME};

impl NavConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load configuration if the file exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let names: types::NamedKeys = toml::from_str(content)?;
        if let Some(algorithm) = &names.algorithm {
            algorithm.parse::<Algorithm>()?;
        }
        if let Some(mode) = &names.depth_first {
            mode.parse::<DepthFirstMode>()?;
        }

        let config: NavConfig = toml::from_str(content)?;
        if config.max_paths == Some(0) {
            return Err(NavError::invalid_value("max_paths", 0));
        }
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = NavConfig::default();
        assert_eq!(config.algorithm, Algorithm::ShortestPath);
        assert!(!config.accessible_only);
        assert_eq!(config.depth_first, DepthFirstMode::MostLandmarks);
        assert!(config.max_paths.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let config = NavConfig {
            algorithm: Algorithm::BreadthFirst,
            accessible_only: true,
            depth_first: DepthFirstMode::FirstFound,
            max_paths: Some(500),
        };
        config.save(&path).unwrap();

        let loaded = NavConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_parse_kebab_case_values() {
        let config = NavConfig::parse(
            "algorithm = \"depth-first\"\naccessible_only = true\ndepth_first = \"first-found\"\n",
        )
        .unwrap();
        assert_eq!(config.algorithm, Algorithm::DepthFirst);
        assert!(config.accessible_only);
        assert_eq!(config.depth_first, DepthFirstMode::FirstFound);
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        assert_eq!(NavConfig::parse("").unwrap(), NavConfig::default());
    }

    #[test]
    fn test_unknown_algorithm_is_unsupported() {
        let err = NavConfig::parse("algorithm = \"teleport\"\n").unwrap_err();
        assert!(matches!(err, NavError::Unsupported { .. }));
    }

    #[test]
    fn test_unknown_depth_first_mode_is_unsupported() {
        let err = NavConfig::parse("depth_first = \"random\"\n").unwrap_err();
        assert!(matches!(err, NavError::Unsupported { .. }));
    }

    #[test]
    fn test_zero_max_paths_rejected() {
        let err = NavConfig::parse("max_paths = 0\n").unwrap_err();
        assert!(matches!(err, NavError::InvalidValue { .. }));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempdir().unwrap();
        let config = NavConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, NavConfig::default());
    }

    #[test]
    fn test_algorithm_aliases() {
        assert_eq!("bfs".parse::<Algorithm>().unwrap(), Algorithm::BreadthFirst);
        assert_eq!("Shortest_Path".parse::<Algorithm>().unwrap(), Algorithm::ShortestPath);
        assert_eq!("dfs".parse::<Algorithm>().unwrap(), Algorithm::DepthFirst);
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }
}
