//! Configuration module
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Project config (`tuyau.toml` next to the project root)
//! 3. User config (`<config dir>/tuyau/config.toml`)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{TuyauError, TuyauResult};
use crate::textures::Resolution;

/// Tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub projects: ProjectsConfig,

    #[serde(default)]
    pub textures: TexturesConfig,
}

/// Project creation defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProjectsConfig {
    /// Parent folder new projects are created in when no flag is given
    #[serde(default)]
    pub parent_dir: Option<PathBuf>,
}

/// Texture export defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TexturesConfig {
    #[serde(default)]
    pub resolution: Resolution,
}

impl Config {
    /// Load a config file; a missing file yields the defaults
    pub fn load(path: &Path) -> TuyauResult<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| TuyauError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load the user-level config, falling back to defaults on any miss
    pub fn load_user() -> Config {
        user_config_path()
            .map(|p| Config::load(&p).unwrap_or_default())
            .unwrap_or_default()
    }
}

/// Location of the user config file, if a config directory exists
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|c| c.join("tuyau").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.projects.parent_dir, None);
        assert_eq!(config.textures.resolution, Resolution::R1024);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[projects]
parent_dir = "/shows"

[textures]
resolution = "4096"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.projects.parent_dir, Some(PathBuf::from("/shows")));
        assert_eq!(config.textures.resolution, Resolution::R4096);
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "projects = 3").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, TuyauError::InvalidConfig { .. }));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[projects]\nparent_dir = \"/shows\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.textures.resolution, Resolution::R1024);
    }
}
