// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and validation.

use crate::error::{CgateError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::CgateConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["cgate.toml", ".cgate.toml", ".cgate.json", ".config/cgate.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let cgate_config = config_dir.join("cgate").join("config.toml");
        if cgate_config.exists() {
            return Some(cgate_config);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<CgateConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(CgateConfig::default())
        }
    }
}

/// Load configuration from a specific path.
///
/// Files ending in `.json` are read as JSON, everything else as TOML.
pub fn load_config_from(path: &Path) -> Result<CgateConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CgateError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CgateError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        parse_json_config(&content)
    } else {
        parse_config(&content)
    }
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<CgateConfig> {
    let config: CgateConfig = toml::from_str(content).map_err(|e| {
        CgateError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;
    config.validate()?;
    Ok(config)
}

/// Parse and validate configuration from a JSON string.
pub fn parse_json_config(content: &str) -> Result<CgateConfig> {
    let config: CgateConfig = serde_json::from_str(content).map_err(|e| {
        CgateError::Config(ConfigError::ParseError {
            message: format!("Failed to parse JSON: {}", e),
        })
    })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Depth, Language};
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, CgateConfig::default());
    }

    #[test]
    fn test_parse_folder_config() {
        let toml = r#"
preset = "folder-based"
depth = 2
ignore_paths = ["*.md", "docs/**"]
max_files = 20

[depth_overrides]
"packages" = 2
"packages/legacy" = 3
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.depth, Depth::Fixed(2));
        assert_eq!(config.ignore_paths, vec!["*.md", "docs/**"]);
        assert_eq!(config.max_files, Some(20));
        assert_eq!(config.depth_overrides["packages/legacy"], 3);
    }

    #[test]
    fn test_parse_conventional_config() {
        let toml = r#"
preset = "conventional-commits"
types = ["feat", "fix"]
scopes = ["api", "cli"]
require_scope = true
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.preset, "conventional-commits");
        assert_eq!(config.types, vec!["feat", "fix"]);
        assert!(config.require_scope);
    }

    #[test]
    fn test_parse_json_camel_case() {
        let json = r#"{
            "preset": "folder-based",
            "enabled": true,
            "logFile": ".commit-logs/hook.log",
            "logMaxAgeHours": 48,
            "language": "ko",
            "depth": "auto",
            "maxDepth": 3,
            "ignorePaths": ["*.lock"],
            "depthOverrides": {"apps": 2}
        }"#;
        let config = parse_json_config(json).unwrap();
        assert_eq!(config.log_file, PathBuf::from(".commit-logs/hook.log"));
        assert_eq!(config.log_max_age_hours, Some(48));
        assert_eq!(config.language, Language::Ko);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.depth_overrides["apps"], 2);
    }

    #[test]
    fn test_invalid_depth_is_config_error() {
        let err = parse_config("depth = 0").unwrap_err();
        assert!(matches!(
            err,
            CgateError::Config(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_zero_max_depth_is_invalid_value() {
        let err = parse_config("max_depth = 0").unwrap_err();
        assert!(matches!(
            err,
            CgateError::Config(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_config_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CgateError::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".cgate.toml"), "depth = 1").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".cgate.toml"));

        let config = load_config_from(&found).unwrap();
        assert_eq!(config.depth, Depth::Fixed(1));
    }

    #[test]
    fn test_load_json_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".cgate.json");
        std::fs::write(&path, r#"{"preset": "conventional-commits"}"#).unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.preset, "conventional-commits");
    }
}
