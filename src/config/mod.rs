//! Where the catalog, favorites and exports live.
//!
//! ```yaml
//! catalog: recetas/          # seed file or directory; omit for the built-in recipes
//! favorites: favoritos.json  # omit to keep favorites in memory
//! export_dir: exportadas     # defaults to "exports"
//! ```
//!
//! Relative paths in a config file are resolved against the file's directory.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Seed file or directory of seed files
    #[serde(default)]
    pub catalog: Option<Utf8PathBuf>,
    /// JSON file holding favorite ids
    #[serde(default)]
    pub favorites: Option<Utf8PathBuf>,
    #[serde(default = "default_export_dir")]
    pub export_dir: Utf8PathBuf,
}

fn default_export_dir() -> Utf8PathBuf {
    Utf8PathBuf::from("exports")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog: None,
            favorites: None,
            export_dir: default_export_dir(),
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document means all defaults
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads a YAML config file, resolving relative paths against its
    /// directory.
    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let config = Self::from_yaml_str(&fs::read_to_string(path)?)?;
        Ok(match path.parent() {
            Some(base) => config.relative_to(base),
            None => config,
        })
    }

    /// Resolves every relative path against `base`.
    pub fn relative_to(self, base: &Utf8Path) -> Self {
        let resolve = |p: Utf8PathBuf| {
            if p.is_relative() {
                base.join(p)
            } else {
                p
            }
        };
        Config {
            catalog: self.catalog.map(resolve),
            favorites: self.favorites.map(resolve),
            export_dir: resolve(self.export_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::from_yaml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.export_dir, Utf8PathBuf::from("exports"));
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_parse() {
        let config = Config::from_yaml_str(indoc! {r#"
            catalog: recetas
            favorites: /var/lib/recetas/favoritos.json
        "#})
        .unwrap();
        assert_eq!(config.catalog, Some(Utf8PathBuf::from("recetas")));
        assert_eq!(
            config.favorites,
            Some(Utf8PathBuf::from("/var/lib/recetas/favoritos.json"))
        );
        assert_eq!(config.export_dir, Utf8PathBuf::from("exports"));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = Config::from_yaml_str("catalog: [unclosed");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_from_path_resolves_relative() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
        let path = root.join("config.yaml");
        fs::write(
            &path,
            indoc! {r#"
                catalog: recetas.yaml
                favorites: /tmp/favoritos.json
            "#},
        )
        .unwrap();

        let config = Config::from_path(&path).unwrap();
        assert_eq!(config.catalog, Some(root.join("recetas.yaml")));
        assert_eq!(config.favorites, Some(Utf8PathBuf::from("/tmp/favoritos.json")));
        assert_eq!(config.export_dir, root.join("exports"));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_path(Utf8Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
