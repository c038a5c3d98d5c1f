use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// Default quantities, overriding the built-in ones
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct QuantityDefaults {
    #[serde(default)]
    pub(crate) tokens: Option<f64>,
    #[serde(default)]
    pub(crate) characters: Option<f64>,
    #[serde(default)]
    pub(crate) images: Option<i64>,
    #[serde(default)]
    pub(crate) video_seconds: Option<f64>,
}

/// Default unit prices in dollars, overriding the built-in ones
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RateDefaults {
    #[serde(default)]
    pub(crate) token: Option<f64>,
    #[serde(default)]
    pub(crate) character: Option<f64>,
    #[serde(default)]
    pub(crate) image: Option<f64>,
    #[serde(default)]
    pub(crate) video_second: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Parsed later so an unknown method reports as invalid input
    #[serde(default)]
    pub(crate) method: Option<String>,
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    #[serde(default)]
    pub(crate) quantities: QuantityDefaults,
    #[serde(default)]
    pub(crate) rates: RateDefaults,
}

impl Config {
    /// Load the first parseable config from the standard locations, or the
    /// defaults when there is none.
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::read(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    return config;
                }
                Err(e) => tracing::warn!("{e}"),
            }
        }

        Self::default()
    }

    /// Load exactly `path`; unlike discovery, a missing or malformed file is
    /// an error.
    pub(crate) fn load_from(path: &Path) -> Result<Self, AppError> {
        let config = Self::read(path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str::<Config>(&content).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/edcost/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("edcost").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/edcost/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("edcost").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.edcost.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".edcost.toml"));
        }

        paths
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.to_string_lossy().contains("edcost")));
    }

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(
            r#"
method = "character"
locale = "de"
color = "never"
compact = true

[quantities]
characters = 60000
images = 40
video_seconds = 300.5

[rates]
character = 0.00002
video_second = 0.2
"#,
        )
        .unwrap();
        assert_eq!(config.method.as_deref(), Some("character"));
        assert_eq!(config.locale.as_deref(), Some("de"));
        assert!(matches!(config.color, Some(ConfigColorMode::Never)));
        assert!(config.compact);
        assert_eq!(config.quantities.characters, Some(60_000.0));
        assert_eq!(config.quantities.images, Some(40));
        assert_eq!(config.quantities.video_seconds, Some(300.5));
        assert_eq!(config.quantities.tokens, None);
        assert_eq!(config.rates.character, Some(0.00002));
        assert_eq!(config.rates.image, None);
    }

    #[test]
    fn empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.method.is_none());
        assert!(!config.compact);
        assert!(config.rates.token.is_none());
    }

    #[test]
    fn unknown_rate_key_is_rejected() {
        assert!(toml::from_str::<Config>("[rates]\nimages = 1.0\n").is_err());
    }

    #[test]
    fn unknown_top_level_key_is_rejected() {
        let err = toml::from_str::<Config>("metod = \"character\"\n").unwrap_err();
        assert!(err.to_string().contains("metod"), "{err}");
    }

    #[test]
    fn load_from_rejects_misspelled_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edcost.toml");
        fs::write(&path, "locale = \"de\"\ncompcat = true\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[test]
    fn load_from_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edcost.toml");
        fs::write(&path, "method = \"token\"\n[rates]\ntoken = 0.000004\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.method.as_deref(), Some("token"));
        assert_eq!(config.rates.token, Some(0.000004));
    }
}
