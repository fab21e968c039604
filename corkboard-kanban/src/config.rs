//! Store configuration
//!
//! Values are layered with figment, lowest precedence first:
//! 1. Built-in defaults
//! 2. An optional file; TOML, YAML or JSON by extension
//! 3. Environment variables prefixed with `CORKBOARD_` (e.g. `CORKBOARD_SEED_DEMO_DATA=false`)

use crate::error::Result;
use crate::types::UserId;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "CORKBOARD_";

/// Configuration file format, detected from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from a file extension. Unknown extensions yield `None`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from a path, defaulting to TOML
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .unwrap_or(Self::Toml)
    }

    fn provider(self, path: &Path) -> Figment {
        match self {
            Self::Toml => Figment::from(Toml::file(path)),
            Self::Yaml => Figment::from(Yaml::file(path)),
            Self::Json => Figment::from(Json::file(path)),
        }
    }
}

/// Runtime settings for a [`BoardStore`](crate::BoardStore)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Load the demonstration users, workspaces, boards, lists and cards
    pub seed_demo_data: bool,
    /// Title given to entities created or renamed with a blank title
    pub untitled_placeholder: String,
    /// Longest accepted title, in characters
    pub max_title_length: usize,
    /// How many activity log entries to keep (newest first)
    pub activity_log_limit: usize,
    /// Acting user after seeding. Ignored if the id does not resolve.
    pub default_user: Option<UserId>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            untitled_placeholder: "Untitled".to_string(),
            max_title_length: 512,
            activity_log_limit: 1000,
            default_user: Some(UserId::from_string("user-1")),
        }
    }
}

impl StoreConfig {
    /// Configuration for an empty store with no acting user
    pub fn empty() -> Self {
        Self {
            seed_demo_data: false,
            default_user: None,
            ..Self::default()
        }
    }

    /// Load defaults overlaid with `CORKBOARD_*` environment variables
    pub fn load() -> Result<Self> {
        Self::extract(Self::figment())
    }

    /// Load defaults, then `path` (if it exists), then environment variables
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path);
        debug!(path = %path.display(), ?format, "loading store configuration");
        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(format.provider(path))
            .merge(Env::prefixed(ENV_PREFIX));
        Self::extract(figment)
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        if config.max_title_length == 0 {
            return Err(crate::BoardError::invalid_value(
                "max_title_length",
                "must be greater than zero",
            ));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert!(config.seed_demo_data);
        assert_eq!(config.untitled_placeholder, "Untitled");
        assert_eq!(config.default_user, Some(UserId::from_string("user-1")));
    }

    #[test]
    fn test_empty_has_no_seed_and_no_user() {
        let config = StoreConfig::empty();
        assert!(!config.seed_demo_data);
        assert!(config.default_user.is_none());
        assert_eq!(config.max_title_length, 512);
    }

    #[test]
    fn test_toml_file_and_env_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "corkboard.toml",
                r#"
                    seed_demo_data = false
                    untitled_placeholder = "New item"
                    activity_log_limit = 10
                "#,
            )?;
            jail.set_env("CORKBOARD_ACTIVITY_LOG_LIMIT", "25");

            let config = StoreConfig::load_from("corkboard.toml").expect("config loads");
            assert!(!config.seed_demo_data);
            assert_eq!(config.untitled_placeholder, "New item");
            // env wins over the file
            assert_eq!(config.activity_log_limit, 25);
            Ok(())
        });
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_extension("toml"), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_extension("YML"), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_extension("json"), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_extension("ini"), None);
        assert_eq!(ConfigFormat::from_path(Path::new("settings")), ConfigFormat::Toml);
    }

    #[test]
    fn test_yaml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "corkboard.yaml",
                "max_title_length: 40\ndefault_user: user-2\n",
            )?;
            let config = StoreConfig::load_from("corkboard.yaml").expect("config loads");
            assert_eq!(config.max_title_length, 40);
            assert_eq!(config.default_user, Some(UserId::from_string("user-2")));
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        Jail::expect_with(|_jail| {
            let config = StoreConfig::load_from("does-not-exist.toml").expect("config loads");
            assert_eq!(config, StoreConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_zero_title_length_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("CORKBOARD_MAX_TITLE_LENGTH", "0");
            assert!(StoreConfig::load().is_err());
            Ok(())
        });
    }
}
