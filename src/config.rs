//! Resolver configuration.
//!
//! Every field has a default matching the page the resolver was built for,
//! so an empty document (or [`ResolverConfig::default`]) is a valid config.
//!
//! ```rust
//! use portal_theme::ResolverConfig;
//!
//! let config = ResolverConfig::from_yaml_str("transition_ms: 150").unwrap();
//! assert_eq!(config.theme_key, "theme");
//! assert_eq!(config.transition().as_millis(), 150);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::notify::MessageTemplates;

pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_USER_FLAG_KEY: &str = "theme-user-preference";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_CONTROL_ID: &str = "themeSwitcher";
pub const DEFAULT_TRANSITION_MS: u64 = 300;
pub const DEFAULT_NOTIFICATION_TTL_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Store key holding `"light"` or `"dark"`.
    pub theme_key: String,
    /// Store key set to `"true"` once the user picked a theme.
    pub user_flag_key: String,
    /// Root attribute the stylesheet matches on.
    pub attribute: String,
    /// Identifier of the theme switch control.
    pub control_id: String,
    pub transition_ms: u64,
    pub notification_ttl_ms: u64,
    pub messages: MessageTemplates,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_string(),
            user_flag_key: DEFAULT_USER_FLAG_KEY.to_string(),
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            control_id: DEFAULT_CONTROL_ID.to_string(),
            transition_ms: DEFAULT_TRANSITION_MS,
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
            messages: MessageTemplates::default(),
        }
    }
}

impl ResolverConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file, picking the format from its extension.
    ///
    /// `.json` is parsed as JSON; anything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&text),
            _ => Self::from_yaml_str(&text),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.messages.validate()
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.theme_key, "theme");
        assert_eq!(config.user_flag_key, "theme-user-preference");
        assert_eq!(config.attribute, "data-theme");
        assert_eq!(config.control_id, "themeSwitcher");
        assert_eq!(config.transition(), Duration::from_millis(300));
        assert_eq!(config.notification_ttl(), Duration::from_secs(5));
    }

    #[test]
    fn test_yaml_partial_override() {
        let config = ResolverConfig::from_yaml_str(
            "attribute: data-bs-theme\nmessages:\n  user_toggle: \"{{ label }}!\"\n",
        )
        .unwrap();
        assert_eq!(config.attribute, "data-bs-theme");
        assert_eq!(config.messages.user_toggle, "{{ label }}!");
        assert_eq!(
            config.messages.auto_change,
            crate::notify::DEFAULT_AUTO_CHANGE_MESSAGE
        );
        assert_eq!(config.theme_key, "theme");
    }

    #[test]
    fn test_json_config() {
        let config = ResolverConfig::from_json_str(r#"{"theme_key": "site-theme"}"#).unwrap();
        assert_eq!(config.theme_key, "site-theme");
    }

    #[test]
    fn test_invalid_template_rejected() {
        let err = ResolverConfig::from_yaml_str("messages:\n  user_toggle: \"{{\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Template { .. }));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = TempDir::new().unwrap();
        let json = dir.path().join("theme.json");
        std::fs::write(&json, r#"{"control_id": "switch"}"#).unwrap();
        assert_eq!(ResolverConfig::load(&json).unwrap().control_id, "switch");

        let yaml = dir.path().join("theme.yaml");
        std::fs::write(&yaml, "notification_ttl_ms: 1000\n").unwrap();
        assert_eq!(
            ResolverConfig::load(&yaml).unwrap().notification_ttl(),
            Duration::from_secs(1)
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = ResolverConfig::load("/nonexistent/theme.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
