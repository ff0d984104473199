//! Error types for theme resolution, persistence and configuration.

use std::path::PathBuf;

/// Error returned when a theme name cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The value is neither `"light"` nor `"dark"`
    #[error("invalid theme '{0}', expected 'light' or 'dark'")]
    InvalidTheme(String),
}

/// Error returned by a [`PreferenceStore`](crate::PreferenceStore) write.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store refuses writes (disabled or full storage)
    #[error("preference store is read-only")]
    ReadOnly,
    /// The backing file exists but could not be read
    #[error("failed to read preferences from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backing file could not be written
    #[error("failed to write preferences to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backing file does not hold a JSON object of strings
    #[error("preferences file {path} is not a JSON object of strings")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Error returned when a [`ResolverConfig`](crate::ResolverConfig) cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The YAML document does not describe a configuration
    #[error("invalid YAML configuration")]
    Yaml(#[from] serde_yaml::Error),
    /// The JSON document does not describe a configuration
    #[error("invalid JSON configuration")]
    Json(#[from] serde_json::Error),
    /// The configuration file could not be read
    #[error("failed to read configuration from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A notification message template does not parse
    #[error("invalid message template '{name}'")]
    Template {
        name: &'static str,
        #[source]
        source: minijinja::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_theme_display() {
        let err = ThemeError::InvalidTheme("blue".to_string());
        let msg = err.to_string();
        assert!(msg.contains("blue"));
        assert!(msg.contains("'light' or 'dark'"));
    }

    #[test]
    fn test_store_write_error_keeps_source() {
        use std::error::Error;

        let err = StoreError::Write {
            path: PathBuf::from("/tmp/prefs.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/prefs.json"));
        assert!(err.source().is_some());
    }
}
