//! Theme-change message templates.

use minijinja::{context, Environment};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::ColorMode;

pub const DEFAULT_USER_TOGGLE_MESSAGE: &str = "{{ icon }} {{ label }} theme activated!";
pub const DEFAULT_AUTO_CHANGE_MESSAGE: &str =
    "🔄 Theme automatically changed to {{ mode }} (system setting)";

/// Templates for the two theme-change notifications.
///
/// Both are rendered with `mode` (`light`/`dark`), `label` (`Light`/`Dark`)
/// and `icon` in scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTemplates {
    /// Shown after the user flips the switch.
    pub user_toggle: String,
    /// Shown when the system preference changed the theme.
    pub auto_change: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            user_toggle: DEFAULT_USER_TOGGLE_MESSAGE.to_string(),
            auto_change: DEFAULT_AUTO_CHANGE_MESSAGE.to_string(),
        }
    }
}

impl MessageTemplates {
    /// Checks that both templates parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let env = Environment::new();
        env.template_from_str(&self.user_toggle)
            .map_err(|source| ConfigError::Template {
                name: "user_toggle",
                source,
            })?;
        env.template_from_str(&self.auto_change)
            .map_err(|source| ConfigError::Template {
                name: "auto_change",
                source,
            })?;
        Ok(())
    }

    pub fn user_toggle(&self, mode: ColorMode) -> String {
        render(&self.user_toggle, DEFAULT_USER_TOGGLE_MESSAGE, mode)
    }

    pub fn auto_change(&self, mode: ColorMode) -> String {
        render(&self.auto_change, DEFAULT_AUTO_CHANGE_MESSAGE, mode)
    }
}

fn render(template: &str, fallback: &str, mode: ColorMode) -> String {
    let (label, icon) = match mode {
        ColorMode::Light => ("Light", "☀️"),
        ColorMode::Dark => ("Dark", "🌙"),
    };
    let env = Environment::new();
    let ctx = context! { mode => mode.as_str(), label => label, icon => icon };
    env.render_str(template, &ctx).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "message template failed, using default");
        env.render_str(fallback, &ctx)
            .unwrap_or_else(|_| format!("{label} theme"))
    })
}
