//! Theme resolution.
//!
//! This module provides:
//!
//! - [`ColorMode`]: the light or dark mode
//! - [`ThemePreference`]: the mode plus the user-choice flag, as persisted
//! - [`ThemeResolver`]: applies, persists and updates the active mode
//! - [`PreferenceWatcher`]: turns system preference queries into change events

mod detector;
mod mode;
mod preference;
mod resolver;

pub use detector::{
    detect_color_mode, reset_theme_detector, set_theme_detector, OsPreference, PreferenceWatcher,
    SystemPreference,
};
pub use mode::ColorMode;
pub use preference::ThemePreference;
pub use resolver::{ThemeResolver, ThemeResolverBuilder};
