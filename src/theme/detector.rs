//! System color-scheme preference detection.
//!
//! The platform preference is read through a process-wide detector that
//! defaults to the OS query and can be swapped out, mostly for tests.
//! [`PreferenceWatcher`] turns repeated queries into change notifications.

use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

use super::mode::ColorMode;

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to determine whether the platform prefers a light or dark theme.
///
/// This is useful for testing or when the host reports the preference itself.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores the OS-backed detector.
pub fn reset_theme_detector() {
    set_theme_detector(os_theme_detector);
}

/// Queries the current detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

/// Source of the platform's "prefers dark" answer.
pub trait SystemPreference {
    fn prefers_dark(&self) -> bool;
}

/// The platform preference as reported by [`detect_color_mode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsPreference;

impl SystemPreference for OsPreference {
    fn prefers_dark(&self) -> bool {
        detect_color_mode().is_dark()
    }
}

impl<F: Fn() -> bool> SystemPreference for F {
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// Turns a pollable [`SystemPreference`] into change events.
///
/// The first observed value is the baseline and is not reported. After that,
/// [`poll`](Self::poll) yields the new value exactly once per change.
#[derive(Debug)]
pub struct PreferenceWatcher<P> {
    source: P,
    last: bool,
}

impl<P: SystemPreference> PreferenceWatcher<P> {
    pub fn new(source: P) -> Self {
        let last = source.prefers_dark();
        Self { source, last }
    }

    /// The last value seen, which is also what `initialize` should be fed.
    pub fn current(&self) -> bool {
        self.last
    }

    /// Returns `Some(prefers_dark)` if the preference changed since the last poll.
    pub fn poll(&mut self) -> Option<bool> {
        let now = self.source.prefers_dark();
        if now == self.last {
            return None;
        }
        self.last = now;
        tracing::debug!(prefers_dark = now, "system color scheme changed");
        Some(now)
    }
}
