//! The theme resolver.
//!
//! [`ThemeResolver`] owns the single source of truth for the page's color
//! mode. It combines the persisted choice with the platform preference at
//! load time, reacts to user toggles and system changes, keeps the
//! presentation attribute and the switch in agreement with the active mode,
//! and persists every transition.
//!
//! All capabilities are optional. A missing one turns the matching side
//! effect into a no-op; failed store writes are logged and otherwise ignored.
//!
//! # Example
//!
//! ```rust
//! use portal_theme::{
//!     ColorMode, Document, MemoryStore, RecordingNotifier, ResolverConfig, ThemeResolver, Toggle,
//!     ToggleControl,
//! };
//!
//! let store = MemoryStore::new();
//! let document = Document::new();
//! let switch = Toggle::new("themeSwitcher");
//! let notes = RecordingNotifier::new();
//!
//! let mut resolver = ThemeResolver::builder(ResolverConfig::default())
//!     .store(store.clone())
//!     .sink(document.clone())
//!     .control(switch.clone())
//!     .notifier(notes.clone())
//!     .build();
//!
//! resolver.initialize(true);
//! assert_eq!(document.attribute("data-theme").as_deref(), Some("dark"));
//! assert!(switch.is_checked());
//!
//! resolver.on_user_toggle(false);
//! assert_eq!(resolver.current(), ColorMode::Light);
//! assert_eq!(notes.len(), 1);
//! ```

use super::detector::{PreferenceWatcher, SystemPreference};
use super::mode::ColorMode;
use super::preference::ThemePreference;
use crate::config::ResolverConfig;
use crate::error::ThemeError;
use crate::notify::{Notification, NotificationKind, Notifier};
use crate::store::PreferenceStore;
use crate::surface::{PresentationSink, ToggleControl};

/// Resolves and maintains the active [`ColorMode`].
///
/// Constructed once per page with [`ThemeResolver::builder`] and driven by
/// the host's event loop: [`initialize`](Self::initialize) on load, then
/// [`on_user_toggle`](Self::on_user_toggle) and
/// [`on_system_preference_changed`](Self::on_system_preference_changed) as
/// events arrive.
pub struct ThemeResolver {
    config: ResolverConfig,
    preference: ThemePreference,
    store: Option<Box<dyn PreferenceStore>>,
    sink: Option<Box<dyn PresentationSink>>,
    control: Option<Box<dyn ToggleControl>>,
    notifier: Option<Box<dyn Notifier>>,
}

impl std::fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("preference", &self.preference)
            .field("has_store", &self.store.is_some())
            .field("has_sink", &self.sink.is_some())
            .field("control", &self.control.as_ref().map(|c| c.id().to_string()))
            .field("has_notifier", &self.notifier.is_some())
            .finish()
    }
}

impl ThemeResolver {
    pub fn builder(config: ResolverConfig) -> ThemeResolverBuilder {
        ThemeResolverBuilder::new(config)
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The in-memory preference, as last loaded or written.
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// The active mode. Light until [`initialize`](Self::initialize) runs.
    pub fn current(&self) -> ColorMode {
        self.preference.value
    }

    pub fn is_dark(&self) -> bool {
        self.current().is_dark()
    }

    pub fn is_user_set(&self) -> bool {
        self.preference.is_user_set
    }

    /// Resolves the mode at page load.
    ///
    /// A persisted value wins. Otherwise the mode is seeded from the platform
    /// preference and persisted, without the user flag. Calling this again
    /// with no events in between leaves the page unchanged.
    #[tracing::instrument(skip(self))]
    pub fn initialize(&mut self, prefers_dark: bool) {
        let stored = self
            .store
            .as_deref()
            .and_then(|store| ThemePreference::load(store, &self.config));

        match stored {
            Some(preference) => {
                tracing::debug!(
                    mode = %preference.value,
                    user_set = preference.is_user_set,
                    "using stored theme"
                );
                self.preference = preference;
            }
            None => {
                self.preference = ThemePreference::from_system(prefers_dark);
                tracing::debug!(mode = %self.preference.value, "first visit, seeding theme from system");
                self.clear_stale_user_flag();
                self.persist();
            }
        }

        self.apply();
    }

    /// Handles an explicit change of the switch.
    ///
    /// The new mode becomes a user choice: it is persisted along with the
    /// user flag and system changes are ignored from then on.
    #[tracing::instrument(skip(self))]
    pub fn on_user_toggle(&mut self, checked: bool) {
        self.preference = ThemePreference {
            value: ColorMode::from_prefers_dark(checked),
            is_user_set: true,
        };
        self.persist();

        if let Some(sink) = self.sink.as_deref_mut() {
            sink.begin_transition(self.config.transition());
        }
        self.apply();

        let message = self.config.messages.user_toggle(self.preference.value);
        self.notify(message, NotificationKind::Success);
        tracing::info!(mode = %self.preference.value, "theme switched by user");
    }

    /// Handles a platform color-scheme change.
    ///
    /// Ignored once the user has chosen a theme, here or through any other
    /// resolver sharing the store. Otherwise the platform value is applied,
    /// persisted and announced.
    #[tracing::instrument(skip(self))]
    pub fn on_system_preference_changed(&mut self, prefers_dark: bool) {
        if let Some(store) = self.store.as_deref() {
            self.preference.is_user_set |= ThemePreference::load_user_flag(store, &self.config);
        }
        if self.preference.is_user_set {
            tracing::debug!("user chose a theme, ignoring system change");
            return;
        }

        self.preference = ThemePreference::from_system(prefers_dark);
        self.persist();
        self.apply();

        let message = self.config.messages.auto_change(self.preference.value);
        self.notify(message, NotificationKind::Info);
        tracing::info!(mode = %self.preference.value, "theme changed by system preference");
    }

    /// Polls `watcher` and forwards a detected change.
    ///
    /// Returns whether a change was seen, regardless of whether it was applied.
    pub fn poll_system<P: SystemPreference>(&mut self, watcher: &mut PreferenceWatcher<P>) -> bool {
        match watcher.poll() {
            Some(prefers_dark) => {
                self.on_system_preference_changed(prefers_dark);
                true
            }
            None => false,
        }
    }

    /// Sets the mode programmatically.
    ///
    /// Applies and persists the mode but neither marks it as a user choice
    /// nor shows a notification.
    #[tracing::instrument(skip(self))]
    pub fn set_theme(&mut self, mode: ColorMode) {
        self.preference.value = mode;
        self.persist();
        self.apply();
    }

    /// Like [`set_theme`](Self::set_theme), from the stored string form.
    pub fn set_theme_str(&mut self, name: &str) -> Result<ColorMode, ThemeError> {
        let mode = name.parse::<ColorMode>().inspect_err(|err| {
            tracing::warn!(%err, "refusing to set theme");
        })?;
        self.set_theme(mode);
        Ok(mode)
    }

    /// Flips the mode through [`set_theme`](Self::set_theme) and returns the new one.
    pub fn toggle(&mut self) -> ColorMode {
        let next = self.current().opposite();
        self.set_theme(next);
        next
    }

    fn apply(&mut self) {
        let mode = self.preference.value;
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.set_attribute(&self.config.attribute, mode.as_str());
        }
        if let Some(control) = self.control.as_deref_mut() {
            control.set_checked(mode.is_dark());
        }
        tracing::debug!(mode = %mode, attribute = %self.config.attribute, "theme applied");
    }

    fn persist(&mut self) {
        let Some(store) = self.store.as_deref_mut() else {
            return;
        };
        if let Err(err) = self.preference.save(store, &self.config) {
            tracing::warn!(error = %err, "failed to persist theme preference");
        }
    }

    fn clear_stale_user_flag(&mut self) {
        let Some(store) = self.store.as_deref_mut() else {
            return;
        };
        if store.get(&self.config.user_flag_key).is_some() {
            if let Err(err) = store.remove(&self.config.user_flag_key) {
                tracing::warn!(error = %err, "failed to clear user theme flag");
            }
        }
    }

    fn notify(&mut self, message: String, kind: NotificationKind) {
        if let Some(notifier) = self.notifier.as_deref_mut() {
            notifier.notify(Notification::new(message, kind).with_ttl(self.config.notification_ttl()));
        }
    }
}

/// Collects the capabilities a [`ThemeResolver`] drives.
pub struct ThemeResolverBuilder {
    config: ResolverConfig,
    store: Option<Box<dyn PreferenceStore>>,
    sink: Option<Box<dyn PresentationSink>>,
    controls: Vec<Box<dyn ToggleControl>>,
    notifier: Option<Box<dyn Notifier>>,
}

impl ThemeResolverBuilder {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            store: None,
            sink: None,
            controls: Vec::new(),
            notifier: None,
        }
    }

    pub fn store(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn sink(mut self, sink: impl PresentationSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Offers a control. The first one whose id matches
    /// [`ResolverConfig::control_id`] is used.
    pub fn control(mut self, control: impl ToggleControl + 'static) -> Self {
        self.controls.push(Box::new(control));
        self
    }

    pub fn notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    pub fn build(self) -> ThemeResolver {
        let control_id = self.config.control_id.as_str();
        let control = self.controls.into_iter().find(|c| c.id() == control_id);

        if self.store.is_none() {
            tracing::warn!("no preference store, theme will not persist");
        }
        if self.sink.is_none() {
            tracing::warn!("no presentation sink, theme will not be rendered");
        }
        if control.is_none() {
            tracing::warn!(control_id, "theme switch control not found");
        }

        ThemeResolver {
            config: self.config,
            preference: ThemePreference::default(),
            store: self.store,
            sink: self.sink,
            control,
            notifier: self.notifier,
        }
    }
}
