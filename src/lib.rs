//! # Portal Theme - light/dark theme resolution
//!
//! `portal-theme` decides whether a page renders light or dark, keeps the
//! rendering surface in agreement with that decision and remembers it.
//!
//! The rules are small but strict:
//!
//! - A persisted choice always wins at load time.
//! - On a first visit the platform's color-scheme preference is used and
//!   persisted immediately, without marking it as a user choice.
//! - Flipping the theme switch is a user choice. From then on system
//!   preference changes are ignored.
//! - While no user choice exists, system preference changes are followed and
//!   announced.
//!
//! The resolver never talks to a real page. Storage, the presentation
//! attribute, the switch and notifications are injected capabilities
//! ([`PreferenceStore`], [`PresentationSink`], [`ToggleControl`],
//! [`Notifier`]), each optional.
//!
//! ## Quick Start
//!
//! ```rust
//! use portal_theme::{Document, FileStore, ResolverConfig, ThemeResolver, Toggle};
//!
//! # let dir = tempfile::tempdir().unwrap();
//! # let path = dir.path().join("prefs.json");
//! let document = Document::new();
//! let mut resolver = ThemeResolver::builder(ResolverConfig::default())
//!     .store(FileStore::open(&path).unwrap())
//!     .sink(document.clone())
//!     .control(Toggle::new("themeSwitcher"))
//!     .build();
//!
//! resolver.initialize(false);
//! assert_eq!(document.attribute("data-theme").as_deref(), Some("light"));
//! ```
//!
//! ## Following the platform
//!
//! Outside a browser there is no change event, so [`PreferenceWatcher`]
//! polls a [`SystemPreference`] ([`OsPreference`] by default) and reports
//! each change once:
//!
//! ```rust,no_run
//! use portal_theme::{MemoryStore, OsPreference, PreferenceWatcher, ResolverConfig, ThemeResolver};
//!
//! let mut watcher = PreferenceWatcher::new(OsPreference);
//! let mut resolver = ThemeResolver::builder(ResolverConfig::default())
//!     .store(MemoryStore::new())
//!     .build();
//! resolver.initialize(watcher.current());
//!
//! loop {
//!     resolver.poll_system(&mut watcher);
//!     std::thread::sleep(std::time::Duration::from_secs(1));
//! }
//! ```

pub mod config;
pub mod error;
pub mod notify;
pub mod store;
pub mod surface;
pub mod theme;

pub use config::ResolverConfig;
pub use error::{ConfigError, StoreError, ThemeError};
pub use notify::{
    ConsoleNotifier, MessageTemplates, Notification, NotificationKind, Notifier,
    RecordingNotifier, DEFAULT_TTL,
};
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use surface::{Document, PresentationSink, Toggle, ToggleControl};
pub use theme::{
    detect_color_mode, reset_theme_detector, set_theme_detector, ColorMode, OsPreference,
    PreferenceWatcher, SystemPreference, ThemePreference, ThemeResolver, ThemeResolverBuilder,
};
