//! The persisted theme preference.

use super::mode::ColorMode;
use crate::config::ResolverConfig;
use crate::error::StoreError;
use crate::store::PreferenceStore;

const USER_SET: &str = "true";

/// The active mode plus whether the user chose it explicitly.
///
/// Stored as two independent entries: the mode under
/// [`ResolverConfig::theme_key`] and the literal `"true"` under
/// [`ResolverConfig::user_flag_key`] once the user has toggled the switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemePreference {
    pub value: ColorMode,
    pub is_user_set: bool,
}

impl ThemePreference {
    /// A preference seeded from the platform, not chosen by the user.
    pub fn from_system(prefers_dark: bool) -> Self {
        Self {
            value: ColorMode::from_prefers_dark(prefers_dark),
            is_user_set: false,
        }
    }

    /// Reads the persisted preference, `None` if no theme was ever stored.
    ///
    /// An empty stored theme counts as absent. Any other stored value other than `light`/`dark` is kept in the store untouched
    /// and read as light, which is what the stylesheet falls back to.
    pub fn load(store: &dyn PreferenceStore, config: &ResolverConfig) -> Option<Self> {
        let raw = store
            .get(&config.theme_key)
            .filter(|raw| !raw.is_empty())?;
        let value = raw.parse::<ColorMode>().unwrap_or_else(|err| {
            tracing::warn!(key = %config.theme_key, %err, "unrecognised stored theme, reading as light");
            ColorMode::Light
        });
        let is_user_set = Self::load_user_flag(store, config);
        Some(Self { value, is_user_set })
    }

    /// Whether the store records an explicit user choice.
    pub fn load_user_flag(store: &dyn PreferenceStore, config: &ResolverConfig) -> bool {
        store.get(&config.user_flag_key).as_deref() == Some(USER_SET)
    }

    pub fn save_value(
        &self,
        store: &mut dyn PreferenceStore,
        config: &ResolverConfig,
    ) -> Result<(), StoreError> {
        store.set(&config.theme_key, self.value.as_str())
    }

    /// Writes the value and, if set, the user flag.
    ///
    /// The flag is only ever written, never cleared, so a `false` here leaves
    /// any stored flag alone.
    pub fn save(
        &self,
        store: &mut dyn PreferenceStore,
        config: &ResolverConfig,
    ) -> Result<(), StoreError> {
        self.save_value(store, config)?;
        if self.is_user_set {
            store.set(&config.user_flag_key, USER_SET)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_load_absent() {
        let store = MemoryStore::new();
        assert_eq!(ThemePreference::load(&store, &ResolverConfig::default()), None);
    }

    #[test]
    fn test_load_flag_only_is_absent() {
        let store = MemoryStore::with_entries([("theme-user-preference", "true")]);
        assert_eq!(ThemePreference::load(&store, &ResolverConfig::default()), None);
    }

    #[test]
    fn test_load_user_set() {
        let store = MemoryStore::with_entries([("theme", "dark"), ("theme-user-preference", "true")]);
        let pref = ThemePreference::load(&store, &ResolverConfig::default()).unwrap();
        assert_eq!(pref.value, ColorMode::Dark);
        assert!(pref.is_user_set);
    }

    #[test]
    fn test_empty_theme_is_absent() {
        let store = MemoryStore::with_entries([("theme", ""), ("theme-user-preference", "true")]);
        assert_eq!(ThemePreference::load(&store, &ResolverConfig::default()), None);
        assert!(ThemePreference::load_user_flag(&store, &ResolverConfig::default()));
    }

    #[test]
    fn test_flag_must_be_exactly_true() {
        let store = MemoryStore::with_entries([("theme", "dark"), ("theme-user-preference", "yes")]);
        let pref = ThemePreference::load(&store, &ResolverConfig::default()).unwrap();
        assert!(!pref.is_user_set);
    }

    #[test]
    fn test_unknown_value_reads_as_light() {
        let store = MemoryStore::with_entries([("theme", "sepia")]);
        let pref = ThemePreference::load(&store, &ResolverConfig::default()).unwrap();
        assert_eq!(pref.value, ColorMode::Light);
        assert_eq!(store.get("theme").as_deref(), Some("sepia"));
    }

    #[test]
    fn test_save_with_custom_keys() {
        let config = ResolverConfig {
            theme_key: "t".to_string(),
            user_flag_key: "u".to_string(),
            ..Default::default()
        };
        let mut store = MemoryStore::new();
        let pref = ThemePreference {
            value: ColorMode::Dark,
            is_user_set: true,
        };
        pref.save(&mut store, &config).unwrap();
        assert_eq!(store.get("t").as_deref(), Some("dark"));
        assert_eq!(store.get("u").as_deref(), Some("true"));
        assert_eq!(ThemePreference::load(&store, &config), Some(pref));
    }

    #[test]
    fn test_save_system_value_leaves_flag_unset() {
        let mut store = MemoryStore::new();
        ThemePreference::from_system(true)
            .save(&mut store, &ResolverConfig::default())
            .unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert!(store.get("theme-user-preference").is_none());
    }
}
