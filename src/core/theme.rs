/// Persisted dark-mode preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeFlag {
    Enabled,
    #[default]
    Disabled,
}

impl ThemeFlag {
    pub const STORAGE_KEY: &'static str = "darkMode";

    /// Anything other than the exact string `"enabled"` reads as disabled.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("enabled") => ThemeFlag::Enabled,
            _ => ThemeFlag::Disabled,
        }
    }

    #[inline]
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            ThemeFlag::Enabled
        } else {
            ThemeFlag::Disabled
        }
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeFlag::Enabled => "enabled",
            ThemeFlag::Disabled => "disabled",
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == ThemeFlag::Enabled
    }
}

/// Synchronous string key-value store backing the theme flag.
///
/// Implemented for `web_sys::Storage` in the browser; tests use an in-memory map.
pub trait FlagStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

pub fn load_theme<S: FlagStore + ?Sized>(store: &S) -> ThemeFlag {
    ThemeFlag::from_stored(store.read(ThemeFlag::STORAGE_KEY).as_deref())
}

/// Persist the flag matching the control's new checked state and return it.
pub fn toggle_theme<S: FlagStore + ?Sized>(store: &S, checked: bool) -> ThemeFlag {
    let flag = ThemeFlag::from_checked(checked);
    store.write(ThemeFlag::STORAGE_KEY, flag.as_str());
    flag
}
