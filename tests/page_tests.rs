// Host-side tests for the theme flag and snippet copy text.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod theme {
    include!("../src/core/theme.rs");
}
mod snippet {
    include!("../src/core/snippet.rs");
}

use snippet::*;
use std::cell::RefCell;
use std::collections::HashMap;
use theme::*;

#[derive(Default)]
struct MemoryStore(RefCell<HashMap<String, String>>);

impl FlagStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

#[test]
fn theme_defaults_to_light() {
    let store = MemoryStore::default();
    assert_eq!(load_theme(&store), ThemeFlag::Disabled);
    assert!(!load_theme(&store).is_dark());
}

#[test]
fn only_exact_enabled_reads_as_dark() {
    assert_eq!(ThemeFlag::from_stored(Some("enabled")), ThemeFlag::Enabled);
    for v in ["disabled", "Enabled", "true", "1", ""] {
        assert_eq!(ThemeFlag::from_stored(Some(v)), ThemeFlag::Disabled, "{v:?}");
    }
    assert_eq!(ThemeFlag::from_stored(None), ThemeFlag::Disabled);
}

#[test]
fn persisted_flag_tracks_checked_state() {
    let store = MemoryStore::default();
    for checked in [true, false, false, true, true, false] {
        let flag = toggle_theme(&store, checked);
        let stored = store.read(ThemeFlag::STORAGE_KEY);
        assert_eq!(stored.as_deref() == Some("enabled"), checked);
        assert_eq!(flag.is_dark(), checked);
        assert_eq!(load_theme(&store), flag);
    }
}

#[test]
fn stored_values_are_literal_strings() {
    let store = MemoryStore::default();
    toggle_theme(&store, false);
    assert_eq!(store.read("darkMode").as_deref(), Some("disabled"));
    toggle_theme(&store, true);
    assert_eq!(store.read("darkMode").as_deref(), Some("enabled"));
}

#[test]
fn copy_text_is_prefixed_command() {
    for cmd in ["khuliso-cli", "a", "create-app --yes"] {
        assert_eq!(compose_copy_text(Some(cmd)), Some(format!("npx {cmd}")));
    }
}

#[test]
fn copy_text_skips_missing_or_empty_command() {
    assert_eq!(compose_copy_text(None), None);
    assert_eq!(compose_copy_text(Some("")), None);
}

#[test]
fn check_icon_extends_copy_icon() {
    assert!(CHECK_ICON_SVG.starts_with(COPY_ICON_SVG));
    assert!(CHECK_ICON_SVG.len() > COPY_ICON_SVG.len());
}
