//! Light/dark theme restore and toggle.
//!
//! The active theme is the `dark` class on the `<html>` element. Toggle
//! flips that class and writes the resulting theme name back to storage so
//! the next page load can restore it.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a store that silently drops writes only
//! costs the preference on the next load.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::dom::DocumentRoot;
use super::storage::KeyValueStore;

/// Class applied to the document root while dark mode is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference. Unknown values are ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme currently shown by the document root.
pub fn current(root: &dyn DocumentRoot) -> Theme {
    if root.has_class(DARK_CLASS) { Theme::Dark } else { Theme::Light }
}

/// Read the persisted preference, if any.
pub fn read_preference(store: &dyn KeyValueStore, key: &str) -> Option<Theme> {
    store.get(key).as_deref().and_then(Theme::parse)
}

pub fn apply(root: &dyn DocumentRoot, theme: Theme) {
    root.set_class(DARK_CLASS, theme == Theme::Dark);
}

/// Apply the persisted preference on page load.
///
/// With nothing stored the root is left as the server rendered it.
pub fn restore(store: &dyn KeyValueStore, root: &dyn DocumentRoot, key: &str) -> Theme {
    match read_preference(store, key) {
        Some(theme) => {
            apply(root, theme);
            theme
        }
        None => current(root),
    }
}

/// Flip the document theme and persist the new choice.
pub fn toggle(store: &dyn KeyValueStore, root: &dyn DocumentRoot, key: &str) -> Theme {
    let next = current(root).flipped();
    apply(root, next);
    store.set(key, next.as_str());
    log::debug!("theme set to {}", next.as_str());
    next
}
