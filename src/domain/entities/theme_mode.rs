//! ThemeMode - which visual palette is active
//!
//! Exactly Light or Dark; there is no "system" variant. The persisted
//! representation is the lowercase literal `"light"` / `"dark"`.

/// Active theme palette
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    /// Light palette (first-run default)
    #[default]
    Light,
    /// Dark palette
    Dark,
}

impl ThemeMode {
    /// Parse a persisted value. `"dark"` maps to `Dark`; anything else,
    /// including an absent key, falls back to `Light`.
    pub fn from_persisted(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    /// The literal written to the preference store
    pub fn as_persisted(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The other mode
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}
