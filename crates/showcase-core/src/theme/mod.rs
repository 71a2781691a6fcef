//! Theme modes and the colors derived from them.
//!
//! A [`ThemeMode`] is the only theme state the site holds. The matching
//! [`ColorSet`] is always recomputed through [`colors_for`].

mod palette;

pub use palette::{colors_for, ColorSet, SemanticRole};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShowcaseError;

/// Light or dark display state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light backgrounds, dark text. Used when the host has no preference.
    #[default]
    Light,
    /// Dark backgrounds, light text
    Dark,
}

impl ThemeMode {
    /// Both modes, light first.
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// Map a host "prefers dark" reading to a mode.
    ///
    /// An unavailable reading resolves to [`ThemeMode::Light`].
    pub fn from_prefers_dark(prefers_dark: Option<bool>) -> Self {
        match prefers_dark {
            Some(true) => ThemeMode::Dark,
            Some(false) | None => ThemeMode::Light,
        }
    }

    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Lowercase name, also the CSS `color-scheme` keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Colors for this mode. Shorthand for [`colors_for`].
    pub fn colors(self) -> ColorSet {
        colors_for(self)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ShowcaseError::UnknownTheme(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_prefers_dark() {
        assert_eq!(ThemeMode::from_prefers_dark(Some(true)), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_prefers_dark(Some(false)), ThemeMode::Light);
        assert_eq!(ThemeMode::from_prefers_dark(None), ThemeMode::Light);
    }

    #[test]
    fn test_toggled_is_involution() {
        for mode in ThemeMode::ALL {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_is_dark_and_colors() {
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
        for mode in ThemeMode::ALL {
            assert_eq!(mode.colors(), colors_for(mode));
        }
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!(" Dark ".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!(matches!(
            "sepia".parse::<ThemeMode>(),
            Err(ShowcaseError::UnknownTheme(_))
        ));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }
}
