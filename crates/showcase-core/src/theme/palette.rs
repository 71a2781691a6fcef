//! Semantic color roles and the fixed light/dark color table.

use serde::Serialize;

use super::ThemeMode;

/// A named purpose for a color, independent of its value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SemanticRole {
    Primary,
    Secondary,
    Accent,
    Background,
    BackgroundAlt,
    Text,
    TextMuted,
    Success,
    Warning,
    Error,
}

impl SemanticRole {
    /// Every role, in display order.
    pub const ALL: [SemanticRole; 10] = [
        SemanticRole::Primary,
        SemanticRole::Secondary,
        SemanticRole::Accent,
        SemanticRole::Background,
        SemanticRole::BackgroundAlt,
        SemanticRole::Text,
        SemanticRole::TextMuted,
        SemanticRole::Success,
        SemanticRole::Warning,
        SemanticRole::Error,
    ];

    /// Kebab-case role name
    pub fn name(self) -> &'static str {
        match self {
            SemanticRole::Primary => "primary",
            SemanticRole::Secondary => "secondary",
            SemanticRole::Accent => "accent",
            SemanticRole::Background => "background",
            SemanticRole::BackgroundAlt => "background-alt",
            SemanticRole::Text => "text",
            SemanticRole::TextMuted => "text-muted",
            SemanticRole::Success => "success",
            SemanticRole::Warning => "warning",
            SemanticRole::Error => "error",
        }
    }

    /// CSS custom property carrying this role's color, e.g. `--color-text-muted`.
    pub fn css_var(self) -> String {
        format!("--color-{}", self.name())
    }
}

/// Concrete colors for every semantic role in one mode.
///
/// Built only by [`colors_for`]; there is no way to construct a set with a
/// role missing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ColorSet {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub background_alt: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
}

impl ColorSet {
    pub fn get(&self, role: SemanticRole) -> &'static str {
        match role {
            SemanticRole::Primary => self.primary,
            SemanticRole::Secondary => self.secondary,
            SemanticRole::Accent => self.accent,
            SemanticRole::Background => self.background,
            SemanticRole::BackgroundAlt => self.background_alt,
            SemanticRole::Text => self.text,
            SemanticRole::TextMuted => self.text_muted,
            SemanticRole::Success => self.success,
            SemanticRole::Warning => self.warning,
            SemanticRole::Error => self.error,
        }
    }

    /// `(role, color)` pairs in [`SemanticRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (SemanticRole, &'static str)> + '_ {
        SemanticRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    /// Render as inline CSS custom property declarations.
    ///
    /// ```
    /// use showcase_core::{colors_for, ThemeMode};
    ///
    /// let css = colors_for(ThemeMode::Light).css_declarations();
    /// assert!(css.starts_with("--color-primary: #4A6CF7;"));
    /// ```
    pub fn css_declarations(&self) -> String {
        self.iter()
            .map(|(role, color)| format!("{}: {};", role.css_var(), color))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

const LIGHT: ColorSet = ColorSet {
    primary: "#4A6CF7",
    secondary: "#F7A14A",
    accent: "#D14AF7",
    background: "#FFFFFF",
    background_alt: "#F0F2F5",
    text: "#333333",
    text_muted: "#666666",
    success: "#00C853",
    warning: "#FFD600",
    error: "#FF1744",
};

const DARK: ColorSet = ColorSet {
    primary: "#ADBFFF",
    secondary: "#FFCEA3",
    accent: "#E7BFFF",
    background: "#1A1A1A",
    background_alt: "#2A2C33",
    text: "#E0E0E0",
    text_muted: "#A0A0A0",
    success: "#A0E7A0",
    warning: "#FFF9B0",
    error: "#FFB3B3",
};

/// The color set for a mode. Pure and total.
pub fn colors_for(mode: ThemeMode) -> ColorSet {
    match mode {
        ThemeMode::Light => LIGHT,
        ThemeMode::Dark => DARK,
    }
}
