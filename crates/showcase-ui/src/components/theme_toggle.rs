//! Theme Toggle Component
//!
//! Single parameterless control that flips between light and dark.

use dioxus::prelude::*;
use showcase_core::ThemeMode;

/// Glyph for the current mode: a bolt when dark, sparkles when light.
pub fn toggle_glyph(mode: ThemeMode) -> &'static str {
    if mode.is_dark() {
        "\u{26A1}"
    } else {
        "\u{2728}"
    }
}

/// Button label describing what a click does.
pub fn toggle_label(mode: ThemeMode) -> String {
    format!("Switch to {} mode", mode.toggled())
}

/// Displays the current mode and calls `on_toggle` when clicked.
///
/// # Example
///
/// ```rust,ignore
/// let theme = use_theme();
///
/// rsx! {
///     ThemeToggle {
///         mode: theme.mode(),
///         on_toggle: move |_| theme.toggle(),
///     }
/// }
/// ```
#[component]
pub fn ThemeToggle(mode: ThemeMode, on_toggle: EventHandler<()>) -> Element {
    let label = toggle_label(mode);
    let glyph = toggle_glyph(mode);

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            title: "{label}",
            "aria-label": "{label}",
            onclick: move |_| on_toggle.call(()),
            span { class: "theme-toggle__glyph", "{glyph}" }
            span { class: "theme-toggle__mode", "{mode}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_differs_per_mode() {
        assert_ne!(toggle_glyph(ThemeMode::Light), toggle_glyph(ThemeMode::Dark));
        assert_eq!(toggle_glyph(ThemeMode::Dark), "\u{26A1}");
        assert_eq!(toggle_glyph(ThemeMode::Light), "\u{2728}");
    }

    #[test]
    fn label_names_target_mode() {
        assert_eq!(toggle_label(ThemeMode::Light), "Switch to dark mode");
        assert_eq!(toggle_label(ThemeMode::Dark), "Switch to light mode");
    }
}
