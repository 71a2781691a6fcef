//! Color Swatch Component
//!
//! One semantic role: a filled chip, the role name and its current value.

use dioxus::prelude::*;
use showcase_core::{ColorSet, SemanticRole};

/// Pick a readable foreground for text drawn on `hex`.
///
/// Uses the relative luminance of an `#RRGGBB` color; anything unparseable
/// gets dark text.
pub fn contrast_text(hex: &str) -> &'static str {
    match parse_hex(hex) {
        Some((r, g, b)) => {
            let luminance = 0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32;
            if luminance > 140.0 {
                "#000000"
            } else {
                "#FFFFFF"
            }
        }
        None => "#000000",
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Swatch for a single role
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ColorSwatch { role: SemanticRole::Accent, colors: theme.colors() }
/// }
/// ```
#[component]
pub fn ColorSwatch(role: SemanticRole, colors: ColorSet) -> Element {
    let value = colors.get(role);
    let name = role.name();
    let chip_style = format!("background: {}; color: {};", value, contrast_text(value));

    rsx! {
        figure { class: "swatch",
            div { class: "swatch__chip", style: "{chip_style}",
                span { class: "swatch__value", "{value}" }
            }
            figcaption { class: "swatch__role", "{name}" }
        }
    }
}
