//! Color Palette Section
//!
//! One swatch per semantic role for the current mode.

use dioxus::prelude::*;
use showcase_core::{SectionHeading, SemanticRole};
use showcase_ui::ColorSwatch;

use super::SectionHeader;
use crate::context::use_theme;

#[component]
pub fn ColorPalette(heading: SectionHeading) -> Element {
    let theme = use_theme();
    let mode = theme.mode();
    let colors = theme.colors();

    rsx! {
        section { class: "section palette", id: "palette",
            SectionHeader { heading }
            p { class: "palette__mode", "Showing the {mode} set" }
            div { class: "palette__grid",
                for role in SemanticRole::ALL {
                    ColorSwatch { key: "{role.name()}", role, colors }
                }
            }
        }
    }
}
