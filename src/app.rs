use dioxus::prelude::*;

use crate::context::{get_launch_config, use_theme_provider};
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the theme resolver, provides it to the page, and applies the current
/// colors as CSS custom properties on the page root.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_launch_config);
    let theme = use_theme_provider(config.theme);

    let mode = theme.mode();
    let root_style = format!("color-scheme: {}; {}", mode, theme.colors().css_declarations());
    let root_class = if mode.is_dark() { "app dark" } else { "app" };

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "{root_class}",
            "data-theme": "{mode}",
            style: "{root_style}",
            Landing { content: config.content.clone() }
        }
    }
}
