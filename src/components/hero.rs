//! Hero Section
//!
//! Title, tagline and the two call-to-action buttons.

use dioxus::prelude::*;
use showcase_core::Hero;
use showcase_ui::{Button, ButtonVariant};

const SCROLL_TO_FEATURES: &str = r#"
document.getElementById("features")?.scrollIntoView({ behavior: "smooth" });
return true;
"#;

const SCROLL_TO_PALETTE: &str = r#"
document.getElementById("palette")?.scrollIntoView({ behavior: "smooth" });
return true;
"#;

/// Run a scroll script in the webview, logging if it fails.
fn scroll_with(script: &'static str) {
    spawn(async move {
        if let Err(e) = document::eval(script).join::<bool>().await {
            tracing::warn!("Scroll script failed: {:?}", e);
        }
    });
}

#[component]
pub fn HeroSection(hero: Hero) -> Element {
    rsx! {
        section { class: "hero",
            h2 { class: "hero__title", "{hero.title}" }
            p { class: "hero__tagline", "{hero.tagline}" }

            div { class: "hero__actions",
                Button {
                    variant: ButtonVariant::Primary,
                    class: "hero__cta".to_string(),
                    onclick: move |_| scroll_with(SCROLL_TO_FEATURES),
                    "{hero.call_to_action}"
                }
                if !hero.secondary_action.is_empty() {
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "hero__cta".to_string(),
                        onclick: move |_| scroll_with(SCROLL_TO_PALETTE),
                        "{hero.secondary_action}"
                    }
                }
            }
        }
    }
}
