//! Feature Card Component

use dioxus::prelude::*;
use showcase_core::Feature;

/// Card with an icon glyph, title and short description.
#[component]
pub fn FeatureCard(feature: Feature) -> Element {
    rsx! {
        article { class: "feature-card",
            div { class: "feature-card__icon", "{feature.icon}" }
            h3 { class: "feature-card__title", "{feature.title}" }
            p { class: "feature-card__body", "{feature.description}" }
        }
    }
}
