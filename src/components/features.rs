//! Features Section

use dioxus::prelude::*;
use showcase_core::{Feature, SectionHeading};
use showcase_ui::FeatureCard;

use super::SectionHeader;

#[component]
pub fn FeatureGrid(heading: SectionHeading, features: Vec<Feature>) -> Element {
    rsx! {
        section { class: "section features", id: "features",
            SectionHeader { heading }
            div { class: "features__grid",
                for (index, feature) in features.into_iter().enumerate() {
                    FeatureCard { key: "{index}", feature }
                }
            }
        }
    }
}
