//! Section title with its subtitle.

use dioxus::prelude::*;
use showcase_core::SectionHeading;

#[component]
pub fn SectionHeader(heading: SectionHeading) -> Element {
    rsx! {
        div { class: "section__header",
            h2 { class: "section__title", "{heading.title}" }
            p { class: "section__lead", "{heading.subtitle}" }
        }
    }
}
