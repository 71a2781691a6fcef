//! Landing page - the whole site.
//!
//! Top to bottom: header, hero, color palette, pipeline, features, footer.

use dioxus::prelude::*;
use showcase_core::SiteContent;

use crate::components::{
    AppHeader, ColorPalette, FeatureGrid, HeroSection, PipelineSection, SiteFooter,
};

/// Landing page component.
#[component]
pub fn Landing(content: SiteContent) -> Element {
    let sections = content.sections.clone();

    rsx! {
        AppHeader { brand: content.brand.clone() }
        main { class: "landing",
            HeroSection { hero: content.hero.clone() }
            ColorPalette { heading: sections.palette }
            PipelineSection { heading: sections.pipeline, steps: content.pipeline.clone() }
            FeatureGrid { heading: sections.features, features: content.features.clone() }
        }
        SiteFooter { content }
    }
}
