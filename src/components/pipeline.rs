//! Pipeline Section

use dioxus::prelude::*;
use showcase_core::{PipelineStep, SectionHeading};
use showcase_ui::PipelineStepItem;

use super::SectionHeader;

/// Ordered list of pipeline steps.
#[component]
pub fn PipelineSection(heading: SectionHeading, steps: Vec<PipelineStep>) -> Element {
    let count = steps.len();

    rsx! {
        section { class: "section pipeline", id: "pipeline",
            SectionHeader { heading }
            ol { class: "pipeline__list",
                for (index, step) in steps.into_iter().enumerate() {
                    PipelineStepItem {
                        key: "{index}",
                        index,
                        step,
                        last: index + 1 == count,
                    }
                }
            }
        }
    }
}
