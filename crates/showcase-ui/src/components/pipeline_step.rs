//! Pipeline Step Component
//!
//! Numbered entry in the pipeline list. The connector line between steps is
//! drawn by CSS and hidden on the last step. An active step fills its number
//! badge with the primary color.

use dioxus::prelude::*;
use showcase_core::PipelineStep;

/// Two-digit, 1-based step label ("01", "02", ...).
pub fn step_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// CSS classes for a step in the given position and state.
pub fn step_class(active: bool, last: bool) -> String {
    let mut class = String::from("pipeline-step");
    if active {
        class.push_str(" active");
    }
    if last {
        class.push_str(" last");
    }
    class
}

/// Properties for the PipelineStepItem component
#[derive(Clone, PartialEq, Props)]
pub struct PipelineStepItemProps {
    /// Zero-based position in the list
    pub index: usize,
    pub step: PipelineStep,
    /// Whether this is the final step (no trailing connector)
    #[props(default = false)]
    pub last: bool,
}

#[component]
pub fn PipelineStepItem(props: PipelineStepItemProps) -> Element {
    let number = step_number(props.index);
    let class = step_class(props.step.active, props.last);

    rsx! {
        li {
            class: "{class}",
            "aria-current": if props.step.active { "step" } else { "false" },
            span { class: "pipeline-step__number", "{number}" }
            div { class: "pipeline-step__text",
                h3 { class: "pipeline-step__title", "{props.step.title}" }
                p { class: "pipeline-step__body", "{props.step.description}" }
            }
        }
    }
}
