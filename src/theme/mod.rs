//! Global styles for Showcase.
//!
//! Colors come from the `--color-*` custom properties the App sets on the
//! page root, so the stylesheet itself is the same in both modes.

mod styles;

pub use styles::GLOBAL_STYLES;
