//! Reusable presentational components.

mod button;
mod color_swatch;
mod feature_card;
mod pipeline_step;
mod theme_toggle;

pub use button::*;
pub use color_swatch::*;
pub use feature_card::*;
pub use pipeline_step::*;
pub use theme_toggle::*;
