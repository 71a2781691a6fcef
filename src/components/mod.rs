//! Page sections for Showcase.

mod color_palette;
mod features;
mod footer;
mod header;
mod hero;
mod pipeline;
mod section_heading;

pub use color_palette::ColorPalette;
pub use features::FeatureGrid;
pub use footer::SiteFooter;
pub use header::AppHeader;
pub use hero::HeroSection;
pub use pipeline::PipelineSection;
pub use section_heading::SectionHeader;
