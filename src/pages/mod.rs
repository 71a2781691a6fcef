//! Page components for Showcase.

mod landing;

pub use landing::Landing;
