//! Showcase UI Components
//!
//! Dioxus components for the Showcase page. Components are stateless: they
//! render the data and the [`showcase_core::ColorSet`] they are given.
//!
//! ## Colors
//!
//! The page root publishes every semantic role as a CSS custom property
//! (`--color-primary`, `--color-text-muted`, ...). Components style
//! themselves with those variables, and take an explicit `ColorSet` prop only
//! where a value has to be shown or computed, as in [`ColorSwatch`].

pub mod components;

pub use components::*;
