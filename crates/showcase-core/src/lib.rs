//! Showcase Core Library
//!
//! Theme resolution and page content for the Showcase site.
//!
//! ## Overview
//!
//! The site renders in two modes, light and dark. A [`ThemeResolver`] owns the
//! current [`ThemeMode`], follows the host's color-scheme preference through a
//! [`PreferenceSource`], and lets the user flip the mode manually. Colors are
//! never stored: every mode maps to exactly one [`ColorSet`] via
//! [`colors_for`].
//!
//! ## Quick Start
//!
//! ```
//! use showcase_core::{colors_for, PreferenceChannel, ThemeMode, ThemeResolver};
//!
//! let host = PreferenceChannel::new();
//! host.publish(Some(true));
//!
//! let mut resolver = ThemeResolver::initialize(&host);
//! resolver.subscribe(&host, |_mode| {});
//! assert_eq!(resolver.mode(), ThemeMode::Dark);
//!
//! host.publish(Some(false));
//! assert_eq!(resolver.mode(), ThemeMode::Light);
//!
//! resolver.toggle();
//! assert_eq!(resolver.colors(), colors_for(ThemeMode::Dark));
//! ```

pub mod content;
pub mod error;
pub mod preference;
pub mod resolver;
pub mod theme;

// Re-exports
pub use content::{Feature, FooterLink, Hero, PipelineStep, SectionHeading, Sections, SiteContent};
pub use error::{ShowcaseError, ShowcaseResult};
pub use preference::{FixedPreference, PreferenceChannel, PreferenceSource, Subscription};
pub use resolver::ThemeResolver;
pub use theme::{colors_for, ColorSet, SemanticRole, ThemeMode};
