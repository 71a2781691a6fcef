//! Error types for Showcase

use thiserror::Error;

/// Main error type for Showcase operations.
///
/// Theme resolution itself cannot fail; these cover loading content and
/// parsing user-supplied settings.
#[derive(Error, Debug)]
pub enum ShowcaseError {
    /// Unknown theme name (expected "light" or "dark")
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Content file could not be parsed
    #[error("Invalid content: {0}")]
    ContentFormat(#[from] serde_json::Error),

    /// Content parsed but a required section is empty
    #[error("Content section is empty: {0}")]
    EmptySection(&'static str),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using ShowcaseError
pub type ShowcaseResult<T> = Result<T, ShowcaseError>;
