//! Library errors.
//!
//! Writes to standard output never pass through this type; print functions
//! return the `std::io::Error` they got.

/// Errors raised by parsing and renderer installation.
#[derive(Debug, thiserror::Error)]
pub enum TintError {
    #[error("Invalid color mode '{value}' (expected auto, always or never)")]
    InvalidColorMode { value: String },

    #[error("Invalid color code '{value}' (expected a number from 0 to 255 or a color name)")]
    InvalidCode { value: String },

    #[error("A global renderer is already installed")]
    RendererAlreadyInstalled,
}
