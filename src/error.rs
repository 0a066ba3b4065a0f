//! Errors reported by the picker.

use thiserror::Error;

/// Error type for picker operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A hex string was not exactly 6 hex digits, optionally prefixed with
    /// `#`.
    #[error("invalid hex color {0:?}: expected 6 hex digits")]
    InvalidHexFormat(String),

    /// A [`PickerConfig`](crate::PickerConfig) value is out of range.
    #[error("invalid picker configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias using the picker [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
