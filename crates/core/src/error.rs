//! Failure kinds for configuration checking and grid access.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenError {
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: i32, y: i32, width: usize, height: usize },
}

impl GenError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { field, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
