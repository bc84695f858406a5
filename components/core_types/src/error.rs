//! Error types for the value model.
//!
//! Classification itself never fails. Errors only arise when text has to be
//! turned into a model value: parsing a tag label or compiling a pattern.

use thiserror::Error;

/// An error raised while building tags or values from text.
///
/// # Examples
///
/// ```
/// use core_types::{RealType, TagError};
///
/// let err = "integer".parse::<RealType>().unwrap_err();
/// assert_eq!(err, TagError::UnknownTag("integer".to_string()));
/// assert_eq!(err.to_string(), "unknown type tag 'integer'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// The label is not one of the known type tags
    #[error("unknown type tag '{0}'")]
    UnknownTag(String),

    /// The pattern could not be compiled
    #[error("invalid regular expression /{pattern}/: {reason}")]
    InvalidRegExp {
        /// Pattern as written
        pattern: String,
        /// Compiler message
        reason: String,
    },

    /// Unsupported or repeated regular expression flag
    #[error("invalid regular expression flags '{0}'")]
    InvalidFlags(String),
}

/// Result type for value construction.
pub type TagResult<T> = Result<T, TagError>;
