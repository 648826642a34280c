//! Error types for the logging façade.

use thiserror::Error;

use crate::format::FormatError;

/// Errors raised by the façade before anything reaches a sink.
///
/// Every variant is a caller mistake. Nothing is retried and nothing is
/// written when one of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogError {
    /// A required argument (message, template, fault, context) was absent.
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// An argument was present but unusable, e.g. a blank message.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// The template could not be applied to the supplied arguments.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl LogError {
    /// Returns true for [`LogError::MissingArgument`].
    pub fn is_missing(&self) -> bool {
        matches!(self, LogError::MissingArgument(_))
    }

    /// Returns true for [`LogError::InvalidArgument`].
    pub fn is_invalid(&self) -> bool {
        matches!(self, LogError::InvalidArgument { .. })
    }
}
