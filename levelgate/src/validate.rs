//! Argument checks used by the façade.

use crate::error::LogError;

/// Require a present, non-blank string.
///
/// Returns the value untouched on success. `None` is a
/// [`LogError::MissingArgument`]; an empty or whitespace-only value is a
/// [`LogError::InvalidArgument`].
pub fn require_non_blank<'a>(
    value: Option<&'a str>,
    name: &'static str,
) -> Result<&'a str, LogError> {
    let value = value.ok_or(LogError::MissingArgument(name))?;
    if value.trim().is_empty() {
        return Err(LogError::InvalidArgument {
            name,
            reason: if value.is_empty() {
                "must not be empty".to_string()
            } else {
                "must not be blank".to_string()
            },
        });
    }
    Ok(value)
}

/// Require an optional reference to be present.
pub fn require_present<'a, T: ?Sized>(
    value: Option<&'a T>,
    name: &'static str,
) -> Result<&'a T, LogError> {
    value.ok_or(LogError::MissingArgument(name))
}
