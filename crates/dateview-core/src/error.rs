//! Error types for the date display library.

use thiserror::Error;

/// Error type for all date display operations.
///
/// The taxonomy is deliberately small: every failure is either a required
/// value that is absent, or a value that is present but violates a stated
/// constraint (blank where non-blank is required, a number outside its range,
/// or text that does not parse under the given pattern). Errors are raised
/// before any computation proceeds; there are no partial results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateDisplayError {
    /// A required argument is absent. Reference arguments cannot be absent in
    /// Rust, so this fires on the string input paths when a required string
    /// is empty.
    #[error("required argument '{field}' is missing")]
    MissingArgument { field: &'static str },
    /// An argument is present but invalid: blank where non-blank is required,
    /// a numeric value outside its documented range, or an unparseable date
    /// string or pattern.
    #[error("invalid argument '{field}': {reason}")]
    InvalidArgument { field: &'static str, reason: String },
}

impl DateDisplayError {
    /// Creates a missing-argument error for the named field.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingArgument { field }
    }

    /// Creates an invalid-argument error for the named field.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias for date display operations.
pub type Result<T> = std::result::Result<T, DateDisplayError>;

/// Validates that a required string is neither empty nor whitespace-only.
///
/// An empty string is treated as an absent argument; a whitespace-only
/// string is present but blank, which is invalid wherever this check runs.
pub(crate) fn require_non_blank(value: &str, field: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(DateDisplayError::missing(field));
    }
    if value.trim().is_empty() {
        return Err(DateDisplayError::invalid(field, "can't be blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_blank() {
        assert_eq!(
            require_non_blank("", "pattern"),
            Err(DateDisplayError::missing("pattern"))
        );
        assert_eq!(
            require_non_blank("   ", "pattern"),
            Err(DateDisplayError::invalid("pattern", "can't be blank"))
        );
        assert_eq!(require_non_blank("%Y-%m-%d", "pattern"), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        let missing = DateDisplayError::missing("from_date");
        assert_eq!(
            format!("{missing}"),
            "required argument 'from_date' is missing"
        );

        let invalid = DateDisplayError::invalid("millis", "can't be negative");
        assert_eq!(
            format!("{invalid}"),
            "invalid argument 'millis': can't be negative"
        );
    }
}
