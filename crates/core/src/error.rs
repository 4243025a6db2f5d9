/// Validation failures for raw bill inputs.
///
/// `field` carries the human-readable field label (e.g. "Bill amount")
/// so the `Display` output doubles as the client-facing error message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The value could not be converted to a real number.
    #[error("{field} must be a valid number")]
    NotANumber { field: &'static str },

    /// The value could not be converted to an integer.
    #[error("{field} must be a whole number")]
    NotAWholeNumber { field: &'static str },

    /// The value converted but falls outside the allowed range.
    #[error("{field} {constraint}")]
    OutOfRange {
        field: &'static str,
        constraint: &'static str,
    },
}
