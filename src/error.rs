use thiserror::Error;

/// Reasons a candidate number cannot be checked at all.
/// A failing checksum is not an error — that is an ordinary `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing left to check (empty string, or separators only).
    #[error("card number is empty")]
    EmptyInput,

    /// A character outside '0'..='9' survived normalization.
    #[error("invalid character {found:?} at position {position}")]
    InvalidInput { found: char, position: usize },
}
