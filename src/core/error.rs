use thiserror::Error;

/// Errors that can occur while parsing a UPC-A or EAN-13 string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Fewer characters than the code width.
    #[error("code is too short: expected {expected} digits, got {found}")]
    TooShort { expected: usize, found: usize },

    /// More characters than the code width.
    #[error("code is too long: expected {expected} digits, got {found}")]
    TooLong { expected: usize, found: usize },

    /// A character outside `'0'..='9'`. `position` is zero-based.
    #[error("invalid digit {character:?} at position {position}")]
    InvalidDigit { character: char, position: usize },

    /// The trailing digit does not match the computed GS1 check digit.
    #[error("invalid check digit: expected {expected}, got {found}")]
    InvalidCheckDigit { expected: u8, found: u8 },
}

impl ParseError {
    /// True when the input was well-formed but the check digit was wrong.
    ///
    /// This usually means a typo in an otherwise plausible code, as opposed to
    /// input that is not a code at all.
    pub fn is_check_digit_error(&self) -> bool {
        matches!(self, Self::InvalidCheckDigit { .. })
    }
}
