use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{ParseError, check_digit, validate};

/// Full EAN-13 width, check digit included.
pub const WIDTH: usize = 13;

/// Largest 12-digit payload.
pub const PAYLOAD_MAX: u64 = 999_999_999_999;

const PREFIX_DIVISOR: u64 = 10_000_000_000;

/// A validated European Article Number (EAN-13).
///
/// Stored as the 12-digit payload without the check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ean(pub(crate) u64);

impl Ean {
    /// Parse a 13-digit EAN-13 string and verify its check digit.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        validate(s, WIDTH).map(Self)
    }

    /// Build an EAN from a 12-digit payload (no check digit).
    ///
    /// Returns `None` if the payload has more than 12 digits.
    pub fn new(payload: u64) -> Option<Self> {
        (payload <= PAYLOAD_MAX).then_some(Self(payload))
    }

    /// The payload without the check digit.
    pub fn payload(&self) -> u64 {
        self.0
    }

    /// The check digit, the 13th digit of the rendered code.
    pub fn check_digit(&self) -> u8 {
        check_digit(self.0)
    }

    /// The leading two digits, the GS1 prefix range.
    pub fn prefix(&self) -> u8 {
        (self.0 / PREFIX_DIVISOR) as u8
    }

    /// True for JAN (Japanese Article Number) codes, which start with 45 or 49.
    pub fn is_jan(&self) -> bool {
        matches!(self.prefix(), 45 | 49)
    }
}

impl fmt::Display for Ean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:012}{}", self.0, self.check_digit())
    }
}

impl FromStr for Ean {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Ean {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Ean {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Ean> for String {
    fn from(ean: Ean) -> Self {
        ean.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jan_code() {
        let e = Ean::parse("4549673590600").unwrap();
        assert!(e.is_jan());
        assert_eq!(e.prefix(), 45);
        assert_eq!(e.check_digit(), 0);
    }

    #[test]
    fn prefix_49_is_jan() {
        let e = Ean::new(490_000_000_000).unwrap();
        assert!(e.is_jan());
    }

    #[test]
    fn european_code_is_not_jan() {
        let e = Ean::parse("5030938121923").unwrap();
        assert!(!e.is_jan());
        assert_eq!(e.prefix(), 50);
        assert_eq!(e.check_digit(), 3);
    }

    #[test]
    fn renders_leading_zeros() {
        let e = Ean::parse("0045496401771").unwrap();
        assert_eq!(e.payload(), 4_549_640_177);
        assert_eq!(e.to_string(), "0045496401771");
    }

    #[test]
    fn twelve_digits_rejected() {
        assert_eq!(
            Ean::parse("045496830434"),
            Err(ParseError::TooShort {
                expected: 13,
                found: 12
            })
        );
    }

    #[test]
    fn new_rejects_thirteen_digit_payload() {
        assert!(Ean::new(PAYLOAD_MAX).is_some());
        assert!(Ean::new(PAYLOAD_MAX + 1).is_none());
    }
}
