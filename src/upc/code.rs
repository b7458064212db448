use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::category::{Category, Decoded};
use crate::core::{ParseError, check_digit, validate};

/// Full UPC-A width, check digit included.
pub const WIDTH: usize = 12;

/// Largest 11-digit payload.
pub const PAYLOAD_MAX: u64 = 99_999_999_999;

const NUMBER_SYSTEM_DIVISOR: u64 = 10_000_000_000;

/// A validated Universal Product Code (UPC-A).
///
/// Stored as the 11-digit payload without the check digit. The check digit is
/// always derived, never stored.
///
/// The category-specific accessors ([`product`](Self::product),
/// [`ndc`](Self::ndc), [`family`](Self::family), [`value`](Self::value)) do
/// not check the number system. Called on the wrong category they return a
/// well-formed but meaningless number. Check [`category`](Self::category)
/// first, or use [`decode`](Self::decode) which only exposes the fields that
/// apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Upc(u64);

impl Upc {
    /// Parse a 12-digit UPC-A string and verify its check digit.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        validate(s, WIDTH).map(Self)
    }

    /// Build a UPC from an 11-digit payload (no check digit).
    ///
    /// Returns `None` if the payload has more than 11 digits.
    pub fn new(payload: u64) -> Option<Self> {
        (payload <= PAYLOAD_MAX).then_some(Self(payload))
    }

    /// The payload without the check digit.
    pub fn payload(&self) -> u64 {
        self.0
    }

    /// The check digit, the 12th digit of the rendered code.
    pub fn check_digit(&self) -> u8 {
        check_digit(self.0)
    }

    /// The first digit, known as the number system.
    pub fn number_system(&self) -> u8 {
        (self.0 / NUMBER_SYSTEM_DIVISOR) as u8
    }

    /// Category implied by the number system.
    pub fn category(&self) -> Category {
        // number_system() is at most 9 for a payload within PAYLOAD_MAX
        match self.number_system() {
            2 | 4 => Category::Local,
            3 => Category::Drug,
            5 => Category::Coupon,
            _ => Category::GlobalProduct,
        }
    }

    /// Number system 0, 1, 6, 7, 8 or 9: a product for global use.
    pub fn is_global_product(&self) -> bool {
        self.category() == Category::GlobalProduct
    }

    /// Number system 2 or 4: reserved for local (in-store) use.
    pub fn is_local(&self) -> bool {
        self.category() == Category::Local
    }

    /// Number system 3: a National Drug Code.
    pub fn is_drug(&self) -> bool {
        self.category() == Category::Drug
    }

    /// Number system 5: a coupon.
    pub fn is_coupon(&self) -> bool {
        self.category() == Category::Coupon
    }

    /// Manufacturer code assigned by a GS1 organization.
    ///
    /// For coupons this is the 5 digits after the number system. For every
    /// other category it is the leading 6 digits of the payload, number system
    /// included. Returned as a string because leading zeros matter for GS1
    /// database lookups.
    pub fn manufacturer(&self) -> String {
        if self.is_coupon() {
            format!("{:05}", (self.0 / 100_000) % 100_000)
        } else {
            format!("{:06}", self.0 / 100_000)
        }
    }

    /// Product code assigned by the manufacturer: the trailing 5 payload digits.
    /// Meaningful for global products only.
    pub fn product(&self) -> u32 {
        (self.0 % 100_000) as u32
    }

    /// 10-digit National Drug Code without dashes. Meaningful for drugs only.
    pub fn ndc(&self) -> String {
        let padded = format!("{:011}", self.0);
        padded[1..].to_string()
    }

    /// Coupon family code. Meaningful for coupons only.
    pub fn family(&self) -> u16 {
        ((self.0 % 100_000) / 100) as u16
    }

    /// Coupon value code, always below 100. Meaningful for coupons only.
    pub fn value(&self) -> u8 {
        (self.0 % 100) as u8
    }

    /// Decode the fields that apply to this code's number system.
    pub fn decode(&self) -> Decoded {
        match self.category() {
            Category::GlobalProduct => Decoded::Global {
                manufacturer: self.manufacturer(),
                product: self.product(),
            },
            Category::Local => Decoded::Local,
            Category::Drug => Decoded::Drug { ndc: self.ndc() },
            Category::Coupon => Decoded::Coupon {
                manufacturer: self.manufacturer(),
                family: self.family(),
                value: self.value(),
            },
        }
    }
}

impl fmt::Display for Upc {
    /// The canonical 12-digit form, zero-padded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:011}{}", self.0, self.check_digit())
    }
}

impl FromStr for Upc {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Upc {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Upc {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Upc> for String {
    fn from(upc: Upc) -> Self {
        upc.to_string()
    }
}
