use serde::{Deserialize, Serialize};

/// Number system category of a UPC-A.
///
/// Every number system digit 0-9 maps to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Number systems 0, 1, 6, 7, 8, 9: regular products for global use.
    GlobalProduct,
    /// Number systems 2 and 4: in-store use (random weight items, loyalty cards).
    Local,
    /// Number system 3: National Drug Code.
    Drug,
    /// Number system 5: manufacturer coupon.
    Coupon,
}

impl Category {
    /// Category for a number system digit, or `None` if it is not a single
    /// decimal digit.
    pub fn from_number_system(number_system: u8) -> Option<Self> {
        match number_system {
            0 | 1 | 6..=9 => Some(Self::GlobalProduct),
            2 | 4 => Some(Self::Local),
            3 => Some(Self::Drug),
            5 => Some(Self::Coupon),
            _ => None,
        }
    }
}

/// The fields of a UPC-A, split by number system category.
///
/// Produced by [`Upc::decode`](super::Upc::decode). Each variant carries only
/// the fields that mean something for its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decoded {
    /// Global product: 6-digit GS1 company prefix and 5-digit item reference.
    Global { manufacturer: String, product: u32 },
    /// Local use. The digits carry no standard meaning.
    Local,
    /// Drug: 10-digit National Drug Code, undashed.
    Drug { ndc: String },
    /// Coupon: 5-digit manufacturer, family code, and value code.
    Coupon {
        manufacturer: String,
        family: u16,
        value: u8,
    },
}

impl Decoded {
    /// The category this decoding belongs to.
    pub fn category(&self) -> Category {
        match self {
            Self::Global { .. } => Category::GlobalProduct,
            Self::Local => Category::Local,
            Self::Drug { .. } => Category::Drug,
            Self::Coupon { .. } => Category::Coupon,
        }
    }
}
