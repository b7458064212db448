//! Conversions between UPC-A and EAN-13.
//!
//! A UPC-A is an EAN-13 whose first digit is 0. The leading zero adds nothing
//! to the weighted sum, so both forms share the same check digit.

use thiserror::Error;

use crate::ean::Ean;
use crate::upc::Upc;

/// Error returned when an EAN-13 has no UPC-A form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConversionError {
    /// The EAN does not start with 0.
    #[error("EAN {0} does not start with 0 and has no UPC-A form")]
    NotUpcCompatible(Ean),
}

impl From<Upc> for Ean {
    fn from(upc: Upc) -> Self {
        Ean(upc.payload())
    }
}

impl Ean {
    /// The UPC-A form of this code, if the first digit is 0.
    pub fn to_upc(&self) -> Option<Upc> {
        Upc::new(self.payload())
    }
}

impl TryFrom<Ean> for Upc {
    type Error = ConversionError;

    fn try_from(ean: Ean) -> Result<Self, Self::Error> {
        ean.to_upc().ok_or(ConversionError::NotUpcCompatible(ean))
    }
}
