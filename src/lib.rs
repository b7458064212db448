//! # upcean
//!
//! Parsing, validation and field decoding for the two retail product codes
//! printed under most barcodes: the 12-digit UPC-A and the 13-digit EAN-13.
//!
//! Codes are stored as the payload integer without the check digit. The check
//! digit is always recomputed with the GS1 mod-10 rule, so it can never drift
//! out of sync with the rest of the code.
//!
//! ## Quick Start
//!
//! ```rust
//! use upcean::{Decoded, ParseError, Upc};
//!
//! let upc: Upc = "045496830434".parse().unwrap();
//! assert_eq!(upc.number_system(), 0);
//! assert_eq!(upc.check_digit(), 4);
//! assert_eq!(
//!     upc.decode(),
//!     Decoded::Global { manufacturer: "045496".into(), product: 83043 }
//! );
//!
//! let err = Upc::parse("012345678919").unwrap_err();
//! assert!(err.is_check_digit_error());
//! assert!(matches!(err, ParseError::InvalidCheckDigit { expected: 2, found: 9 }));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Check digit engine, digit parser, error type |
//! | `upc` (default) | UPC-A parsing and number system decoding |
//! | `ean` (default) | EAN-13 parsing and JAN detection |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "upc")]
pub mod upc;

#[cfg(feature = "ean")]
pub mod ean;

#[cfg(all(feature = "upc", feature = "ean"))]
mod convert;

// Re-export the common types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "upc")]
pub use crate::upc::{Category, Decoded, Upc};

#[cfg(feature = "ean")]
pub use crate::ean::Ean;

#[cfg(all(feature = "upc", feature = "ean"))]
pub use crate::convert::ConversionError;
