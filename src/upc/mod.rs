//! UPC-A (Universal Product Code) parsing and field decoding.
//!
//! A UPC-A is 12 digits: an 11-digit payload followed by a check digit. The
//! first payload digit is the number system, which decides how the remaining
//! digits are read.
//!
//! # Example
//!
//! ```
//! use upcean::upc::*;
//!
//! let upc = Upc::parse("512345678900").unwrap();
//! assert_eq!(upc.category(), Category::Coupon);
//! assert_eq!(upc.manufacturer(), "12345");
//! assert_eq!(upc.family(), 678);
//! assert_eq!(upc.value(), 90);
//! ```

mod category;
mod code;

pub use category::{Category, Decoded};
pub use code::{PAYLOAD_MAX, Upc, WIDTH};
