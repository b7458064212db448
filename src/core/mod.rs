//! Check digit engine, digit parser, and error types.
//!
//! Everything here is shared by the UPC-A and EAN-13 parsers. The two codes
//! differ only in width; the GS1 mod-10 rule is identical.

mod checksum;
mod error;

pub use checksum::*;
pub use error::*;
