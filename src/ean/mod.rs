//! EAN-13 (European Article Number) parsing.
//!
//! Parsing is strict: exactly 13 digits. To accept a 12-digit UPC-A as well,
//! parse it as a [`Upc`](crate::upc::Upc) and convert with `Ean::from`.

mod code;

pub use code::{Ean, PAYLOAD_MAX, WIDTH};
