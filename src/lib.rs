//! Luhn (modulus-10) validation for payment-card style numbers.
//! - Strips `-` and space separators before checking
//! - Rejects empty or non-digit input with a typed error
//! - Logs the intermediate checksum total instead of printing it

mod error;
mod luhn;
mod normalize;

pub use error::ValidationError;
pub use luhn::{is_valid_luhn, luhn_total};
pub use normalize::normalize;
