//! Shared utilities (code point formatting, elapsed-time reporting).

pub mod hex;
pub mod timing;
