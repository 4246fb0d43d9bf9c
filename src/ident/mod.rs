//! MySQL identifier encoding.
//!
//! MySQL stores databases and tables as files whose names may only use a
//! restricted character set. These modules convert arbitrary identifiers to
//! and from that character set:
//!
//! - [`charset`] - the safe alphabet and escape sequence layout
//! - [`codec`] - `@NNNN` encoding, decoding and inspection helpers

pub mod charset;
pub mod codec;

pub use codec::{decode, encode, requires_decoding, requires_encoding};
