//! Reversible `@NNNN` encoding of identifiers into the MySQL filename-safe alphabet.
//!
//! [`encode`] keeps every maximal run of safe characters (see
//! [`is_safe_char`]) and replaces every character of an unsafe run with
//! `@` plus four lowercase hex digits of its code point. [`decode`] reverses
//! the transform and rejects malformed escapes instead of guessing.
//!
//! Characters above U+FFFF do not fit in four hex digits. They are written as
//! their UTF-16 surrogate pair (two consecutive escapes), and [`decode`]
//! recombines the pair.
//!
//! ```
//! use myident::ident::codec::{decode, encode};
//!
//! let encoded = encode("this.has.periods");
//! assert_eq!(encoded, "this@002ehas@002eperiods");
//! assert_eq!(decode(&encoded).unwrap(), "this.has.periods");
//! ```

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::ident::charset::{is_safe_char, is_safe_str, ESCAPE_HEX_DIGITS, ESCAPE_LEN, ESCAPE_MARKER};
use crate::util::hex::format_escape;
use crate::MyIdentError;

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Returns true if `original` contains any character outside the safe alphabet.
pub fn requires_encoding(original: &str) -> bool {
    !is_safe_str(original)
}

/// Encode `original` so that it only contains safe characters and escapes.
///
/// Returns the input unchanged when nothing needs escaping.
pub fn encode(original: &str) -> String {
    if !requires_encoding(original) {
        return original.to_string();
    }

    let mut out = String::with_capacity(original.len() * ESCAPE_LEN);
    for run in runs(original) {
        match run.kind {
            RunKind::Safe => out.push_str(run.text),
            RunKind::Unsafe => {
                let mut units = [0u16; 2];
                for c in run.text.chars() {
                    for unit in c.encode_utf16(&mut units) {
                        out.push_str(&format_escape(*unit));
                    }
                }
            }
        }
    }
    out
}

/// Returns true if `original` contains an escape marker.
///
/// This is a syntactic check only; use [`is_valid_encoding`] to find out
/// whether [`decode`] would actually succeed.
pub fn requires_decoding(original: &str) -> bool {
    original.contains(ESCAPE_MARKER)
}

/// Decode every `@NNNN` escape in `original`.
///
/// Text outside escapes passes through unchanged. Fails with
/// [`MyIdentError::InvalidEncodingFormat`] when an `@` is not followed by
/// four hex digits, or when a surrogate escape has no partner.
pub fn decode(original: &str) -> Result<String, MyIdentError> {
    if !requires_decoding(original) {
        return Ok(original.to_string());
    }

    let mut out = String::with_capacity(original.len());
    walk(original, |piece| match piece {
        Piece::Literal(text) => out.push_str(text),
        Piece::Escape(escape) => out.push(escape.character),
    })?;
    Ok(out)
}

/// Returns true if `original` is something [`encode`] could have produced:
/// it decodes cleanly and every character outside an escape is safe.
///
/// Escapes of safe characters (e.g. `@0061`) and uppercase hex digits are
/// accepted since [`decode`] accepts them.
pub fn is_valid_encoding(original: &str) -> bool {
    let mut literals_safe = true;
    let decodes = walk(original, |piece| {
        if let Piece::Literal(text) = piece {
            literals_safe &= is_safe_str(text);
        }
    })
    .is_ok();
    decodes && literals_safe
}

/// List every escape of an encoded identifier in order of appearance.
///
/// A surrogate pair is reported as one escape spanning both tokens.
pub fn escapes(original: &str) -> Result<Vec<Escape<'_>>, MyIdentError> {
    let mut found = Vec::new();
    walk(original, |piece| {
        if let Piece::Escape(escape) = piece {
            found.push(escape);
        }
    })?;
    Ok(found)
}

/// Whether a [`Run`] holds safe or unsafe characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunKind {
    Safe,
    Unsafe,
}

impl fmt::Display for RunKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunKind::Safe => write!(f, "safe"),
            RunKind::Unsafe => write!(f, "unsafe"),
        }
    }
}

/// A maximal slice of the input made only of safe or only of unsafe characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub kind: RunKind,
    /// Byte offset of the run within the input.
    pub offset: usize,
    pub text: &'a str,
}

/// Iterator over the runs of a string, created by [`runs`].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    input: &'a str,
    pos: usize,
}

/// Split `original` into alternating safe and unsafe runs, left to right.
pub fn runs(original: &str) -> Runs<'_> {
    Runs {
        input: original,
        pos: 0,
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        let input = self.input;
        let rest = &input[self.pos..];
        let first = rest.chars().next()?;
        let safe = is_safe_char(first);
        let len = rest
            .char_indices()
            .find(|&(_, c)| is_safe_char(c) != safe)
            .map_or(rest.len(), |(i, _)| i);

        let run = Run {
            kind: if safe { RunKind::Safe } else { RunKind::Unsafe },
            offset: self.pos,
            text: &rest[..len],
        };
        self.pos += len;
        Some(run)
    }
}

/// One decoded escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escape<'a> {
    /// Byte offset of the `@` within the encoded string.
    pub offset: usize,
    /// The escape text, e.g. `@002e` or `@d83d@de00`.
    pub token: &'a str,
    pub character: char,
}

enum Piece<'a> {
    Literal(&'a str),
    Escape(Escape<'a>),
}

/// Split on `@`, parse the four hex digits that start each later segment and
/// hand literal text and decoded escapes to `emit` in order.
fn walk<'a, F>(original: &'a str, mut emit: F) -> Result<(), MyIdentError>
where
    F: FnMut(Piece<'a>),
{
    let mut segments = original.split(ESCAPE_MARKER);
    let head = segments.next().unwrap_or_default();
    if !head.is_empty() {
        emit(Piece::Literal(head));
    }

    // Byte offset of the marker that precedes the current segment.
    let mut marker = head.len();
    let mut pending_high: Option<(u16, usize)> = None;

    for segment in segments {
        let unit = parse_unit(segment, marker)?;
        let tail = &segment[ESCAPE_HEX_DIGITS..];
        let end = marker + ESCAPE_LEN;

        match pending_high.take() {
            Some((high, start)) => {
                let character =
                    combine_surrogates(high, unit).ok_or_else(|| unpaired(high, start))?;
                emit(Piece::Escape(Escape {
                    offset: start,
                    token: &original[start..end],
                    character,
                }));
            }
            None if HIGH_SURROGATES.contains(&unit) => {
                if !tail.is_empty() {
                    return Err(unpaired(unit, marker));
                }
                pending_high = Some((unit, marker));
            }
            None => {
                let character =
                    char::from_u32(u32::from(unit)).ok_or_else(|| unpaired(unit, marker))?;
                emit(Piece::Escape(Escape {
                    offset: marker,
                    token: &original[marker..end],
                    character,
                }));
            }
        }

        if !tail.is_empty() {
            emit(Piece::Literal(tail));
        }
        marker += ESCAPE_MARKER.len_utf8() + segment.len();
    }

    match pending_high {
        Some((high, start)) => Err(unpaired(high, start)),
        None => Ok(()),
    }
}

/// Parse the hex digits at the start of `segment`. `marker` is the byte
/// offset of the `@` in front of it, used for error messages.
fn parse_unit(segment: &str, marker: usize) -> Result<u16, MyIdentError> {
    let digits = segment
        .get(..ESCAPE_HEX_DIGITS)
        .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| {
            let found: String = segment.chars().take(ESCAPE_HEX_DIGITS).collect();
            debug!("Malformed escape at byte {}: {:?}", marker, found);
            MyIdentError::InvalidEncodingFormat(format!(
                "expected {} hex digits after '{}' at byte {}, found {:?}",
                ESCAPE_HEX_DIGITS, ESCAPE_MARKER, marker, found
            ))
        })?;

    u16::from_str_radix(digits, 16).map_err(|e| {
        MyIdentError::InvalidEncodingFormat(format!(
            "bad escape {}{} at byte {}: {}",
            ESCAPE_MARKER, digits, marker, e
        ))
    })
}

fn combine_surrogates(high: u16, low: u16) -> Option<char> {
    if !LOW_SURROGATES.contains(&low) {
        return None;
    }
    let code = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    char::from_u32(code)
}

fn unpaired(unit: u16, offset: usize) -> MyIdentError {
    debug!("Unpaired surrogate {} at byte {}", format_escape(unit), offset);
    MyIdentError::InvalidEncodingFormat(format!(
        "unpaired surrogate {} at byte {}",
        format_escape(unit),
        offset
    ))
}
