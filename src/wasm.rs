//! WebAssembly bindings for the identifier codec.
//!
//! Thin wrappers over [`crate::ident::codec`] so browser tooling can encode
//! and decode MySQL file names with the same rules as the CLI. Fallible
//! functions return the error message as a JS string.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::ident::codec;

fn to_js_err(e: crate::MyIdentError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize>(val: &T) -> Result<String, JsValue> {
    serde_json::to_string(val).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Returns true if the name contains characters outside `[A-Za-z0-9_$]`.
#[wasm_bindgen]
pub fn requires_encoding(name: &str) -> bool {
    codec::requires_encoding(name)
}

/// Encode a name into the filename-safe form.
#[wasm_bindgen]
pub fn encode(name: &str) -> String {
    codec::encode(name)
}

/// Returns true if the name contains an `@`.
#[wasm_bindgen]
pub fn requires_decoding(name: &str) -> bool {
    codec::requires_decoding(name)
}

/// Decode `@NNNN` escapes, throwing on a malformed escape.
#[wasm_bindgen]
pub fn decode(name: &str) -> Result<String, JsValue> {
    codec::decode(name).map_err(to_js_err)
}

#[derive(Serialize)]
struct IdentifierCheck {
    requires_encoding: bool,
    requires_decoding: bool,
    valid_encoding: bool,
    encoded: String,
    decoded: Option<String>,
}

/// Returns a JSON object describing the name: `requires_encoding`,
/// `requires_decoding`, `valid_encoding`, `encoded` and `decoded` (null when
/// the name does not decode).
#[wasm_bindgen]
pub fn check_identifier(name: &str) -> Result<String, JsValue> {
    let check = IdentifierCheck {
        requires_encoding: codec::requires_encoding(name),
        requires_decoding: codec::requires_decoding(name),
        valid_encoding: codec::is_valid_encoding(name),
        encoded: codec::encode(name),
        decoded: codec::decode(name).ok(),
    };
    to_json(&check)
}
