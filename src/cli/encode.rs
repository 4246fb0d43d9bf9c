use std::io::Write;

use log::debug;
use serde::Serialize;

use crate::cli::{write_json, wprintln};
use crate::ident::codec::{encode, requires_encoding};
use crate::MyIdentError;

/// Options for the `myident encode` subcommand.
pub struct EncodeOptions {
    /// Names to encode.
    pub names: Vec<String>,
    /// Emit output as JSON.
    pub json: bool,
}

#[derive(Serialize)]
struct EncodedName {
    name: String,
    encoded: String,
    changed: bool,
}

/// Encode each name and print one result per line (or a JSON array).
pub fn execute(opts: &EncodeOptions, writer: &mut dyn Write) -> Result<(), MyIdentError> {
    let results: Vec<EncodedName> = opts
        .names
        .iter()
        .map(|name| {
            let changed = requires_encoding(name);
            debug!("Encoding {:?} (changed: {})", name, changed);
            EncodedName {
                name: name.clone(),
                encoded: encode(name),
                changed,
            }
        })
        .collect();

    if opts.json {
        return write_json(&results, writer);
    }

    for r in &results {
        wprintln!(writer, "{}", r.encoded)?;
    }
    Ok(())
}
