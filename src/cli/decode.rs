use std::io::Write;

use colored::Colorize;
use log::debug;
use serde::Serialize;

use crate::cli::{write_json, wprintln};
use crate::ident::codec::decode;
use crate::MyIdentError;

/// Options for the `myident decode` subcommand.
pub struct DecodeOptions {
    /// Encoded names to decode.
    pub names: Vec<String>,
    /// Report malformed names and continue instead of stopping at the first.
    pub keep_going: bool,
    /// Emit output as JSON.
    pub json: bool,
}

#[derive(Serialize)]
struct DecodedName {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    decoded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Decode each name.
///
/// Without `keep_going` the first malformed name aborts the command with its
/// [`MyIdentError::InvalidEncodingFormat`]. With `keep_going` every name is
/// reported and the command fails at the end if any name was malformed.
pub fn execute(opts: &DecodeOptions, writer: &mut dyn Write) -> Result<(), MyIdentError> {
    let mut results = Vec::with_capacity(opts.names.len());
    let mut failed = 0usize;

    for name in &opts.names {
        match decode(name) {
            Ok(decoded) => results.push(DecodedName {
                name: name.clone(),
                decoded: Some(decoded),
                error: None,
            }),
            Err(e) if opts.keep_going => {
                debug!("Skipping {:?}: {}", name, e);
                failed += 1;
                results.push(DecodedName {
                    name: name.clone(),
                    decoded: None,
                    error: Some(e.to_string()),
                });
            }
            Err(e) => return Err(e),
        }
    }

    if opts.json {
        write_json(&results, writer)?;
    } else {
        for r in &results {
            match (&r.decoded, &r.error) {
                (Some(decoded), _) => wprintln!(writer, "{}", decoded)?,
                (None, Some(err)) => {
                    wprintln!(writer, "{}: {}", r.name, err.red())?
                }
                (None, None) => {}
            }
        }
    }

    if failed > 0 {
        return Err(MyIdentError::InvalidEncodingFormat(format!(
            "{} of {} name(s) could not be decoded",
            failed,
            opts.names.len()
        )));
    }
    Ok(())
}
