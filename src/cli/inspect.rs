//! CLI implementation for the `myident inspect` subcommand.
//!
//! Treats the name both ways: as a raw identifier (split into safe and
//! unsafe runs, with the escapes each unsafe run would become) and, when it
//! contains `@`, as an encoded identifier (every escape with its code point).
//! A malformed escape is reported rather than failing the command.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::cli::{wprint, wprintln, write_json};
use crate::ident::codec::{self, RunKind};
use crate::util::hex::{display_char, format_code_point};
use crate::MyIdentError;

/// Options for the `myident inspect` subcommand.
pub struct InspectOptions {
    /// Name to inspect.
    pub name: String,
    /// Emit output as JSON.
    pub json: bool,
}

#[derive(Serialize)]
struct InspectReport {
    name: String,
    requires_encoding: bool,
    encoded: String,
    runs: Vec<RunInfo>,
    requires_decoding: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    decoded: Option<String>,
    escapes: Vec<EscapeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    decode_error: Option<String>,
}

#[derive(Serialize)]
struct RunInfo {
    kind: RunKind,
    offset: usize,
    text: String,
    encoded: String,
}

#[derive(Serialize)]
struct EscapeInfo {
    offset: usize,
    token: String,
    code_point: String,
    character: String,
}

fn build_report(name: &str) -> InspectReport {
    let runs = codec::runs(name)
        .map(|run| RunInfo {
            kind: run.kind,
            offset: run.offset,
            text: run.text.to_string(),
            encoded: codec::encode(run.text),
        })
        .collect();

    let requires_decoding = codec::requires_decoding(name);
    let (escapes, decoded, decode_error) = if requires_decoding {
        match codec::escapes(name) {
            Ok(found) => {
                let escapes = found
                    .iter()
                    .map(|e| EscapeInfo {
                        offset: e.offset,
                        token: e.token.to_string(),
                        code_point: format_code_point(u32::from(e.character)),
                        character: e.character.to_string(),
                    })
                    .collect();
                (escapes, codec::decode(name).ok(), None)
            }
            Err(e) => (Vec::new(), None, Some(e.to_string())),
        }
    } else {
        (Vec::new(), None, None)
    };

    InspectReport {
        name: name.to_string(),
        requires_encoding: codec::requires_encoding(name),
        encoded: codec::encode(name),
        runs,
        requires_decoding,
        decoded,
        escapes,
        decode_error,
    }
}

pub fn execute(opts: &InspectOptions, writer: &mut dyn Write) -> Result<(), MyIdentError> {
    let report = build_report(&opts.name);

    if opts.json {
        return write_json(&report, writer);
    }

    wprintln!(writer, "{}", "Identifier".bold())?;
    wprintln!(writer, "  Name:     {}", report.name)?;
    wprintln!(writer, "  Encoded:  {}", report.encoded.cyan())?;
    if let Some(ref decoded) = report.decoded {
        wprintln!(writer, "  Decoded:  {}", decoded.cyan())?;
    }
    wprintln!(writer)?;

    wprintln!(writer, "{} ({})", "Runs".bold(), report.runs.len())?;
    for run in &report.runs {
        let kind = match run.kind {
            RunKind::Safe => "safe  ".green(),
            RunKind::Unsafe => "unsafe".yellow(),
        };
        wprint!(writer, "  {:>4}  {}  {:?}", run.offset, kind, run.text)?;
        if run.kind == RunKind::Unsafe {
            wprint!(writer, " -> {}", run.encoded)?;
        }
        wprintln!(writer)?;
    }

    if report.requires_decoding {
        wprintln!(writer)?;
        match report.decode_error {
            Some(ref err) => {
                wprintln!(writer, "{} {}", "Escapes".bold(), err.red())?;
            }
            None => {
                wprintln!(writer, "{} ({})", "Escapes".bold(), report.escapes.len())?;
                for e in &report.escapes {
                    let shown: String = e.character.chars().map(display_char).collect();
                    wprintln!(
                        writer,
                        "  {:>4}  {:<10}  {:<8}  '{}'",
                        e.offset,
                        e.token,
                        e.code_point,
                        shown
                    )?;
                }
            }
        }
    }

    Ok(())
}
