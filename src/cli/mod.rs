//! CLI subcommand implementations for the `myident` binary.
//!
//! CLI argument parsing uses clap derive macros, with the top-level
//! [`app::Cli`] struct and [`app::Commands`] enum defined in [`app`] and
//! shared between `main.rs` and `build.rs` (for man page generation) via
//! `include!()`.
//!
//! Each subcommand module follows the same pattern: an `Options` struct holding
//! the parsed arguments and a `pub fn execute(opts, writer) -> Result<(), MyIdentError>`
//! entry point. The `writer: &mut dyn Write` parameter allows output to be
//! captured in tests or redirected to a file via the global `--output` flag.
//!
//! # Subcommands
//!
//! | Command | Module | Purpose |
//! |---------|--------|---------|
//! | `myident encode` | [`encode`] | Encode names into the filename-safe form |
//! | `myident decode` | [`decode`] | Decode `@NNNN` escapes, optionally continuing past bad names |
//! | `myident check` | [`check`] | Report `requires_encoding` / `requires_decoding` / validity per name |
//! | `myident inspect` | [`inspect`] | Break one name into runs and escapes |
//!
//! # Common patterns
//!
//! - **`--json`** - Subcommands support structured JSON output via
//!   `#[derive(Serialize)]` structs and `serde_json`.
//! - **stdin** - `encode`, `decode` and `check` read one name per line from
//!   stdin when no names are passed.
//! - **`--color`** (global) - Control colored terminal output (`auto`, `always`,
//!   `never`).
//! - **`--output` / `-o`** (global) - Redirect output to a file instead of stdout.
//!
//! The `wprintln!` and `wprint!` macros wrap `writeln!`/`write!` to convert
//! `io::Error` into `MyIdentError`.

pub mod app;
pub mod check;
pub mod decode;
pub mod encode;
pub mod inspect;

/// Write a line to the given writer, converting io::Error to MyIdentError.
macro_rules! wprintln {
    ($w:expr) => {
        writeln!($w).map_err(|e| $crate::MyIdentError::Io(e.to_string()))
    };
    ($w:expr, $($arg:tt)*) => {
        writeln!($w, $($arg)*).map_err(|e| $crate::MyIdentError::Io(e.to_string()))
    };
}

/// Write (without newline) to the given writer, converting io::Error to MyIdentError.
macro_rules! wprint {
    ($w:expr, $($arg:tt)*) => {
        write!($w, $($arg)*).map_err(|e| $crate::MyIdentError::Io(e.to_string()))
    };
}

pub(crate) use wprint;
pub(crate) use wprintln;

use std::fs::File;
use std::io::{BufRead, Write};

use serde::Serialize;

use crate::MyIdentError;

/// Open the output destination: the named file, or stdout when `None`.
pub fn create_writer(output: Option<&str>) -> Result<Box<dyn Write>, MyIdentError> {
    match output {
        Some(path) => File::create(path)
            .map(|f| Box::new(f) as Box<dyn Write>)
            .map_err(|e| MyIdentError::Io(format!("Cannot create {}: {}", path, e))),
        None => Ok(Box::new(std::io::stdout()) as Box<dyn Write>),
    }
}

/// Use the names given on the command line, or read them from `input`.
///
/// Input is read one name per line; trailing `\r` is stripped and blank
/// lines are skipped.
pub fn resolve_names<R: BufRead>(names: Vec<String>, input: R) -> Result<Vec<String>, MyIdentError> {
    if !names.is_empty() {
        return Ok(names);
    }

    let mut read = Vec::new();
    for line in input.lines() {
        let line = line.map_err(|e| MyIdentError::Io(format!("Cannot read names: {}", e)))?;
        let name = line.strip_suffix('\r').unwrap_or(line.as_str());
        if !name.is_empty() {
            read.push(name.to_string());
        }
    }

    if read.is_empty() {
        return Err(MyIdentError::Argument("No names given".to_string()));
    }
    log::debug!("Read {} name(s) from input", read.len());
    Ok(read)
}

/// Serialize `value` as pretty JSON and write it followed by a newline.
pub(crate) fn write_json<T: Serialize>(value: &T, writer: &mut dyn Write) -> Result<(), MyIdentError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| MyIdentError::Io(format!("JSON serialization error: {}", e)))?;
    wprintln!(writer, "{}", json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_resolve_names_prefers_arguments() {
        let names = resolve_names(vec!["a.b".to_string()], Cursor::new("ignored\n")).unwrap();
        assert_eq!(names, vec!["a.b"]);
    }

    #[test]
    fn test_resolve_names_reads_lines() {
        let names = resolve_names(Vec::new(), Cursor::new("first\r\n\nsecond.name\n")).unwrap();
        assert_eq!(names, vec!["first", "second.name"]);
    }

    #[test]
    fn test_resolve_names_empty_input() {
        let result = resolve_names(Vec::new(), Cursor::new(""));
        assert!(matches!(result, Err(MyIdentError::Argument(_))));
    }

    #[test]
    fn test_create_writer_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        {
            let mut w = create_writer(Some(path.to_str().unwrap())).unwrap();
            w.write_all(b"a@002eb\n").unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a@002eb\n");
    }

    #[test]
    fn test_create_writer_bad_path() {
        let result = create_writer(Some("/nonexistent/dir/out.txt"));
        assert!(matches!(result, Err(MyIdentError::Io(_))));
    }
}
