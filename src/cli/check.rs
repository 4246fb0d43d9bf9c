use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::cli::{write_json, wprintln};
use crate::ident::codec::{is_valid_encoding, requires_decoding, requires_encoding};
use crate::MyIdentError;

/// Options for the `myident check` subcommand.
pub struct CheckOptions {
    /// Names to check.
    pub names: Vec<String>,
    /// Emit output as JSON.
    pub json: bool,
}

#[derive(Serialize)]
struct NameCheck {
    name: String,
    requires_encoding: bool,
    requires_decoding: bool,
    valid_encoding: bool,
}

pub fn execute(opts: &CheckOptions, writer: &mut dyn Write) -> Result<(), MyIdentError> {
    let checks: Vec<NameCheck> = opts
        .names
        .iter()
        .map(|name| NameCheck {
            name: name.clone(),
            requires_encoding: requires_encoding(name),
            requires_decoding: requires_decoding(name),
            valid_encoding: is_valid_encoding(name),
        })
        .collect();

    if opts.json {
        return write_json(&checks, writer);
    }

    for c in &checks {
        wprintln!(writer, "{}", c.name.bold())?;
        wprintln!(writer, "  Requires encoding: {}", yes_no(c.requires_encoding))?;
        wprintln!(writer, "  Requires decoding: {}", yes_no(c.requires_decoding))?;
        let valid = if c.valid_encoding {
            "YES".green()
        } else {
            "NO".red()
        };
        wprintln!(writer, "  Valid encoding:    {}", valid)?;
    }
    Ok(())
}

fn yes_no(flag: bool) -> colored::ColoredString {
    if flag {
        "YES".yellow()
    } else {
        "NO".normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(names: &[&str], json: bool) -> String {
        colored::control::set_override(false);
        let opts = CheckOptions {
            names: names.iter().map(|s| s.to_string()).collect(),
            json,
        };
        let mut out = Vec::new();
        execute(&opts, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_check_text() {
        let out = run(&["a.b"], false);
        assert!(out.contains("a.b"));
        assert!(out.contains("Requires encoding: YES"));
        assert!(out.contains("Requires decoding: NO"));
        assert!(out.contains("Valid encoding:    NO"));
    }

    #[test]
    fn test_check_json() {
        let out = run(&["this@002ehas", "user@host", "plain"], true);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let arr = parsed.as_array().unwrap();

        assert_eq!(arr[0]["requires_encoding"], true);
        assert_eq!(arr[0]["requires_decoding"], true);
        assert_eq!(arr[0]["valid_encoding"], true);

        assert_eq!(arr[1]["requires_decoding"], true);
        assert_eq!(arr[1]["valid_encoding"], false);

        assert_eq!(arr[2]["requires_encoding"], false);
        assert_eq!(arr[2]["requires_decoding"], false);
        assert_eq!(arr[2]["valid_encoding"], true);
    }
}
