//! MySQL identifier codec toolkit.
//!
//! The `mysql-ident-utils` crate (library name `myident`) converts database,
//! table and other object names to and from the character set MySQL allows
//! in file names. Safe characters (`[A-Za-z0-9_$]`) are kept as they are;
//! everything else becomes an `@NNNN` escape holding the character's code
//! point in lowercase hex.
//!
//! # CLI Reference
//!
//! Install the `myident` binary and use its subcommands from the command line.
//!
//! ## Subcommands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | [`myident encode`](cli::app::Commands::Encode) | Encode names into the filename-safe form |
//! | [`myident decode`](cli::app::Commands::Decode) | Decode `@NNNN` escapes back to the original names |
//! | [`myident check`](cli::app::Commands::Check) | Report whether names need encoding or decoding |
//! | [`myident inspect`](cli::app::Commands::Inspect) | Show safe/unsafe runs and every escape of a name |
//! | [`myident completions`](cli::app::Commands::Completions) | Generate shell completion scripts |
//!
//! ## Global options
//!
//! All subcommands accept `--color <auto|always|never>`, `--output <file>`,
//! `--verbose` and `--timing`. Most subcommands also accept `--json` for
//! machine-readable output. When no names are given on the command line,
//! names are read from stdin, one per line.
//!
//! # Library API
//!
//! ```
//! use myident::ident::{decode, encode, requires_decoding, requires_encoding};
//!
//! assert!(requires_encoding("this.has.periods"));
//! let encoded = encode("this.has.periods");
//! assert_eq!(encoded, "this@002ehas@002eperiods");
//!
//! assert!(requires_decoding(&encoded));
//! assert_eq!(decode(&encoded).unwrap(), "this.has.periods");
//! ```
//!
//! ## Module overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`ident::charset`] | Safe alphabet and escape sequence constants |
//! | [`ident::codec`] | Encode, decode, validation and inspection helpers |
//! | [`util::hex`] | Escape and code point formatting |
//! | [`util::timing`] | Elapsed-time reporting |
//!
//! ## Feature flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli` | on | Builds the `myident` binary and the [`cli`] module. |

#[cfg(feature = "cli")]
pub mod cli;
pub mod ident;
pub mod util;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

use thiserror::Error;

/// Errors returned by `myident` operations.
#[derive(Error, Debug)]
pub enum MyIdentError {
    /// An `@` escape is not followed by four hex digits, or a surrogate
    /// escape has no partner.
    #[error("Invalid encoding format: {0}")]
    InvalidEncodingFormat(String),

    /// An I/O error occurred (reading names, writing output).
    #[error("I/O error: {0}")]
    Io(String),

    /// An invalid argument was supplied.
    #[error("Invalid argument: {0}")]
    Argument(String),
}
