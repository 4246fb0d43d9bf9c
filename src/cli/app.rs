use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI definition for the `myident` binary.
#[derive(Parser)]
#[command(name = "myident")]
#[command(about = "Encode and decode MySQL identifiers for use as file names")]
#[command(version)]
pub struct Cli {
    /// Control colored output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print elapsed time to stderr when the command finishes
    #[arg(long, global = true)]
    pub timing: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Controls when colored output is emitted.
#[derive(Clone, Copy, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// Available subcommands for the `myident` CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Encode names into the MySQL filename-safe form
    ///
    /// Every character outside [A-Za-z0-9_$] is replaced by '@' and four
    /// lowercase hex digits of its code point. Reads names from stdin,
    /// one per line, when none are given.
    Encode {
        /// Names to encode
        names: Vec<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Decode @NNNN escapes back to the original names
    ///
    /// Fails on the first malformed escape unless --keep-going is given.
    /// Reads names from stdin, one per line, when none are given.
    Decode {
        /// Encoded names to decode
        names: Vec<String>,

        /// Report malformed names and continue with the rest
        #[arg(short, long = "keep-going")]
        keep_going: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Report whether names need encoding or decoding
    Check {
        /// Names to check
        names: Vec<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show safe/unsafe runs and every escape of a name
    Inspect {
        /// Name to inspect (raw or encoded)
        name: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
