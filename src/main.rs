#[cfg(not(feature = "cli"))]
compile_error!("The `myident` binary requires the `cli` feature. Build with `--features cli`.");

use clap::{CommandFactory, Parser};
use std::io::{self, IsTerminal, Write};
use std::process;
use std::time::Instant;

use myident::cli;
use myident::cli::app::{Cli, ColorMode, Commands};
use myident::util::timing::elapsed_since;
use myident::MyIdentError;

fn main() {
    let cli = Cli::parse();
    let start = Instant::now();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {} // colored auto-detects tty
    }

    let mut writer = match cli::create_writer(cli.output.as_deref()) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Encode { names, json } => read_names(names).and_then(|names| {
            cli::encode::execute(&cli::encode::EncodeOptions { names, json }, &mut writer)
        }),

        Commands::Decode {
            names,
            keep_going,
            json,
        } => read_names(names).and_then(|names| {
            cli::decode::execute(
                &cli::decode::DecodeOptions {
                    names,
                    keep_going,
                    json,
                },
                &mut writer,
            )
        }),

        Commands::Check { names, json } => read_names(names).and_then(|names| {
            cli::check::execute(&cli::check::CheckOptions { names, json }, &mut writer)
        }),

        Commands::Inspect { name, json } => {
            cli::inspect::execute(&cli::inspect::InspectOptions { name, json }, &mut writer)
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "myident", &mut writer);
            Ok(())
        }
    };

    if let Err(e) = writer.flush() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if cli.timing {
        eprintln!("{}", elapsed_since(start));
    }

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Names from the command line, or one per line from stdin when it is piped.
fn read_names(names: Vec<String>) -> Result<Vec<String>, MyIdentError> {
    if names.is_empty() && io::stdin().is_terminal() {
        return Err(MyIdentError::Argument(
            "No names given. Pass names as arguments or pipe them on stdin.".to_string(),
        ));
    }
    cli::resolve_names(names, io::stdin().lock())
}
