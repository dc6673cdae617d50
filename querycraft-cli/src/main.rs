//! querycraft command-line front end
//!
//! Loads a staging document, runs the build step and prints the assembled
//! query.
//!
//! Usage:
//!   querycraft build groups.json
//!   querycraft build - --format json --pretty < groups.json
//!   querycraft fields

use std::{fs::File, io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use querycraft_assembler::QueryAssembler;
use querycraft_cli::{OutputFormat, load_staging, render_options, render_output};
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "querycraft")]
#[command(about = "Assemble filter queries from staged condition groups")]
struct Args {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a query from a staging document
    Build {
        /// Staging document path, or `-` for stdin
        input: PathBuf,

        /// Output form to print
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Both)]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List the field and operator options
    Fields,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    match args.command {
        Command::Build {
            input,
            format,
            pretty,
        } => {
            let staging = if input.as_os_str() == "-" {
                debug!("Reading staging document from stdin");
                load_staging(io::stdin().lock())?
            } else {
                debug!("Reading staging document from {}", input.display());
                let file = File::open(&input)
                    .with_context(|| format!("Failed to open {}", input.display()))?;
                load_staging(file)?
            };
            info!(
                groups = staging.groups().len(),
                filters = staging.filter_count(),
                "Staging loaded"
            );

            let mut assembler = QueryAssembler::new();
            let built = staging.build(&mut assembler);
            println!("{}", render_output(&built, format, pretty)?);
        }
        Command::Fields => print!("{}", render_options()),
    }

    Ok(())
}
