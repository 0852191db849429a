// ABOUTME: cvkit CLI entry point for résumé validation
// ABOUTME: Provides subcommands: validate, field, codes

mod commands;

use clap::{Parser, Subcommand};
use commands::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// cvkit - Validate JSON résumés and report every issue at once
#[derive(Parser)]
#[command(name = "cvkit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a résumé document section by section
    Validate {
        /// Path to the résumé JSON document
        file: PathBuf,
        /// Rule thresholds (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Message catalog (flat JSON of key to template)
        #[arg(long)]
        messages: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Validate a single field of one section item
    Field {
        /// Path to the résumé JSON document
        file: PathBuf,
        /// Section name (basics, work, education, ...)
        #[arg(long)]
        section: String,
        /// Item index within the section
        #[arg(long, default_value = "0")]
        index: usize,
        /// Field name as written in the document (e.g. startDate)
        #[arg(long)]
        field: String,
        /// Message catalog (flat JSON of key to template)
        #[arg(long)]
        messages: Option<PathBuf>,
    },
    /// List every stable issue code and its message key
    Codes,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Validate {
            file,
            config,
            messages,
            format,
            strict,
        } => commands::validate::run(&commands::validate::ValidateConfig {
            file,
            config,
            messages,
            format,
            strict,
            verbose: cli.verbose,
        }),
        Commands::Field {
            file,
            section,
            index,
            field,
            messages,
        } => commands::field::run(&commands::field::FieldConfig {
            file,
            section,
            index,
            field,
            messages,
        }),
        Commands::Codes => commands::codes::run(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}
