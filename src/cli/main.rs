//! json2dto command line: generate C# DTO classes from JSON
//!
//! ```text
//! json2dto <OUTPUT_PATH> <TARGET> [OPTIONS]
//! ```
//!
//! `TARGET` is JSON text, a JSON file, or a directory of JSON files.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use json2dto::cli::commands::{GenerateArgs, handle_generate};
use json2dto::cli::output::ModelFormat;
use json2dto::cli::rewrite_legacy_flags;

#[derive(Parser, Debug)]
#[command(name = "json2dto")]
#[command(version, about = "Generate C# DTO classes from JSON", long_about = None)]
struct Cli {
    /// Directory receiving the generated C# files
    output_path: Option<PathBuf>,

    /// JSON text, a JSON file, or a directory of JSON files
    target: Option<String>,

    /// Namespace wrapping the generated classes (-ns)
    #[arg(long)]
    namespace: Option<String>,

    /// Prefix for every class name (-pr)
    #[arg(long)]
    prefix: Option<String>,

    /// Suffix for every class name (-su)
    #[arg(long)]
    suffix: Option<String>,

    /// Root class name, required when TARGET is JSON text (-rc)
    #[arg(long = "rootclass")]
    root_class: Option<String>,

    /// Spaces per indentation level, default 4; non-numbers fall back to it (-ic)
    #[arg(long = "indentCount", allow_hyphen_values = true)]
    indent_count: Option<String>,

    /// TOML file with default option values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Continue with the remaining files when one file of a directory fails
    #[arg(long)]
    keep_going: bool,

    /// Render without writing files
    #[arg(long)]
    dry_run: bool,

    /// Print the inferred class model instead of generating code
    #[arg(long, value_enum)]
    emit_model: Option<ModelFormat>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,json2dto=info".to_string(),
            2 => "info,json2dto=debug".to_string(),
            _ => "debug,json2dto=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse_from(rewrite_legacy_flags(std::env::args()));
    init_tracing(cli.verbose, cli.json_logs);

    let (Some(output_path), Some(target)) = (cli.output_path, cli.target) else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    debug!("Generating into {} from {}", output_path.display(), target);

    let report = handle_generate(GenerateArgs {
        output_path,
        target,
        namespace: cli.namespace,
        prefix: cli.prefix,
        suffix: cli.suffix,
        root_class: cli.root_class,
        indent_count: cli.indent_count,
        config: cli.config,
        keep_going: cli.keep_going,
        dry_run: cli.dry_run,
        emit_model: cli.emit_model,
    })?;

    print!("{report}");
    Ok(())
}
