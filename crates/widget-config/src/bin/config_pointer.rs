//! `config-pointer` - read or patch a configuration document by pointer.
//!
//! Usage:
//!   config-pointer get '<pointer>'
//!   config-pointer set '<pointer>' '<json>'
//!   config-pointer delete '<pointer>'
//!
//! The document is read from `--input` or stdin; results go to stdout.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use widget_config::{assign_pointer, delete_pointer, lookup_pointer, OutputStyle};

/// Read or patch a widget configuration document by pointer
#[derive(Parser, Debug)]
#[command(name = "config-pointer")]
#[command(version)]
#[command(about = "Read or patch a widget configuration document by pointer", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Document file (omit to read from stdin)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(short, long, global = true)]
    compact: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true, value_parser = clap::value_parser!(tracing::Level))]
    log_level: tracing::Level,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the value at a pointer
    Get { pointer: String },
    /// Write a JSON value at a pointer and print the document
    Set { pointer: String, value: String },
    /// Remove the value at a pointer and print the document
    Delete { pointer: String },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Get { .. } => "get",
            Command::Set { .. } => "set",
            Command::Delete { .. } => "delete",
        }
    }

    fn pointer(&self) -> &str {
        match self {
            Command::Get { pointer } | Command::Set { pointer, .. } | Command::Delete { pointer } => {
                pointer
            }
        }
    }
}

fn init_logging(log_level: tracing::Level) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();
}

fn read_document(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read document from stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level);

    let style = if args.compact {
        OutputStyle::Compact
    } else {
        OutputStyle::Pretty
    };
    let doc = read_document(args.input.as_ref())?;
    let doc = doc.trim();

    let output = match &args.command {
        Command::Get { pointer } => lookup_pointer(doc, pointer, style),
        Command::Set { pointer, value } => assign_pointer(doc, pointer, value, style),
        Command::Delete { pointer } => delete_pointer(doc, pointer, style),
    }
    .with_context(|| {
        format!(
            "{} at pointer {:?} failed",
            args.command.name(),
            args.command.pointer()
        )
    })?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
