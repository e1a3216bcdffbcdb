//! qmidb CLI - compiles the QMI data dictionary into C declarations.
//!
//! This is the main entry point for the qmidb command-line application.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use qmidb::dictionary::DEFAULT_NAMESPACE;
use qmidb::prelude::*;

const LOG_TARGET: &str = "qmidb";

/// qmidb - turn the QMI dictionary tables into C declarations
#[derive(Parser, Debug)]
#[command(name = "qmidb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding Entity.txt, EnumEntry.txt, Enum.txt, Field.txt and Struct.txt
    #[arg(value_name = "DIR")]
    path: Option<PathBuf>,

    /// Prefix for generated type and constant names
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    namespace: String,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::None)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    None,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let stdout = io::stdout();
    let stderr = io::stderr();
    run(&cli, &mut stdout.lock(), &mut stderr.lock())
}

fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}

/// Load, validate and emit. Declarations go to `out`, diagnostics to `diag`.
fn run(cli: &Cli, out: &mut impl Write, diag: &mut impl Write) -> Result<()> {
    let dir = cli.path.as_deref().unwrap_or(Path::new("."));

    let start = Instant::now();
    let dictionary = Dictionary::open(dir)
        .with_context(|| format!("Failed to load dictionary from {}", dir.display()))?;

    writeln!(out, "{}", dictionary.counts())?;

    let schema = dictionary.into_schema();
    let findings = validate(&schema);
    for finding in schema.diagnostics().iter().chain(&findings) {
        writeln!(diag, "{}", finding)?;
    }

    let options = EmitOptions {
        namespace: cli.namespace.clone(),
    };
    let header = CHeaderExporter::with_options(&schema, options).export_all();
    out.write_all(header.as_bytes())?;
    out.flush()?;

    log::info!(
        target: LOG_TARGET,
        "Emitted {} enums and {} structs with {} diagnostics in {:?}",
        schema.enum_count(),
        schema.struct_count(),
        schema.diagnostics().len() + findings.len(),
        start.elapsed()
    );

    Ok(())
}
