//! CLI entry point for labelguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and
//! exit codes. All policy logic lives in the `labelguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use labelguard_app::{protocol_version, serialize_response, validate, validate_settings};
use std::io::{Read, Write};

#[derive(Parser, Debug)]
#[command(
    name = "labelguard",
    version,
    about = "Label governance policy: denied, mandatory, and constrained labels"
)]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. warn, debug, labelguard_app=debug).
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a validation request (admission request plus embedded settings).
    Validate {
        /// Path to the validation request JSON, or `-` for stdin.
        #[arg(long, default_value = "-")]
        request: Utf8PathBuf,
    },

    /// Check a standalone settings document before distributing it.
    ValidateSettings {
        /// Path to the settings JSON, or `-` for stdin.
        #[arg(long, default_value = "-")]
        settings: Utf8PathBuf,
    },

    /// Print the host protocol version spoken by this policy.
    ProtocolVersion,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match &cli.cmd {
        Commands::Validate { request } => cmd_validate(request),
        Commands::ValidateSettings { settings } => cmd_validate_settings(settings),
        Commands::ProtocolVersion => cmd_protocol_version(),
    };

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("labelguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_validate(path: &Utf8Path) -> anyhow::Result<i32> {
    let payload = read_input(path)?;
    let response = validate(&payload);
    tracing::info!(accepted = response.accepted, "validate finished");

    write_response(&serialize_response(&response)?)?;
    Ok(decision_exit_code(response.accepted))
}

fn cmd_validate_settings(path: &Utf8Path) -> anyhow::Result<i32> {
    let payload = read_input(path)?;
    let response = validate_settings(&payload);
    tracing::info!(valid = response.valid, "validate-settings finished");

    write_response(&serialize_response(&response)?)?;
    Ok(decision_exit_code(response.valid))
}

fn cmd_protocol_version() -> anyhow::Result<i32> {
    write_response(&serialize_response(&protocol_version())?)?;
    Ok(0)
}

/// Map an accept/reject outcome to an exit code: 0 = accepted, 2 = rejected.
fn decision_exit_code(accepted: bool) -> i32 {
    if accepted { 0 } else { 2 }
}

fn read_input(path: &Utf8Path) -> anyhow::Result<Vec<u8>> {
    if path.as_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("read stdin")?;
        return Ok(buf);
    }
    std::fs::read(path).with_context(|| format!("read input: {}", path))
}

fn write_response(bytes: &[u8]) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(bytes).context("write response")?;
    stdout.write_all(b"\n").context("write response")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}
