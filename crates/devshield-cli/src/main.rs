//! `devshield` -- CLI for the devshield security-posture engine.
//!
//! Provides the following subcommands:
//!
//! - `devshield scan` -- Run the full check catalog against the local host.
//! - `devshield check <method>` -- Run a single check by method identifier.
//! - `devshield list` -- List all check identifiers and wire names.
//!
//! The local host answers the probes a desktop process can (filesystem,
//! environment, binary lookup); device-only probes report unavailable and
//! each check falls back to its documented default, which makes `scan` a
//! convenient smoke test of the full dispatch path.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use devshield_bridge::{BridgeAdapter, BridgeResponse};
use devshield_core::DiagnosticEngine;
use devshield_platform::LocalHost;
use devshield_types::CheckKind;

/// devshield security-posture CLI.
#[derive(Parser)]
#[command(name = "devshield", about = "Device security-posture scanner", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run every registered check and print a posture report.
    Scan {
        /// Emit the report as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Run a single check by its method identifier.
    Check {
        /// Method identifier, e.g. checkRootedJailbroken.
        method: String,
    },

    /// List all check identifiers.
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let engine = DiagnosticEngine::standard(Arc::new(LocalHost::new()));

    match cli.command {
        Commands::Scan { json } => scan(engine, json)?,
        Commands::Check { method } => check(engine, &method)?,
        Commands::List => list(),
    }
    Ok(())
}

fn scan(engine: DiagnosticEngine, json: bool) -> anyhow::Result<()> {
    let report = engine.scan();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Check", "Verdict", "Message"]);
    for finding in &report.findings {
        let verdict = if !finding.applicable {
            "n/a"
        } else if finding.vulnerable {
            "VULNERABLE"
        } else {
            "ok"
        };
        table.add_row(vec![
            Cell::new(finding.kind.wire_name()),
            Cell::new(verdict),
            Cell::new(&finding.message),
        ]);
    }
    println!("{table}");
    println!(
        "{} checks: {} vulnerable, {} ok, {} not applicable",
        report.checks_run, report.vulnerable_count, report.safe_count, report.not_applicable_count
    );
    Ok(())
}

fn check(engine: DiagnosticEngine, method: &str) -> anyhow::Result<()> {
    let bridge = BridgeAdapter::new(engine);
    match bridge.handle(method) {
        BridgeResponse::Verdict(verdict) => {
            println!("{}", serde_json::to_string_pretty(&verdict)?);
            Ok(())
        }
        BridgeResponse::NotImplemented => {
            anyhow::bail!("unknown check '{method}' (see `devshield list`)")
        }
    }
}

fn list() {
    for kind in CheckKind::ALL {
        println!("{:32} -> {}", kind.method_id(), kind.wire_name());
    }
}
