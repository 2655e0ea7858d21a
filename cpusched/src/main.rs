/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use cpusched::config::WorkloadConfig;
use cpusched::process::ProcessTable;
use cpusched::render::{render_gantt, render_table};
use cpusched::scheduler::simulate_by_name;

// ── CLI argument definition ───────────────────────────────────────────────────

/// Single-CPU scheduling simulator.
///
/// Example:
///   cpusched -a RR -q 2 --arrival "0 1 2" --burst "4 3 2"
///   cpusched -a "Preemptive Priority" --workload workload.yaml
#[derive(Debug, Parser)]
#[command(
    name = "cpusched",
    about = "Simulate FCFS, SJF, RR, SRTF and priority CPU scheduling",
    long_about = None,
)]
struct Cli {
    /// Scheduling algorithm: FCFS, SJF, RR, PreemptiveFCFS, PreemptiveSJF,
    /// NonPreemptivePriority or PreemptivePriority.  Overrides the workload file.
    #[arg(short = 'a', long = "algorithm")]
    algorithm: Option<String>,

    /// Arrival times, whitespace separated (e.g. "0 1 2").
    #[arg(long = "arrival", allow_hyphen_values = true)]
    arrival: Option<String>,

    /// Burst times, whitespace separated (e.g. "5 3 1").
    #[arg(long = "burst", allow_hyphen_values = true)]
    burst: Option<String>,

    /// Priorities, whitespace separated; lower value = higher priority.
    #[arg(long = "priority", allow_hyphen_values = true)]
    priority: Option<String>,

    /// Round-Robin time quantum.  Overrides the workload file.
    #[arg(short = 'q', long = "quantum", allow_negative_numbers = true)]
    quantum: Option<i64>,

    /// Path to a YAML workload file (instead of --arrival/--burst/--priority).
    #[arg(short = 'w', long = "workload", conflicts_with_all = ["arrival", "burst", "priority"])]
    workload: Option<PathBuf>,

    /// Gantt chart width of one time unit, in characters.
    #[arg(long = "unit-width", default_value_t = 4)]
    unit_width: usize,

    /// Print the full result as YAML instead of a chart and table.
    #[arg(long = "yaml", default_value_t = false)]
    yaml: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialise structured logging on stderr; stdout carries the report.
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!(
        algorithm = ?cli.algorithm,
        quantum   = ?cli.quantum,
        workload  = ?cli.workload,
        yaml      = cli.yaml,
        "Configuration"
    );

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // ── Collect input ─────────────────────────────────────────────────────────
    let (table, algorithm, quantum) = match &cli.workload {
        Some(path) => {
            let workload = WorkloadConfig::load_from_file(path)?;
            let table = workload
                .to_table()
                .with_context(|| format!("Invalid workload in {}", path.display()))?;
            (
                table,
                cli.algorithm.clone().or(workload.algorithm),
                cli.quantum.or(workload.quantum),
            )
        }
        None => {
            let arrival = cli
                .arrival
                .as_deref()
                .context("--arrival is required when no --workload is given")?;
            let burst = cli
                .burst
                .as_deref()
                .context("--burst is required when no --workload is given")?;
            let table = ProcessTable::parse(arrival, burst, cli.priority.as_deref())?;
            (table, cli.algorithm.clone(), cli.quantum)
        }
    };

    let algorithm = algorithm.context("Please select a scheduling algorithm (--algorithm)")?;

    // ── Simulate ──────────────────────────────────────────────────────────────
    let outcome = simulate_by_name(&algorithm, &table, quantum)?;

    // ── Present ───────────────────────────────────────────────────────────────
    if cli.yaml {
        print!("{}", serde_yaml::to_string(&outcome)?);
        return Ok(());
    }

    match outcome.quantum {
        Some(q) => println!("{} (quantum {})\n", outcome.policy, q),
        None => println!("{}\n", outcome.policy),
    }
    println!("{}", render_gantt(&outcome.timeline, cli.unit_width));
    print!("{}", render_table(&outcome.report));

    Ok(())
}
