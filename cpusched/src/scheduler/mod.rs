//! Single-CPU scheduling engine.
//!
//! [`simulate`] runs one of seven classical policies over a [`ProcessTable`]
//! and returns an [`Outcome`]: the execution [`Timeline`] plus one
//! [`MetricsRecord`](crate::timeline::MetricsRecord) per process.
//!
//! # Design
//!
//! | Topic | Choice |
//! |---|---|
//! | State | Stateless — every run owns its ready queues and remaining bursts |
//! | Input | `&ProcessTable` borrow — never mutated, shareable across threads |
//! | Ties | Policy key first, then input order (`ProcessId`) — fully deterministic |
//! | Preemption | Event-driven: slices end at the next arrival, never on a fixed tick |
//! | Error returns | `Result<Outcome, SchedulerError>` with typed variants |
//! | Post-run check | [`audit`] re-verifies the output invariants and logs violations |
//!
//! # Example
//! ```rust
//! use cpusched::process::ProcessTable;
//! use cpusched::scheduler::{simulate, Policy};
//!
//! let table = ProcessTable::parse("0 1 2", "4 3 2", None).unwrap();
//! let outcome = simulate(Policy::RoundRobin, &table, Some(2)).unwrap();
//! assert_eq!(outcome.timeline.end_time(), 9);
//! ```

pub mod audit;
pub mod error;
mod nonpreemptive;
mod preemptive;
mod preemptive_fcfs;
mod round_robin;

pub use audit::{audit, AuditViolation};
pub use error::{SchedulerError, ValidationError};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{info, warn};

use crate::process::{Process, ProcessTable, Time};
use crate::timeline::{MetricsReport, Timeline};

// ── Policy ────────────────────────────────────────────────────────────────────

/// The seven supported scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Policy {
    /// First-come-first-served, run to completion.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest job first among arrived processes, run to completion.
    #[serde(rename = "SJF")]
    Sjf,
    /// Round-robin with a fixed quantum.
    #[serde(rename = "RR")]
    RoundRobin,
    /// FCFS order with running slices split at every later arrival.
    #[serde(rename = "PreemptiveFCFS")]
    PreemptiveFcfs,
    /// Shortest remaining time first.
    #[serde(rename = "PreemptiveSJF")]
    PreemptiveSjf,
    /// Lowest priority value among arrived processes, run to completion.
    #[serde(rename = "NonPreemptivePriority")]
    NonPreemptivePriority,
    /// Lowest priority value, re-evaluated at every arrival.
    #[serde(rename = "PreemptivePriority")]
    PreemptivePriority,
}

impl Policy {
    pub const ALL: [Policy; 7] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::RoundRobin,
        Policy::PreemptiveFcfs,
        Policy::PreemptiveSjf,
        Policy::NonPreemptivePriority,
        Policy::PreemptivePriority,
    ];

    /// Canonical name, as accepted by [`FromStr`] and shown in reports.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::RoundRobin => "RR",
            Policy::PreemptiveFcfs => "PreemptiveFCFS",
            Policy::PreemptiveSjf => "PreemptiveSJF",
            Policy::NonPreemptivePriority => "NonPreemptivePriority",
            Policy::PreemptivePriority => "PreemptivePriority",
        }
    }

    /// Only Round-Robin takes a quantum; every other policy ignores it.
    pub fn requires_quantum(self) -> bool {
        self == Policy::RoundRobin
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = SchedulerError;

    /// Case-insensitive; spaces, `-` and `_` are ignored, so `"Preemptive
    /// FCFS"`, `"preemptive-fcfs"` and `"PreemptiveFCFS"` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "sjf" | "nonpreemptivesjf" => Ok(Policy::Sjf),
            "rr" | "roundrobin" => Ok(Policy::RoundRobin),
            "preemptivefcfs" => Ok(Policy::PreemptiveFcfs),
            "preemptivesjf" | "srtf" => Ok(Policy::PreemptiveSjf),
            "nonpreemptivepriority" | "priority" => Ok(Policy::NonPreemptivePriority),
            "preemptivepriority" => Ok(Policy::PreemptivePriority),
            _ => Err(SchedulerError::UnknownPolicy(s.to_string())),
        }
    }
}

// ── Outcome ───────────────────────────────────────────────────────────────────

/// Result of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub policy: Policy,
    /// The validated quantum, present only for Round-Robin.
    pub quantum: Option<Time>,
    pub timeline: Timeline,
    pub report: MetricsReport,
}

// ── Per-run state ─────────────────────────────────────────────────────────────

/// A process plus its remaining burst.  Lives only inside one algorithm call.
#[derive(Debug, Clone, Copy)]
struct Runnable {
    process: Process,
    remaining: Time,
}

impl Runnable {
    fn new(process: Process) -> Self {
        Self {
            process,
            remaining: process.burst,
        }
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Simulate `table` under `policy`.
///
/// `quantum` is required (and must be positive) for [`Policy::RoundRobin`]
/// and ignored otherwise.
///
/// # Errors
/// [`SchedulerError::Validation`] for a missing or non-positive quantum.
/// Once validation passes the simulation always terminates successfully.
pub fn simulate(
    policy: Policy,
    table: &ProcessTable,
    quantum: Option<i64>,
) -> Result<Outcome, SchedulerError> {
    let quantum = if policy.requires_quantum() {
        Some(validate_quantum(quantum)?)
    } else {
        None
    };

    info!(
        policy = %policy,
        process_count = table.len(),
        quantum = ?quantum,
        "=== simulate() ==="
    );

    let (timeline, report) = match (policy, quantum) {
        (Policy::Fcfs, _) => nonpreemptive::first_come_first_served(table),
        (Policy::Sjf, _) => nonpreemptive::shortest_job_first(table),
        (Policy::NonPreemptivePriority, _) => nonpreemptive::highest_priority_first(table),
        (Policy::RoundRobin, Some(q)) => round_robin::run(table, q),
        (Policy::RoundRobin, None) => return Err(ValidationError::MissingQuantum.into()),
        (Policy::PreemptiveFcfs, _) => preemptive_fcfs::run(table),
        (Policy::PreemptiveSjf, _) => preemptive::shortest_remaining_time_first(table),
        (Policy::PreemptivePriority, _) => preemptive::preemptive_priority(table),
    };

    let outcome = Outcome {
        policy,
        quantum,
        timeline,
        report,
    };

    for violation in audit(table, &outcome) {
        warn!(policy = %policy, "output invariant violated: {violation}");
    }

    info!(
        policy = %policy,
        segments = outcome.timeline.len(),
        makespan = outcome.timeline.end_time(),
        avg_turnaround = outcome.report.average_turnaround(),
        avg_waiting = outcome.report.average_waiting(),
        "=== simulation complete ==="
    );

    Ok(outcome)
}

/// Parse `algorithm` and run [`simulate`].
///
/// # Errors
/// [`SchedulerError::UnknownPolicy`] before any validation of `quantum`.
pub fn simulate_by_name(
    algorithm: &str,
    table: &ProcessTable,
    quantum: Option<i64>,
) -> Result<Outcome, SchedulerError> {
    let policy: Policy = algorithm.parse()?;
    simulate(policy, table, quantum)
}

fn validate_quantum(quantum: Option<i64>) -> Result<Time, ValidationError> {
    match quantum {
        None => Err(ValidationError::MissingQuantum),
        Some(q) if q <= 0 => Err(ValidationError::NonPositiveQuantum(q)),
        Some(q) => Ok(q as Time),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
