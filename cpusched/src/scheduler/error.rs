/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error types for the scheduling engine.
//!
//! Two error enums model the two failure layers:
//!
//! * [`ValidationError`] — the input itself is malformed (bad token, length
//!   mismatch, negative arrival, …).  Carries the offending value.
//! * [`SchedulerError`] — top-level failure returned from
//!   [`simulate()`](super::simulate).
//!
//! Every error is an input-shape problem: nothing is retried, no partial
//! simulation is run, and once validation passes a simulation cannot fail.
//!
//! **Do not** replace these with `anyhow::Error` inside the engine — callers
//! match on the variants.  `anyhow` is only used at the application edge
//! (config loading, CLI).

use thiserror::Error;

// ── Input validation ──────────────────────────────────────────────────────────

/// Why the process list (or the quantum) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A token in a whitespace-separated list is not an integer.
    #[error("{field} list contains '{token}', which is not an integer")]
    InvalidNumber { field: &'static str, token: String },

    /// The burst or priority list length differs from the arrival list.
    #[error("{field} list has {found} value(s) but the arrival list has {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// No processes were supplied at all.
    #[error("no processes provided — arrival and burst lists are empty")]
    Empty,

    #[error("process {id} has negative arrival time {value}")]
    NegativeArrival { id: String, value: i64 },

    #[error("process {id} has non-positive burst time {value}")]
    NonPositiveBurst { id: String, value: i64 },

    #[error("process {id} has priority {value}, outside the 32-bit range")]
    PriorityOutOfRange { id: String, value: i64 },

    /// Latest arrival plus total burst does not fit the time type.
    #[error("arrival and burst times are too large to simulate without overflow")]
    HorizonOverflow,

    /// Round-Robin was selected without a quantum.
    #[error("round-robin requires a time quantum")]
    MissingQuantum,

    #[error("time quantum must be a positive integer, got {0}")]
    NonPositiveQuantum(i64),
}

// ── Top-level scheduler errors ────────────────────────────────────────────────

/// Top-level error type returned by [`simulate()`](super::simulate) and
/// policy-name parsing.
///
/// | Variant | Cause |
/// |---|---|
/// | `Validation` | Malformed processes or quantum |
/// | `UnknownPolicy` | Unrecognised policy name |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The policy name is not recognised.
    #[error("unknown scheduling algorithm: '{0}' (valid: FCFS, SJF, RR, PreemptiveFCFS, PreemptiveSJF, NonPreemptivePriority, PreemptivePriority)")]
    UnknownPolicy(String),
}
