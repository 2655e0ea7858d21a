/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Process table: the validated, read-only input of every simulation.
//!
//! ```text
//! "0 1 2" / "5 3 1" / "2 1 3"  ──(parse_list)──►  Vec<i64>  ──(from_lists)──►  ProcessTable
//!   raw whitespace lists                           untyped        validated, ids assigned
//! ```
//!
//! # Ownership model
//! A `ProcessTable` is built once and only ever borrowed by the scheduler.
//! Algorithms copy what they need into their own per-call runtime state, so
//! the same table can be simulated under every policy (or from several
//! threads) without cloning.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::scheduler::ValidationError;

// ── Scalar types ──────────────────────────────────────────────────────────────

/// Simulated time, in abstract integer time units.
pub type Time = u64;

/// Scheduling priority.  Lower value = higher priority.
pub type Priority = i32;

/// Priority given to every process when the priority list is omitted.
pub const DEFAULT_PRIORITY: Priority = 0;

// ── ProcessId ─────────────────────────────────────────────────────────────────

/// Stable process identifier: the zero-based position in the input lists.
///
/// Ordering on `ProcessId` is input order, which every policy uses as its
/// final tie-breaker.  Displays as a spreadsheet-style label (`A`..`Z`,
/// `AA`, `AB`, …) so any number of processes gets a unique, short name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProcessId(pub usize);

impl ProcessId {
    /// Zero-based input index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Bijective base-26: 0 → A, 25 → Z, 26 → AA.
        let mut n = self.0 + 1;
        let mut label = Vec::new();
        while n > 0 {
            n -= 1;
            label.push(b'A' + (n % 26) as u8);
            n /= 26;
        }
        label.reverse();
        f.write_str(&String::from_utf8_lossy(&label))
    }
}

impl Serialize for ProcessId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── Process ───────────────────────────────────────────────────────────────────

/// One immutable input record.
///
/// Invariants (enforced by [`ProcessTable::from_lists`]): `burst > 0`, and
/// `arrival + Σ burst` fits in a [`Time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Process {
    pub id: ProcessId,
    pub arrival: Time,
    pub burst: Time,
    pub priority: Priority,
}

// ── ProcessTable ──────────────────────────────────────────────────────────────

/// Validated set of processes, indexed by [`ProcessId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    /// Build a table from parallel arrival / burst / priority lists.
    ///
    /// Ids are assigned in input order.  `priorities == None` gives every
    /// process [`DEFAULT_PRIORITY`].
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found; nothing is built on error.
    pub fn from_lists(
        arrivals: &[i64],
        bursts: &[i64],
        priorities: Option<&[i64]>,
    ) -> Result<Self, ValidationError> {
        if bursts.len() != arrivals.len() {
            return Err(ValidationError::LengthMismatch {
                field: "burst",
                expected: arrivals.len(),
                found: bursts.len(),
            });
        }
        if let Some(prio) = priorities {
            if prio.len() != arrivals.len() {
                return Err(ValidationError::LengthMismatch {
                    field: "priority",
                    expected: arrivals.len(),
                    found: prio.len(),
                });
            }
        }
        if arrivals.is_empty() {
            return Err(ValidationError::Empty);
        }

        let mut processes = Vec::with_capacity(arrivals.len());
        for (idx, (&arrival, &burst)) in arrivals.iter().zip(bursts).enumerate() {
            let id = ProcessId(idx);

            let arrival = Time::try_from(arrival).map_err(|_| ValidationError::NegativeArrival {
                id: id.to_string(),
                value: arrival,
            })?;

            if burst <= 0 {
                return Err(ValidationError::NonPositiveBurst {
                    id: id.to_string(),
                    value: burst,
                });
            }
            let burst = burst as Time;

            let priority = match priorities {
                Some(prio) => Priority::try_from(prio[idx]).map_err(|_| {
                    ValidationError::PriorityOutOfRange {
                        id: id.to_string(),
                        value: prio[idx],
                    }
                })?,
                None => DEFAULT_PRIORITY,
            };

            processes.push(Process {
                id,
                arrival,
                burst,
                priority,
            });
        }

        // Every policy finishes by max(arrival) + Σ burst at the latest.
        let latest_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
        processes
            .iter()
            .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst))
            .ok_or(ValidationError::HorizonOverflow)?;

        Ok(Self { processes })
    }

    /// Build a table from whitespace-separated integer lists.
    ///
    /// A `priorities` text that is `None` or blank counts as omitted.
    pub fn parse(
        arrivals: &str,
        bursts: &str,
        priorities: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let arrivals = parse_list("arrival", arrivals)?;
        let bursts = parse_list("burst", bursts)?;
        let priorities = priorities
            .filter(|text| !text.trim().is_empty())
            .map(|text| parse_list("priority", text))
            .transpose()?;

        Self::from_lists(&arrivals, &bursts, priorities.as_deref())
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.processes.get(id.0)
    }

    /// Processes in input (id) order.
    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    /// Processes sorted by arrival; equal arrivals keep input order.
    pub fn by_arrival(&self) -> Vec<Process> {
        let mut sorted = self.processes.clone();
        sorted.sort_by_key(|p| p.arrival);
        sorted
    }

    /// Sum of all bursts: the CPU time every complete run must account for.
    pub fn total_burst(&self) -> Time {
        self.processes.iter().map(|p| p.burst).sum()
    }
}

// ── Raw list parsing ──────────────────────────────────────────────────────────

/// Parse a whitespace-separated list of integers.
///
/// `field` names the list in the error (`"arrival"`, `"burst"`, …).  Blank
/// text yields an empty list.
pub fn parse_list(field: &'static str, text: &str) -> Result<Vec<i64>, ValidationError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| ValidationError::InvalidNumber {
                    field,
                    token: token.to_string(),
                })
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
