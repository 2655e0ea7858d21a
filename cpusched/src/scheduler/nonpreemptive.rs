/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Non-preemptive family: FCFS, SJF and non-preemptive priority.
//!
//! All three share one loop and differ only in the selection key applied to
//! the processes that have arrived by `now`:
//!
//! | Policy | Key |
//! |---|---|
//! | FCFS | `arrival` |
//! | SJF | `burst` |
//! | Non-preemptive priority | `priority` |
//!
//! Ties always fall back to input order.  The chosen process runs to
//! completion in a single segment.

use tracing::{debug, info};

use crate::process::{Process, ProcessTable};
use crate::timeline::{MetricsRecord, MetricsReport, Timeline};

pub(super) fn first_come_first_served(table: &ProcessTable) -> (Timeline, MetricsReport) {
    info!("Executing FCFS");
    run_to_completion(table, |p| p.arrival as i128)
}

pub(super) fn shortest_job_first(table: &ProcessTable) -> (Timeline, MetricsReport) {
    info!("Executing SJF");
    run_to_completion(table, |p| p.burst as i128)
}

pub(super) fn highest_priority_first(table: &ProcessTable) -> (Timeline, MetricsReport) {
    info!("Executing non-preemptive priority");
    run_to_completion(table, |p| p.priority as i128)
}

/// Repeatedly pick the arrived process with the smallest `(key, id)` and run
/// it to completion.  When nothing has arrived, jump to the next arrival.
fn run_to_completion(
    table: &ProcessTable,
    key: impl Fn(&Process) -> i128,
) -> (Timeline, MetricsReport) {
    // Sorted by arrival; `Vec::remove` keeps it sorted, so the head is
    // always the earliest outstanding arrival.
    let mut pending = table.by_arrival();
    let mut timeline = Timeline::new();
    let mut report = MetricsReport::new();
    let mut now = 0;

    while let Some(earliest) = pending.first() {
        let selected = pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.arrival <= now)
            .min_by_key(|(_, p)| (key(*p), p.id))
            .map(|(idx, _)| idx);

        let Some(idx) = selected else {
            debug!(from = now, to = earliest.arrival, "CPU idle");
            now = earliest.arrival;
            continue;
        };

        let process = pending.remove(idx);
        let start = now;
        now += process.burst;

        timeline.push(process.id, start, now);
        report.push(MetricsRecord::new(&process, now));

        debug!(
            id = %process.id,
            start = start,
            end = now,
            waiting = start - process.arrival,
            "ran to completion"
        );
    }

    (timeline, report)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
