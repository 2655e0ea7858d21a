/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Round-Robin with a fixed quantum.
//!
//! The FIFO queue is seeded once, up front, with every process in arrival
//! order (ties by input order).  Processes are not re-admitted on arrival:
//! if the head of the queue has not arrived yet, the clock jumps forward to
//! its arrival instead of skipping it.  An unfinished process goes to the
//! tail after each slice.

use std::collections::VecDeque;

use tracing::{debug, info, trace};

use super::Runnable;
use crate::process::{ProcessTable, Time};
use crate::timeline::{MetricsRecord, MetricsReport, Timeline};

pub(super) fn run(table: &ProcessTable, quantum: Time) -> (Timeline, MetricsReport) {
    info!(quantum = quantum, "Executing round-robin");

    let mut queue: VecDeque<Runnable> = table.by_arrival().into_iter().map(Runnable::new).collect();
    let mut timeline = Timeline::new();
    let mut report = MetricsReport::new();
    let mut now: Time = 0;

    while let Some(mut current) = queue.pop_front() {
        let process = current.process;

        if now < process.arrival {
            debug!(from = now, to = process.arrival, id = %process.id, "fast-forward to arrival");
            now = process.arrival;
        }

        let slice = quantum.min(current.remaining);
        let start = now;
        now += slice;
        current.remaining -= slice;
        timeline.push(process.id, start, now);

        if current.remaining > 0 {
            trace!(id = %process.id, remaining = current.remaining, "re-queued at tail");
            queue.push_back(current);
        } else {
            debug!(id = %process.id, finish = now, "finished");
            report.push(MetricsRecord::new(&process, now));
        }
    }

    (timeline, report)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
