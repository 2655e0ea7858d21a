/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Preemptive FCFS.
//!
//! Processes are admitted in arrival order.  Before each admission the queue
//! is drained up to the newcomer's arrival time; if the head would run past
//! that instant it is cut there, and its leftover stays at the head.  After
//! the last admission the queue runs to completion in FIFO order.
//!
//! The order of execution is exactly FCFS, so the metrics match
//! [`first_come_first_served`](super::nonpreemptive::first_come_first_served).
//! Only the timeline differs: a process running across another's arrival is
//! shown as two (or more) adjacent segments split at that arrival.
//!
//! The leftover is never sent to the tail with its arrival reset to the cut
//! instant: that variant reorders execution and can report negative waiting
//! times, so the arrival-boundary split is the only visible effect kept.

use std::collections::VecDeque;

use tracing::{debug, info};

use super::Runnable;
use crate::process::{ProcessTable, Time};
use crate::timeline::{MetricsRecord, MetricsReport, Timeline};

pub(super) fn run(table: &ProcessTable) -> (Timeline, MetricsReport) {
    info!("Executing preemptive FCFS");

    let mut queue: VecDeque<Runnable> = VecDeque::new();
    let mut timeline = Timeline::new();
    let mut report = MetricsReport::new();
    let mut now: Time = 0;

    for process in table.by_arrival() {
        while now < process.arrival {
            let Some(head) = queue.front_mut() else {
                break;
            };
            let would_finish = now + head.remaining;

            if would_finish > process.arrival {
                // Cut at the arrival boundary; the leftover keeps its place.
                timeline.push(head.process.id, now, process.arrival);
                head.remaining = would_finish - process.arrival;
                debug!(
                    id = %head.process.id,
                    at = process.arrival,
                    remaining = head.remaining,
                    "split at arrival of {}",
                    process.id
                );
                now = process.arrival;
            } else {
                timeline.push(head.process.id, now, would_finish);
                report.push(MetricsRecord::new(&head.process, would_finish));
                debug!(id = %head.process.id, finish = would_finish, "finished");
                now = would_finish;
                queue.pop_front();
            }
        }

        if queue.is_empty() && now < process.arrival {
            debug!(from = now, to = process.arrival, "CPU idle");
            now = process.arrival;
        }
        queue.push_back(Runnable::new(process));
    }

    while let Some(current) = queue.pop_front() {
        let start = now;
        now += current.remaining;
        timeline.push(current.process.id, start, now);
        report.push(MetricsRecord::new(&current.process, now));
        debug!(id = %current.process.id, finish = now, "finished");
    }

    (timeline, report)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
