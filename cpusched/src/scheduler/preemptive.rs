/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Event-driven preemptive policies: shortest-remaining-time-first and
//! preemptive priority.
//!
//! Both keep a min-heap of ready processes and a pending list sorted by
//! arrival.  The head of the heap runs until either it finishes or the next
//! pending process arrives, whichever is first.  An arrival strictly before
//! the finish instant ends the slice there: the process goes back into the
//! heap with its reduced remaining burst and the heap is re-evaluated with
//! the newcomer admitted.  Slices therefore end only at arrival or finish
//! events, never on a fixed tick.
//!
//! The heap key is `(policy key, ProcessId)`, which is a total order, so ties
//! always resolve to input order.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use tracing::{debug, info, trace};

use crate::process::{Process, ProcessId, ProcessTable, Time};
use crate::timeline::{MetricsRecord, MetricsReport, Timeline};

pub(super) fn shortest_remaining_time_first(table: &ProcessTable) -> (Timeline, MetricsReport) {
    info!("Executing preemptive SJF (SRTF)");
    run_preemptive(table, |_, remaining| remaining as i128)
}

pub(super) fn preemptive_priority(table: &ProcessTable) -> (Timeline, MetricsReport) {
    info!("Executing preemptive priority");
    run_preemptive(table, |process, _| process.priority as i128)
}

type ReadyHeap = BinaryHeap<Reverse<(i128, ProcessId)>>;

/// `key(process, remaining)` orders the ready heap; smaller runs first.
fn run_preemptive(
    table: &ProcessTable,
    key: impl Fn(&Process, Time) -> i128,
) -> (Timeline, MetricsReport) {
    let processes: Vec<Process> = table.iter().copied().collect();
    let mut remaining: Vec<Time> = processes.iter().map(|p| p.burst).collect();
    let mut pending: VecDeque<Process> = table.by_arrival().into();
    let mut ready = ReadyHeap::new();

    let mut timeline = Timeline::new();
    let mut report = MetricsReport::new();
    let mut now: Time = 0;

    loop {
        // 1. Admit everything that has arrived by `now`.
        while let Some(&next) = pending.front() {
            if next.arrival > now {
                break;
            }
            pending.pop_front();
            trace!(id = %next.id, at = now, "admitted");
            ready.push(Reverse((key(&next, next.burst), next.id)));
        }

        // 2. Nothing ready: jump to the next arrival, or stop.
        let Some(Reverse((_, id))) = ready.pop() else {
            match pending.front() {
                Some(next) => {
                    debug!(from = now, to = next.arrival, "CPU idle");
                    now = next.arrival;
                    continue;
                }
                None => break,
            }
        };

        let process = processes[id.index()];
        let left = remaining[id.index()];
        let finish = now + left;

        match pending.front() {
            // 3. Preemption point: the next arrival lands mid-slice.
            Some(next) if next.arrival < finish => {
                let cut = next.arrival;
                timeline.push(id, now, cut);
                remaining[id.index()] = left - (cut - now);
                debug!(
                    id = %id,
                    start = now,
                    end = cut,
                    remaining = remaining[id.index()],
                    "slice ends at arrival of {}",
                    next.id
                );
                now = cut;
                ready.push(Reverse((key(&process, remaining[id.index()]), id)));
            }
            // 4. Runs to completion.
            _ => {
                timeline.push(id, now, finish);
                remaining[id.index()] = 0;
                report.push(MetricsRecord::new(&process, finish));
                debug!(id = %id, start = now, finish = finish, "finished");
                now = finish;
            }
        }
    }

    (timeline, report)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
