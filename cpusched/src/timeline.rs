/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Output model shared by every policy: the execution [`Timeline`] (Gantt
//! chart) and the per-process [`MetricsReport`].
//!
//! Both are append-only while an algorithm runs and immutable once returned.

use serde::Serialize;

use crate::process::{Priority, Process, ProcessId, Time};

// ── Timeline ──────────────────────────────────────────────────────────────────

/// One contiguous slice of one process's execution, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineSegment {
    pub id: ProcessId,
    pub start: Time,
    pub end: Time,
}

impl TimelineSegment {
    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// Ordered, non-overlapping execution segments.  Gaps are idle CPU.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    segments: Vec<TimelineSegment>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `[start, end)` for `id`.
    ///
    /// Algorithms only ever append in time order; an out-of-order or empty
    /// slice is an engine bug and trips the debug assertions.
    pub(crate) fn push(&mut self, id: ProcessId, start: Time, end: Time) {
        debug_assert!(start < end, "empty slice {start}..{end} for {id}");
        debug_assert!(
            start >= self.end_time(),
            "slice {start}..{end} for {id} overlaps the previous segment"
        );
        self.segments.push(TimelineSegment { id, start, end });
    }

    pub fn segments(&self) -> &[TimelineSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End of the last segment (the makespan); `0` for an empty timeline.
    pub fn end_time(&self) -> Time {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Total time the CPU was executing some process.
    pub fn busy_time(&self) -> Time {
        self.segments.iter().map(TimelineSegment::duration).sum()
    }

    /// Idle time between `0` and [`end_time`](Self::end_time).
    pub fn idle_time(&self) -> Time {
        self.end_time() - self.busy_time()
    }

    /// Segments belonging to `id`, in time order.
    pub fn segments_for(&self, id: ProcessId) -> impl Iterator<Item = &TimelineSegment> {
        self.segments.iter().filter(move |s| s.id == id)
    }
}

// ── Metrics ───────────────────────────────────────────────────────────────────

/// Per-process result, emitted once when the process finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsRecord {
    pub id: ProcessId,
    pub arrival: Time,
    pub burst: Time,
    pub priority: Priority,
    pub finish: Time,
    /// `finish - arrival`
    pub turnaround: Time,
    /// `turnaround - burst`
    pub waiting: Time,
}

impl MetricsRecord {
    /// Derive the record for `process` finishing at `finish`.
    pub fn new(process: &Process, finish: Time) -> Self {
        debug_assert!(
            finish >= process.arrival + process.burst,
            "process {} finished at {finish} before arrival + burst",
            process.id
        );
        let turnaround = finish.saturating_sub(process.arrival);
        Self {
            id: process.id,
            arrival: process.arrival,
            burst: process.burst,
            priority: process.priority,
            finish,
            turnaround,
            waiting: turnaround.saturating_sub(process.burst),
        }
    }
}

/// All metrics records of one run, in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MetricsReport {
    records: Vec<MetricsRecord>,
}

impl MetricsReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: MetricsRecord) {
        self.records.push(record);
    }

    /// Records in completion order.
    pub fn records(&self) -> &[MetricsRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: ProcessId) -> Option<&MetricsRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records re-ordered by process id (input order).
    pub fn sorted_by_id(&self) -> Vec<MetricsRecord> {
        let mut sorted = self.records.clone();
        sorted.sort_by_key(|r| r.id);
        sorted
    }

    pub fn average_turnaround(&self) -> f64 {
        self.mean(|r| r.turnaround)
    }

    pub fn average_waiting(&self) -> f64 {
        self.mean(|r| r.waiting)
    }

    fn mean(&self, field: impl Fn(&MetricsRecord) -> Time) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let total: f64 = self.records.iter().map(|r| field(r) as f64).sum();
        total / self.records.len() as f64
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn process(idx: usize, arrival: Time, burst: Time) -> Process {
        Process {
            id: ProcessId(idx),
            arrival,
            burst,
            priority: 0,
        }
    }

    #[test]
    fn record_derives_turnaround_and_waiting() {
        let r = MetricsRecord::new(&process(1, 1, 3), 8);
        assert_eq!(r.turnaround, 7);
        assert_eq!(r.waiting, 4);
        assert_eq!(r.finish, 8);
    }

    #[test]
    fn timeline_reports_makespan_busy_and_idle() {
        let mut tl = Timeline::new();
        tl.push(ProcessId(0), 0, 2);
        tl.push(ProcessId(1), 5, 6);
        tl.push(ProcessId(0), 6, 9);

        assert_eq!(tl.end_time(), 9);
        assert_eq!(tl.busy_time(), 6);
        assert_eq!(tl.idle_time(), 3);
        assert_eq!(tl.segments_for(ProcessId(0)).count(), 2);
    }

    #[test]
    fn empty_timeline_ends_at_zero() {
        let tl = Timeline::new();
        assert_eq!(tl.end_time(), 0);
        assert_eq!(tl.idle_time(), 0);
    }

    #[test]
    fn report_averages_and_sorting() {
        let mut report = MetricsReport::new();
        report.push(MetricsRecord::new(&process(1, 0, 2), 2));
        report.push(MetricsRecord::new(&process(0, 0, 6), 8));

        assert_eq!(report.average_turnaround(), 5.0);
        assert_eq!(report.average_waiting(), 1.0);

        let ids: Vec<usize> = report.sorted_by_id().iter().map(|r| r.id.index()).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(report.get(ProcessId(0)).unwrap().waiting, 2);
    }

    #[test]
    fn empty_report_averages_to_zero() {
        assert_eq!(MetricsReport::new().average_waiting(), 0.0);
    }
}
