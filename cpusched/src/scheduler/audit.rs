/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Post-run output audit.
//!
//! Re-checks a finished [`Outcome`] against the invariants every policy must
//! uphold:
//!
//! | Check | Violation |
//! |---|---|
//! | every segment has `start < end` | `EmptySegment` |
//! | segments are ordered and never overlap | `Overlap` |
//! | no process runs before it arrives | `RunsBeforeArrival` |
//! | a process's segments sum to its burst | `CoverageMismatch` |
//! | one metrics record per process | `MissingRecord` / `DuplicateRecord` |
//! | record copies the input and finishes with its last segment | `RecordMismatch` |
//! | `turnaround = finish - arrival ≥ burst`, `waiting = turnaround - burst` | `BadMetrics` |
//!
//! The audit never fails a run: [`simulate`](super::simulate) logs each
//! violation with `warn!` and still returns the outcome.  A non-empty audit
//! always means an engine bug, so the test suites assert it is empty.

use std::collections::BTreeMap;
use std::fmt;

use super::Outcome;
use crate::process::{ProcessId, ProcessTable, Time};

/// One broken output invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditViolation {
    EmptySegment { id: ProcessId, at: Time },
    Overlap { previous_end: Time, next_start: Time },
    UnknownProcess { id: ProcessId },
    RunsBeforeArrival { id: ProcessId, start: Time, arrival: Time },
    CoverageMismatch { id: ProcessId, executed: Time, burst: Time },
    MissingRecord { id: ProcessId },
    DuplicateRecord { id: ProcessId },
    RecordMismatch { id: ProcessId, field: &'static str },
    BadMetrics { id: ProcessId },
}

impl fmt::Display for AuditViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditViolation::EmptySegment { id, at } => {
                write!(f, "empty segment for process {} at t={}", id, at)
            }
            AuditViolation::Overlap {
                previous_end,
                next_start,
            } => write!(
                f,
                "segment starting at t={} overlaps one ending at t={}",
                next_start, previous_end
            ),
            AuditViolation::UnknownProcess { id } => {
                write!(f, "output mentions process {} which is not in the input", id)
            }
            AuditViolation::RunsBeforeArrival { id, start, arrival } => write!(
                f,
                "process {} runs at t={} before its arrival at t={}",
                id, start, arrival
            ),
            AuditViolation::CoverageMismatch {
                id,
                executed,
                burst,
            } => write!(
                f,
                "process {} executed for {} time unit(s) but its burst is {}",
                id, executed, burst
            ),
            AuditViolation::MissingRecord { id } => {
                write!(f, "process {} has no metrics record", id)
            }
            AuditViolation::DuplicateRecord { id } => {
                write!(f, "process {} has more than one metrics record", id)
            }
            AuditViolation::RecordMismatch { id, field } => {
                write!(f, "metrics record for process {} has a wrong {}", id, field)
            }
            AuditViolation::BadMetrics { id } => write!(
                f,
                "metrics for process {} break turnaround/waiting arithmetic",
                id
            ),
        }
    }
}

/// Check `outcome` against `table`.  Returns every violation found, in a
/// deterministic order; an empty vector means the run is consistent.
pub fn audit(table: &ProcessTable, outcome: &Outcome) -> Vec<AuditViolation> {
    let mut violations = Vec::new();

    // ── Timeline ──────────────────────────────────────────────────────────────
    let mut executed: BTreeMap<ProcessId, Time> = BTreeMap::new();
    let mut last_end: BTreeMap<ProcessId, Time> = BTreeMap::new();
    let mut previous_end: Option<Time> = None;

    for seg in outcome.timeline.segments() {
        if seg.start >= seg.end {
            violations.push(AuditViolation::EmptySegment {
                id: seg.id,
                at: seg.start,
            });
        }
        if let Some(prev) = previous_end {
            if seg.start < prev {
                violations.push(AuditViolation::Overlap {
                    previous_end: prev,
                    next_start: seg.start,
                });
            }
        }
        previous_end = Some(seg.end);

        match table.get(seg.id) {
            Some(process) if seg.start < process.arrival => {
                violations.push(AuditViolation::RunsBeforeArrival {
                    id: seg.id,
                    start: seg.start,
                    arrival: process.arrival,
                });
            }
            Some(_) => {}
            None => violations.push(AuditViolation::UnknownProcess { id: seg.id }),
        }

        *executed.entry(seg.id).or_default() += seg.end.saturating_sub(seg.start);
        last_end.insert(seg.id, seg.end);
    }

    for process in table.iter() {
        let ran = executed.get(&process.id).copied().unwrap_or(0);
        if ran != process.burst {
            violations.push(AuditViolation::CoverageMismatch {
                id: process.id,
                executed: ran,
                burst: process.burst,
            });
        }
    }

    // ── Metrics report ────────────────────────────────────────────────────────
    let mut seen: BTreeMap<ProcessId, usize> = BTreeMap::new();
    for record in outcome.report.records() {
        *seen.entry(record.id).or_default() += 1;

        let Some(process) = table.get(record.id) else {
            violations.push(AuditViolation::UnknownProcess { id: record.id });
            continue;
        };

        let mismatched = [
            ("arrival", record.arrival != process.arrival),
            ("burst", record.burst != process.burst),
            ("priority", record.priority != process.priority),
            (
                "finish",
                last_end.get(&record.id).copied() != Some(record.finish),
            ),
        ];
        for (field, wrong) in mismatched {
            if wrong {
                violations.push(AuditViolation::RecordMismatch {
                    id: record.id,
                    field,
                });
            }
        }

        let arithmetic_ok = record.finish >= record.arrival
            && record.turnaround == record.finish - record.arrival
            && record.turnaround >= record.burst
            && record.waiting == record.turnaround - record.burst;
        if !arithmetic_ok {
            violations.push(AuditViolation::BadMetrics { id: record.id });
        }
    }

    for process in table.iter() {
        match seen.get(&process.id).copied().unwrap_or(0) {
            0 => violations.push(AuditViolation::MissingRecord { id: process.id }),
            1 => {}
            _ => violations.push(AuditViolation::DuplicateRecord { id: process.id }),
        }
    }

    violations
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::super::Policy;
    use super::*;
    use crate::timeline::{MetricsRecord, MetricsReport, Timeline};
    use pretty_assertions::assert_eq;

    fn two_processes() -> ProcessTable {
        ProcessTable::from_lists(&[0, 1], &[2, 2], None).unwrap()
    }

    fn outcome(timeline: Timeline, report: MetricsReport) -> Outcome {
        Outcome {
            policy: Policy::Fcfs,
            quantum: None,
            timeline,
            report,
        }
    }

    fn consistent() -> (Timeline, MetricsReport) {
        let table = two_processes();
        let mut tl = Timeline::new();
        let mut report = MetricsReport::new();
        tl.push(ProcessId(0), 0, 2);
        report.push(MetricsRecord::new(table.get(ProcessId(0)).unwrap(), 2));
        tl.push(ProcessId(1), 2, 4);
        report.push(MetricsRecord::new(table.get(ProcessId(1)).unwrap(), 4));
        (tl, report)
    }

    #[test]
    fn consistent_outcome_has_no_violations() {
        let (tl, report) = consistent();
        assert!(audit(&two_processes(), &outcome(tl, report)).is_empty());
    }

    #[test]
    fn missing_record_and_short_coverage_are_reported() {
        let table = two_processes();
        let mut tl = Timeline::new();
        let mut report = MetricsReport::new();
        tl.push(ProcessId(0), 0, 2);
        report.push(MetricsRecord::new(table.get(ProcessId(0)).unwrap(), 2));
        tl.push(ProcessId(1), 2, 3);

        let violations = audit(&table, &outcome(tl, report));
        assert_eq!(
            violations,
            vec![
                AuditViolation::CoverageMismatch {
                    id: ProcessId(1),
                    executed: 1,
                    burst: 2
                },
                AuditViolation::MissingRecord { id: ProcessId(1) },
            ]
        );
    }

    #[test]
    fn duplicate_record_is_reported() {
        let table = two_processes();
        let (tl, mut report) = consistent();
        report.push(MetricsRecord::new(table.get(ProcessId(1)).unwrap(), 4));

        let violations = audit(&table, &outcome(tl, report));
        assert!(violations.contains(&AuditViolation::DuplicateRecord { id: ProcessId(1) }));
    }

    #[test]
    fn tampered_record_is_reported() {
        let table = two_processes();
        let (tl, report) = consistent();
        let mut records: Vec<MetricsRecord> = report.records().to_vec();
        records[1].waiting = 7;
        records[0].finish = 3;

        let mut tampered = MetricsReport::new();
        for r in records {
            tampered.push(r);
        }
        let violations = audit(&table, &outcome(tl, tampered));

        assert!(violations.contains(&AuditViolation::BadMetrics { id: ProcessId(1) }));
        assert!(violations.contains(&AuditViolation::RecordMismatch {
            id: ProcessId(0),
            field: "finish"
        }));
    }

    #[test]
    fn display_is_human_readable() {
        let v = AuditViolation::CoverageMismatch {
            id: ProcessId(2),
            executed: 3,
            burst: 5,
        };
        assert_eq!(
            v.to_string(),
            "process C executed for 3 time unit(s) but its burst is 5"
        );
    }
}
