/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! End-to-end checks through the public API: the reference scenarios for
//! each policy plus randomised invariant checks over every policy.

use cpusched::process::{ProcessId, ProcessTable, Time};
use cpusched::scheduler::{audit, simulate, simulate_by_name, Outcome, Policy};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn run(policy: Policy, arrivals: &[i64], bursts: &[i64], quantum: Option<i64>) -> Outcome {
    let table = ProcessTable::from_lists(arrivals, bursts, None).unwrap();
    simulate(policy, &table, quantum).unwrap()
}

fn spans(outcome: &Outcome) -> Vec<(String, Time, Time)> {
    outcome
        .timeline
        .segments()
        .iter()
        .map(|s| (s.id.to_string(), s.start, s.end))
        .collect()
}

fn column(outcome: &Outcome, f: impl Fn(&cpusched::timeline::MetricsRecord) -> Time) -> Vec<Time> {
    outcome.report.sorted_by_id().iter().map(f).collect()
}

fn total_waiting(outcome: &Outcome) -> Time {
    outcome.report.records().iter().map(|r| r.waiting).sum()
}

// ── Reference scenarios ───────────────────────────────────────────────────────

#[test]
fn fcfs_reference_scenario() {
    let o = run(Policy::Fcfs, &[0, 1, 2], &[5, 3, 1], None);
    assert_eq!(column(&o, |r| r.finish), vec![5, 8, 9]);
    assert_eq!(column(&o, |r| r.waiting), vec![0, 4, 6]);
}

#[test]
fn sjf_reference_scenario() {
    let o = run(Policy::Sjf, &[0, 0, 0], &[6, 2, 8], None);
    let order: Vec<String> = o.timeline.segments().iter().map(|s| s.id.to_string()).collect();
    assert_eq!(order, vec!["B", "A", "C"]);
    assert_eq!(column(&o, |r| r.waiting), vec![2, 0, 8]);
}

#[test]
fn round_robin_reference_scenario() {
    let o = run(Policy::RoundRobin, &[0, 1, 2], &[4, 3, 2], Some(2));
    assert_eq!(
        spans(&o),
        vec![
            ("A".into(), 0, 2),
            ("B".into(), 2, 4),
            ("C".into(), 4, 6),
            ("A".into(), 6, 8),
            ("B".into(), 8, 9),
        ]
    );
    assert_eq!(o.timeline.busy_time(), 9);
}

#[test]
fn srtf_reference_scenario() {
    let o = run(Policy::PreemptiveSjf, &[0, 2], &[7, 4], None);
    assert_eq!(
        spans(&o),
        vec![("A".into(), 0, 2), ("B".into(), 2, 6), ("A".into(), 6, 11)]
    );
    assert_eq!(o.report.get(ProcessId(1)).unwrap().finish, 6);
    assert_eq!(o.report.get(ProcessId(0)).unwrap().finish, 11);
}

#[test]
fn preemptive_priority_through_the_named_entry_point() {
    let table = ProcessTable::parse("0 1 2", "4 2 1", Some("3 1 2")).unwrap();
    let o = simulate_by_name("Preemptive Priority", &table, None).unwrap();
    assert_eq!(column(&o, |r| r.finish), vec![7, 3, 4]);
}

#[test]
fn outcome_serialises_with_letter_ids() {
    let o = run(Policy::Fcfs, &[0], &[2], None);
    let yaml = serde_yaml::to_string(&o).unwrap();
    assert!(yaml.contains("policy: FCFS"), "{yaml}");
    assert!(yaml.contains("id: A"), "{yaml}");
}

// ── Randomised invariants ─────────────────────────────────────────────────────

/// Up to 12 processes with small, collision-prone values so ties and idle
/// gaps are common.
fn workload() -> impl Strategy<Value = (Vec<i64>, Vec<i64>, Vec<i64>)> {
    prop::collection::vec((0i64..20, 1i64..10, -3i64..4), 1..12).prop_map(|rows| {
        let arrivals = rows.iter().map(|r| r.0).collect();
        let bursts = rows.iter().map(|r| r.1).collect();
        let priorities = rows.iter().map(|r| r.2).collect();
        (arrivals, bursts, priorities)
    })
}

proptest! {
    #[test]
    fn every_policy_upholds_output_invariants(
        (arrivals, bursts, priorities) in workload(),
        quantum in 1i64..6
    ) {
        let table = ProcessTable::from_lists(&arrivals, &bursts, Some(&priorities)).unwrap();
        for policy in Policy::ALL {
            let outcome = simulate(policy, &table, Some(quantum)).unwrap();
            let violations = audit(&table, &outcome);
            prop_assert!(violations.is_empty(), "{}: {:?}", policy, violations);
            prop_assert_eq!(outcome.report.len(), table.len());
            prop_assert_eq!(outcome.timeline.busy_time(), table.total_burst());
        }
    }

    #[test]
    fn repeated_runs_are_identical(
        (arrivals, bursts, priorities) in workload(),
        quantum in 1i64..6
    ) {
        let table = ProcessTable::from_lists(&arrivals, &bursts, Some(&priorities)).unwrap();
        for policy in Policy::ALL {
            let first = simulate(policy, &table, Some(quantum)).unwrap();
            let second = simulate(policy, &table, Some(quantum)).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn preemptive_fcfs_metrics_equal_fcfs((arrivals, bursts, _) in workload()) {
        let table = ProcessTable::from_lists(&arrivals, &bursts, None).unwrap();
        let plain = simulate(Policy::Fcfs, &table, None).unwrap();
        let split = simulate(Policy::PreemptiveFcfs, &table, None).unwrap();
        prop_assert_eq!(plain.report, split.report);
        prop_assert!(split.timeline.len() >= plain.timeline.len());
    }

    #[test]
    fn round_robin_with_huge_quantum_is_fcfs((arrivals, bursts, _) in workload()) {
        let table = ProcessTable::from_lists(&arrivals, &bursts, None).unwrap();
        let fcfs = simulate(Policy::Fcfs, &table, None).unwrap();
        let rr = simulate(Policy::RoundRobin, &table, Some(1_000)).unwrap();
        prop_assert_eq!(fcfs.timeline, rr.timeline);
        prop_assert_eq!(fcfs.report, rr.report);
    }

    #[test]
    fn srtf_minimises_total_waiting(
        (arrivals, bursts, priorities) in workload(),
        quantum in 1i64..6
    ) {
        let table = ProcessTable::from_lists(&arrivals, &bursts, Some(&priorities)).unwrap();
        let best = total_waiting(&simulate(Policy::PreemptiveSjf, &table, None).unwrap());
        for policy in Policy::ALL {
            let other = total_waiting(&simulate(policy, &table, Some(quantum)).unwrap());
            prop_assert!(best <= other, "SRTF {} > {} {}", best, policy, other);
        }
    }
}
