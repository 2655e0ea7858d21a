/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Plain-text rendering of a simulation result for the CLI.
//!
//! * [`render_table`] — one row per process, sorted by id, plus averages.
//! * [`render_gantt`] — a horizontal bar per segment, `unit_width`
//!   characters per time unit, with a tick and label at every time unit.

use crate::process::Time;
use crate::timeline::{MetricsReport, Timeline};

/// Widest Gantt chart [`render_gantt`] will draw, in characters.
pub const MAX_CHART_WIDTH: usize = 4096;

const COLUMNS: [&str; 7] = [
    "Job",
    "Arrival",
    "Burst",
    "Priority",
    "Finish",
    "Turnaround",
    "Waiting",
];

/// Render `report` as an aligned text table.
pub fn render_table(report: &MetricsReport) -> String {
    let rows: Vec<[String; 7]> = report
        .sorted_by_id()
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.arrival.to_string(),
                r.burst.to_string(),
                r.priority.to_string(),
                r.finish.to_string(),
                r.turnaround.to_string(),
                r.waiting.to_string(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, COLUMNS.iter().copied(), &widths);
    for row in &rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out.push_str(&format!(
        "Average turnaround: {:.2}\nAverage waiting:    {:.2}\n",
        report.average_turnaround(),
        report.average_waiting()
    ));
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Render `timeline` as a three-line ASCII Gantt chart.
///
/// Line 1 draws each segment as `|--X--|` (idle time stays blank), line 2
/// has a `+` tick at every time unit and line 3 the numeric labels.  A label
/// that would touch the previous one is skipped; its tick is still drawn.
/// `unit_width` below 1 is treated as 1.
///
/// A chart wider than [`MAX_CHART_WIDTH`] is not drawn; a single line
/// saying so is returned instead.
pub fn render_gantt(timeline: &Timeline, unit_width: usize) -> String {
    if timeline.is_empty() {
        return String::new();
    }

    let w = unit_width.max(1);
    let Some((end, len)) = chart_extent(timeline.end_time(), w) else {
        return format!(
            "(Gantt chart omitted: {} time units at {} chars/unit exceed {} columns)\n",
            timeline.end_time(),
            w,
            MAX_CHART_WIDTH
        );
    };

    let mut bar = vec![' '; len];
    for seg in timeline.segments() {
        let (x0, x1) = (seg.start as usize * w, seg.end as usize * w);
        bar[x0] = '|';
        bar[x1] = '|';
        for cell in &mut bar[x0 + 1..x1] {
            *cell = '-';
        }

        let label: Vec<char> = seg.id.to_string().chars().collect();
        let inner = x1 - x0 - 1;
        if label.len() <= inner {
            let at = x0 + 1 + (inner - label.len()) / 2;
            bar[at..at + label.len()].copy_from_slice(&label);
        }
    }

    let mut ticks = vec![' '; len];
    let mut labels = vec![' '; len + end.to_string().len()];
    let mut free_from = 0;
    for t in 0..=end {
        let x = t * w;
        ticks[x] = '+';
        let text: Vec<char> = t.to_string().chars().collect();
        if x >= free_from {
            labels[x..x + text.len()].copy_from_slice(&text);
            free_from = x + text.len() + 1;
        }
    }

    [bar, ticks, labels]
        .iter()
        .map(|line| line.iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}

/// `(end, line length)` of a chart ending at `end_time`, or `None` when it
/// would not fit in [`MAX_CHART_WIDTH`] columns.
fn chart_extent(end_time: Time, unit_width: usize) -> Option<(usize, usize)> {
    let end = usize::try_from(end_time).ok()?;
    let len = end.checked_mul(unit_width)?.checked_add(1)?;
    (len <= MAX_CHART_WIDTH).then_some((end, len))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessTable;
    use crate::scheduler::{simulate, Policy};
    use pretty_assertions::assert_eq;

    fn outcome(policy: Policy, arrivals: &[i64], bursts: &[i64]) -> crate::scheduler::Outcome {
        let table = ProcessTable::from_lists(arrivals, bursts, None).unwrap();
        simulate(policy, &table, Some(2)).unwrap()
    }

    #[test]
    fn gantt_draws_segments_ticks_and_labels() {
        let o = outcome(Policy::Fcfs, &[0, 0], &[2, 1]);
        assert_eq!(
            render_gantt(&o.timeline, 3),
            "|--A--|B-|\n+  +  +  +\n0  1  2  3\n"
        );
    }

    #[test]
    fn gantt_leaves_idle_time_blank() {
        let o = outcome(Policy::Fcfs, &[0, 3], &[1, 1]);
        assert_eq!(
            render_gantt(&o.timeline, 2),
            "|A|   |B|\n+ + + + +\n0 1 2 3 4\n"
        );
    }

    #[test]
    fn gantt_skips_colliding_labels_but_keeps_ticks() {
        let o = outcome(Policy::Fcfs, &[0], &[12]);
        let chart = render_gantt(&o.timeline, 1);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[1], "+".repeat(13));
        // 11 and 12 would touch "10"
        assert_eq!(lines[2], "0 2 4 6 8 10");
    }

    #[test]
    fn gantt_too_wide_is_replaced_by_a_notice() {
        let o = outcome(Policy::Fcfs, &[1i64 << 62], &[1]);
        let chart = render_gantt(&o.timeline, 4);
        assert_eq!(chart.lines().count(), 1);
        assert!(chart.starts_with("(Gantt chart omitted"));
        assert!(chart.contains(&((1u64 << 62) + 1).to_string()));
    }

    #[test]
    fn gantt_width_limit_is_inclusive() {
        // 1023 units * 4 + 1 = 4093 columns fits; 1024 * 4 + 1 does not.
        let fits = outcome(Policy::Fcfs, &[0], &[1023]);
        let first = render_gantt(&fits.timeline, 4);
        assert!(first.lines().next().unwrap().starts_with("|--"));

        let too_wide = outcome(Policy::Fcfs, &[0], &[1024]);
        assert!(render_gantt(&too_wide.timeline, 4).starts_with("(Gantt chart omitted"));
        assert!(render_gantt(&too_wide.timeline, 1).starts_with('|'));
    }

    #[test]
    fn gantt_of_empty_timeline_is_empty() {
        assert_eq!(render_gantt(&Timeline::new(), 4), "");
    }

    #[test]
    fn table_lists_rows_in_id_order_with_averages() {
        let o = outcome(Policy::Sjf, &[0, 0, 0], &[6, 2, 8]);
        let text = render_table(&o.report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0].split_whitespace().collect::<Vec<_>>(),
            COLUMNS.to_vec()
        );
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            vec!["A", "0", "6", "0", "8", "8", "2"]
        );
        assert_eq!(
            lines[2].split_whitespace().collect::<Vec<_>>(),
            vec!["B", "0", "2", "0", "2", "2", "0"]
        );
        assert_eq!(lines[4], "Average turnaround: 8.67");
        assert_eq!(lines[5], "Average waiting:    3.33");
    }
}
