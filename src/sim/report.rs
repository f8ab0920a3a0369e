//! Plain-text rendering of schedules: a metrics table and a per-process timeline.

use super::driver::PolicyRun;
use crate::core::{ProcessRecord, Schedule, Ticks};

const HEADERS: [&str; 8] = [
    "Name", "Arrival", "Burst", "Priority", "Start", "Finish", "Waiting", "Turnaround",
];

pub fn render_table(records: &[ProcessRecord]) -> String {
    let rows: Vec<[String; 8]> = records
        .iter()
        .map(|r| {
            [
                r.name().to_owned(),
                r.process.arrival_time.to_string(),
                r.process.burst_time.to_string(),
                r.process.priority.to_string(),
                r.start_time.to_string(),
                r.finish_time.to_string(),
                r.waiting_time.to_string(),
                r.turnaround_time.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, HEADERS.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

/// Widest timeline `render_gantt` draws, in columns.
pub const MAX_CHART_WIDTH: Ticks = 80;

/// One row per process (ordered by its ordinal), one column per tick.
///
/// Timelines longer than [`MAX_CHART_WIDTH`] ticks are scaled down: each column then
/// covers a fixed run of ticks and is marked if the process ran at any point in it. The
/// axis numbers columns instead of ticks and names the scale.
pub fn render_gantt(schedule: &Schedule) -> String {
    let makespan = schedule.makespan();
    let ticks_per_column = makespan.div_ceil(MAX_CHART_WIDTH).max(1);
    let columns = makespan.div_ceil(ticks_per_column) as usize;
    let mut rows: Vec<(usize, &str)> = schedule
        .records
        .iter()
        .map(|r| (r.process.id, r.name()))
        .collect();
    rows.sort_unstable();
    let label_width = rows.iter().map(|(_, name)| name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (row, name) in rows {
        let mut lane = vec!['.'; columns];
        for slice in schedule.slices.iter().filter(|s| s.row() == row) {
            let first = (slice.start_time / ticks_per_column) as usize;
            let last = ((slice.end_time() - 1) / ticks_per_column) as usize;
            for cell in &mut lane[first..=last] {
                *cell = '#';
            }
        }
        let lane: String = lane.into_iter().collect();
        out.push_str(&format!("{name:>label_width$} |{lane}|\n"));
    }

    let axis: String = (0..columns)
        .map(|c| char::from_digit((c % 10) as u32, 10).unwrap_or('?'))
        .collect();
    out.push_str(&format!("{:>label_width$}  {axis}", "t"));
    if ticks_per_column > 1 {
        out.push_str(&format!(" (1 column = {ticks_per_column} ticks)"));
    }
    out.push('\n');
    out
}

pub fn render_run(run: &PolicyRun) -> String {
    let mut out = format!("== {} ==\n", run.policy);
    out.push_str(&render_table(&run.schedule.records));
    out.push_str(&format!("{}\n\n", run.averages));
    out.push_str(&render_gantt(&run.schedule));
    out
}
