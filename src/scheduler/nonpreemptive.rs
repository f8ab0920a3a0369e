use log::debug;

use super::arrival_order;
use crate::core::{
    Dsq, Process, ProcessRecord, Rank, Schedule, TaskId, Ticks, state::push_slice,
};

/// Rule used to pick the next process among those that have arrived.
///
/// Ties always go to the process that comes first in the caller's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    EarliestArrival,
    ShortestBurst,
    LowestPriority,
}

impl Selection {
    fn ready_queue(self) -> Dsq {
        match self {
            // Arrivals are admitted in (arrival, input) order, so a plain queue suffices
            Selection::EarliestArrival => Dsq::new_fifo(),
            Selection::ShortestBurst | Selection::LowestPriority => Dsq::new_priq(),
        }
    }

    fn enqueue(self, dsq: &mut Dsq, task: TaskId, process: &Process) {
        match self {
            Selection::EarliestArrival => dsq.push_fifo(task),
            Selection::ShortestBurst => dsq.push_ranked(Rank::new(process.burst_time, task)),
            Selection::LowestPriority => dsq.push_ranked(Rank::new(process.priority, task)),
        }
    }
}

/// Runs each selected process to completion. Records come back in completion order.
pub(crate) fn run(processes: &[Process], selection: Selection) -> Schedule {
    let order = arrival_order(processes);
    let mut dsq = selection.ready_queue();
    let mut cursor = 0;
    let mut now: Ticks = 0;
    let mut records = Vec::with_capacity(processes.len());
    let mut slices = Vec::with_capacity(processes.len());

    while records.len() < processes.len() {
        // CPU idles until the next arrival
        if dsq.is_empty() {
            now = now.max(processes[order[cursor]].arrival_time);
        }

        while cursor < order.len() && processes[order[cursor]].arrival_time <= now {
            let task = order[cursor];
            selection.enqueue(&mut dsq, task, &processes[task]);
            cursor += 1;
        }

        let task = dsq
            .pop()
            .expect("Ready queue empty after admitting the next arrival");
        let process = &processes[task];
        let start = now;
        let finish = start + process.burst_time;
        debug!(
            "{selection:?}: t={start} dispatch {} until {finish} ({} waiting)",
            process.name,
            dsq.len()
        );

        push_slice(&mut slices, process, start, process.burst_time);
        records.push(ProcessRecord::completed(process.clone(), start, finish));
        now = finish;
    }

    Schedule { records, slices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workload() -> Vec<Process> {
        vec![
            Process::new(0, "P1", 0, 5, 2),
            Process::new(1, "P2", 1, 3, 1),
            Process::new(2, "P3", 2, 1, 3),
        ]
    }

    fn summary(schedule: &Schedule) -> Vec<(&str, Ticks, Ticks)> {
        schedule
            .records
            .iter()
            .map(|r| (r.name(), r.start_time, r.finish_time))
            .collect()
    }

    #[test]
    fn earliest_arrival_runs_in_arrival_order() {
        let schedule = run(&workload(), Selection::EarliestArrival);
        assert_eq!(
            summary(&schedule),
            vec![("P1", 0, 5), ("P2", 5, 8), ("P3", 8, 9)]
        );
    }

    #[test]
    fn shortest_burst_picks_among_arrived_only() {
        let schedule = run(&workload(), Selection::ShortestBurst);
        assert_eq!(
            summary(&schedule),
            vec![("P1", 0, 5), ("P3", 5, 6), ("P2", 6, 9)]
        );
    }

    #[test]
    fn lowest_priority_value_wins() {
        let schedule = run(&workload(), Selection::LowestPriority);
        assert_eq!(
            summary(&schedule),
            vec![("P1", 0, 5), ("P2", 5, 8), ("P3", 8, 9)]
        );
    }

    #[test]
    fn idle_gap_jumps_to_next_arrival() {
        let processes = vec![
            Process::new(0, "P1", 3, 2, 0),
            Process::new(1, "P2", 10, 1, 0),
        ];
        let schedule = run(&processes, Selection::ShortestBurst);
        assert_eq!(summary(&schedule), vec![("P1", 3, 5), ("P2", 10, 11)]);
        assert!(schedule.records.iter().all(|r| r.waiting_time == 0));
    }

    #[test]
    fn ties_go_to_input_order() {
        let processes = vec![
            Process::new(0, "A", 0, 2, 1),
            Process::new(1, "B", 0, 2, 1),
            Process::new(2, "C", 0, 2, 1),
        ];
        for selection in [
            Selection::EarliestArrival,
            Selection::ShortestBurst,
            Selection::LowestPriority,
        ] {
            let names: Vec<_> = run(&processes, selection)
                .records
                .iter()
                .map(|r| r.name().to_owned())
                .collect();
            assert_eq!(names, ["A", "B", "C"], "{selection:?}");
        }
    }

    #[test]
    fn fifo_does_not_assume_sorted_input() {
        let processes = vec![
            Process::new(0, "late", 4, 1, 0),
            Process::new(1, "early", 0, 2, 0),
        ];
        let schedule = run(&processes, Selection::EarliestArrival);
        assert_eq!(summary(&schedule), vec![("early", 0, 2), ("late", 4, 5)]);
    }
}
