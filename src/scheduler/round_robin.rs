use log::{debug, trace};

use super::arrival_order;
use crate::core::{Dsq, ExecutionSlice, Process, Schedule, TaskId, Ticks, state::Task};

/// Arrival-ordered cursor over the workload, feeding newly arrived tasks to the ready queue.
struct Arrivals {
    order: Vec<TaskId>,
    cursor: usize,
}

impl Arrivals {
    fn new(processes: &[Process]) -> Self {
        Self {
            order: arrival_order(processes),
            cursor: 0,
        }
    }

    fn next_arrival(&self, processes: &[Process]) -> Option<Ticks> {
        self.order
            .get(self.cursor)
            .map(|&task| processes[task].arrival_time)
    }

    fn admit(&mut self, processes: &[Process], now: Ticks, dsq: &mut Dsq) {
        while let Some(&task) = self.order.get(self.cursor) {
            if processes[task].arrival_time > now {
                break;
            }
            dsq.push_fifo(task);
            self.cursor += 1;
        }
    }
}

/// Round-robin with a fixed quantum. Records come back in arrival order.
pub(crate) fn run(processes: &[Process], quantum: Ticks) -> Schedule {
    debug_assert!(quantum > 0, "Quantum must be validated before scheduling");

    let mut tasks: Vec<Task> = processes
        .iter()
        .enumerate()
        .map(|(id, p)| Task::new(id, p))
        .collect();
    let mut arrivals = Arrivals::new(processes);
    let mut dsq = Dsq::new_fifo();
    let mut slices = Vec::new();
    let mut now: Ticks = 0;

    loop {
        if dsq.is_empty() {
            // CPU idles until the next arrival; nothing left means everything completed
            let Some(next) = arrivals.next_arrival(processes) else {
                break;
            };
            now = now.max(next);
            arrivals.admit(processes, now, &mut dsq);
        }

        let id = dsq.pop().expect("Ready queue empty after admitting arrivals");
        let process = &processes[id];
        let task = &mut tasks[id];
        task.mark_dispatched(now);

        let exec = quantum.min(task.remaining);
        trace!("RR: t={now} run {} for {exec}", process.name);
        // Back-to-back quanta of one task stay separate slices on this timeline
        slices.push(ExecutionSlice {
            process: process.id,
            name: process.name.clone(),
            start_time: now,
            duration: exec,
        });
        now += exec;
        let finished = task.consume(exec, now);

        // Tasks that arrived during this slice queue up ahead of the preempted one
        arrivals.admit(processes, now, &mut dsq);
        if finished {
            debug!("RR: t={now} {} completed", process.name);
        } else {
            dsq.push_fifo(id);
        }
    }

    let records = arrivals
        .order
        .iter()
        .map(|&id| tasks[id].to_record(&processes[id]))
        .collect();

    Schedule { records, slices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline(schedule: &Schedule) -> Vec<String> {
        schedule.slices.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn arrivals_queue_ahead_of_preempted_task() {
        let processes = vec![
            Process::new(0, "P1", 0, 5, 2),
            Process::new(1, "P2", 1, 3, 1),
            Process::new(2, "P3", 2, 1, 3),
        ];
        let schedule = run(&processes, 2);
        assert_eq!(
            timeline(&schedule),
            ["P1[0,2)", "P2[2,4)", "P3[4,5)", "P1[5,7)", "P2[7,8)", "P1[8,9)"]
        );

        let metrics: Vec<_> = schedule
            .records
            .iter()
            .map(|r| (r.name(), r.start_time, r.finish_time, r.waiting_time))
            .collect();
        assert_eq!(
            metrics,
            vec![("P1", 0, 9, 4), ("P2", 2, 8, 4), ("P3", 4, 5, 2)]
        );
    }

    #[test]
    fn lone_task_gets_consecutive_quanta() {
        let processes = vec![Process::new(0, "P1", 0, 5, 0)];
        let schedule = run(&processes, 2);
        assert_eq!(timeline(&schedule), ["P1[0,2)", "P1[2,4)", "P1[4,5)"]);
        assert_eq!(schedule.records[0].finish_time, 5);
    }

    #[test]
    fn idle_gap_between_arrivals() {
        let processes = vec![
            Process::new(0, "P1", 1, 1, 0),
            Process::new(1, "P2", 6, 3, 0),
            Process::new(2, "P3", 6, 1, 0),
        ];
        let schedule = run(&processes, 2);
        assert_eq!(
            timeline(&schedule),
            ["P1[1,2)", "P2[6,8)", "P3[8,9)", "P2[9,10)"]
        );
    }

    #[test]
    fn records_come_back_in_arrival_order() {
        let processes = vec![
            Process::new(0, "late", 5, 1, 0),
            Process::new(1, "early", 0, 1, 0),
            Process::new(2, "tied", 5, 1, 0),
        ];
        let names: Vec<_> = run(&processes, 3)
            .records
            .iter()
            .map(|r| r.name().to_owned())
            .collect();
        assert_eq!(names, ["early", "late", "tied"]);
    }

    #[test]
    fn large_quantum_degenerates_to_fifo() {
        let processes = vec![
            Process::new(0, "P1", 0, 5, 2),
            Process::new(1, "P2", 1, 3, 1),
            Process::new(2, "P3", 2, 1, 3),
        ];
        let schedule = run(&processes, 100);
        assert_eq!(timeline(&schedule), ["P1[0,5)", "P2[5,8)", "P3[8,9)"]);
    }
}
