use log::{debug, trace};

use super::arrival_order;
use crate::core::{Dsq, Process, Rank, Schedule, Ticks, state::Task, state::push_slice};

/// Shortest-remaining-time-first.
///
/// At every tick the arrived task with the least remaining service runs; a newly arrived
/// shorter task therefore preempts the current one at the next tick boundary. Ties go to
/// the task that comes first in the input. Records come back in input order.
///
/// The running task only shrinks while the others stand still, so the choice can only
/// change when something arrives. Each dispatch therefore runs up to the next arrival or
/// completion, and idle gaps jump straight to the next arrival.
pub(crate) fn run(processes: &[Process]) -> Schedule {
    let order = arrival_order(processes);
    let mut tasks: Vec<Task> = processes
        .iter()
        .enumerate()
        .map(|(id, p)| Task::new(id, p))
        .collect();
    let mut dsq = Dsq::new_priq();
    let mut slices = Vec::new();
    let mut cursor = 0;
    let mut completed = 0;
    let mut now: Ticks = 0;
    let mut previous = None;

    while completed < tasks.len() {
        while cursor < order.len() && processes[order[cursor]].arrival_time <= now {
            let task = &tasks[order[cursor]];
            dsq.push_ranked(Rank::new(task.remaining, task.id));
            cursor += 1;
        }

        let next_arrival = order
            .get(cursor)
            .map(|&task| processes[task].arrival_time);
        let Some(id) = dsq.pop() else {
            let next = next_arrival.expect("Idle SRTF with nothing left to arrive");
            trace!("SRTF: t={now} idle until {next}");
            now = next;
            continue;
        };

        let process = &processes[id];
        if previous != Some(id) {
            debug!("SRTF: t={now} switch to {}", process.name);
            previous = Some(id);
        }

        let task = &mut tasks[id];
        task.mark_dispatched(now);
        let exec = match next_arrival {
            Some(next) => task.remaining.min(next - now),
            None => task.remaining,
        };
        push_slice(&mut slices, process, now, exec);
        now += exec;

        if task.consume(exec, now) {
            debug!("SRTF: t={now} {} completed", process.name);
            completed += 1;
        } else {
            dsq.push_ranked(Rank::new(task.remaining, id));
        }
    }

    let records = tasks
        .iter()
        .zip(processes)
        .map(|(task, process)| task.to_record(process))
        .collect();

    Schedule { records, slices }
}
