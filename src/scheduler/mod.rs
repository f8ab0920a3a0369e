pub mod nonpreemptive;
pub mod round_robin;
pub mod srtf;
pub mod validate;

use std::fmt;

use crate::core::{
    ExecutionSlice, Process, ProcessRecord, Result, Schedule, TaskId, Ticks, observe,
};
pub use nonpreemptive::Selection;
pub use validate::{validate, validate_quantum};

pub const DEFAULT_QUANTUM: Ticks = 2;

/// The scheduling policies this crate simulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fifo,
    Sjf,
    Priority,
    Srtf,
    RoundRobin { quantum: Ticks },
}

impl Policy {
    pub fn all(quantum: Ticks) -> [Policy; 5] {
        [
            Policy::Fifo,
            Policy::Sjf,
            Policy::Priority,
            Policy::Srtf,
            Policy::RoundRobin { quantum },
        ]
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::Srtf | Policy::RoundRobin { .. })
    }

    /// Validates `processes` and simulates this policy over a private copy of them.
    pub fn schedule(&self, processes: &[Process]) -> Result<Schedule> {
        validate(processes)?;
        let schedule = match *self {
            Policy::Fifo => nonpreemptive::run(processes, Selection::EarliestArrival),
            Policy::Sjf => nonpreemptive::run(processes, Selection::ShortestBurst),
            Policy::Priority => nonpreemptive::run(processes, Selection::LowestPriority),
            Policy::Srtf => srtf::run(processes),
            Policy::RoundRobin { quantum } => {
                validate_quantum(quantum)?;
                round_robin::run(processes, quantum)
            }
        };
        observe(&schedule);
        Ok(schedule)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Policy::Fifo => write!(f, "FIFO"),
            Policy::Sjf => write!(f, "SJF"),
            Policy::Priority => write!(f, "Priority"),
            Policy::Srtf => write!(f, "SRTF"),
            Policy::RoundRobin { quantum } => write!(f, "Round Robin (quantum = {quantum})"),
        }
    }
}

/// First-come-first-served. Records in completion order.
pub fn fifo(processes: &[Process]) -> Result<Vec<ProcessRecord>> {
    Policy::Fifo.schedule(processes).map(|s| s.records)
}

/// Non-preemptive shortest-job-first. Records in completion order.
pub fn sjf(processes: &[Process]) -> Result<Vec<ProcessRecord>> {
    Policy::Sjf.schedule(processes).map(|s| s.records)
}

/// Non-preemptive static priority, lower value first. Records in completion order.
pub fn priority(processes: &[Process]) -> Result<Vec<ProcessRecord>> {
    Policy::Priority.schedule(processes).map(|s| s.records)
}

/// Shortest-remaining-time-first. Records in input order.
pub fn srtf(processes: &[Process]) -> Result<Vec<ProcessRecord>> {
    Policy::Srtf.schedule(processes).map(|s| s.records)
}

/// Round-robin. Records in arrival order, slices in chronological order.
pub fn round_robin(
    processes: &[Process],
    quantum: Ticks,
) -> Result<(Vec<ProcessRecord>, Vec<ExecutionSlice>)> {
    Policy::RoundRobin { quantum }
        .schedule(processes)
        .map(|s| (s.records, s.slices))
}

// Input indices sorted by arrival; equal arrivals keep input order
pub(crate) fn arrival_order(processes: &[Process]) -> Vec<TaskId> {
    let mut order: Vec<TaskId> = (0..processes.len()).collect();
    order.sort_by_key(|&task| processes[task].arrival_time);
    order
}
