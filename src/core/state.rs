use std::fmt;

pub type Ticks = u64;
// Creation ordinal of a process; doubles as its row in any timeline
pub type ProcessId = usize;
// Index into the working Task Vec (== position in the caller's input)
pub type TaskId = usize;

/// A process descriptor as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: ProcessId,
    pub name: String,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    /// Lower value means more important.
    pub priority: i64,
}

impl Process {
    pub fn new(
        id: ProcessId,
        name: impl Into<String>,
        arrival_time: Ticks,
        burst_time: Ticks,
        priority: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            arrival_time,
            burst_time,
            priority,
        }
    }
}

/// A process together with the metrics one scheduling policy produced for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub process: Process,
    pub start_time: Ticks,
    pub finish_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
}

impl ProcessRecord {
    pub(crate) fn completed(process: Process, start_time: Ticks, finish_time: Ticks) -> Self {
        debug_assert!(
            finish_time >= process.arrival_time + process.burst_time,
            "Process {} finished at {finish_time} before it could have run its burst",
            process.name
        );

        let turnaround_time = finish_time - process.arrival_time;
        let waiting_time = turnaround_time - process.burst_time;
        Self {
            process,
            start_time,
            finish_time,
            waiting_time,
            turnaround_time,
        }
    }

    pub fn name(&self) -> &str {
        &self.process.name
    }
}

/// One contiguous stretch of CPU time given to a single process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSlice {
    pub process: ProcessId,
    pub name: String,
    pub start_time: Ticks,
    pub duration: Ticks,
}

impl ExecutionSlice {
    pub fn end_time(&self) -> Ticks {
        self.start_time + self.duration
    }

    pub fn row(&self) -> usize {
        self.process
    }
}

impl fmt::Display for ExecutionSlice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}[{},{})", self.name, self.start_time, self.end_time())
    }
}

/// Output of one policy run: per-process metrics plus the timeline that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub records: Vec<ProcessRecord>,
    pub slices: Vec<ExecutionSlice>,
}

impl Schedule {
    /// Time at which the last process completes.
    pub fn makespan(&self) -> Ticks {
        self.records
            .iter()
            .map(|r| r.finish_time)
            .max()
            .unwrap_or(0)
    }

    pub fn record(&self, name: &str) -> Option<&ProcessRecord> {
        self.records.iter().find(|r| r.name() == name)
    }
}

/// Mutable per-run working copy of a process.
#[derive(Debug, Clone)]
pub(crate) struct Task {
    pub id: TaskId,
    pub remaining: Ticks,
    pub start_time: Option<Ticks>,
    pub finish_time: Option<Ticks>,
}

impl Task {
    pub fn new(id: TaskId, process: &Process) -> Self {
        Self {
            id,
            remaining: process.burst_time,
            start_time: None,
            finish_time: None,
        }
    }

    // Only the first dispatch counts as the start
    pub fn mark_dispatched(&mut self, now: Ticks) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    // Consume `ticks` of service; returns true once nothing remains
    pub fn consume(&mut self, ticks: Ticks, now: Ticks) -> bool {
        debug_assert!(
            ticks <= self.remaining,
            "Task {} ran {ticks} ticks with only {} remaining",
            self.id,
            self.remaining
        );
        self.remaining -= ticks;
        if self.remaining == 0 {
            self.finish_time = Some(now);
            true
        } else {
            false
        }
    }

    pub fn to_record(&self, process: &Process) -> ProcessRecord {
        let start_time = self.start_time.expect("Completed task was never dispatched");
        let finish_time = self.finish_time.expect("Task has not completed");
        ProcessRecord::completed(process.clone(), start_time, finish_time)
    }
}

// Appends `ticks` of `process` at `start`, merging with the previous slice when contiguous
pub(crate) fn push_slice(
    slices: &mut Vec<ExecutionSlice>,
    process: &Process,
    start: Ticks,
    ticks: Ticks,
) {
    if let Some(last) = slices.last_mut() {
        if last.process == process.id && last.end_time() == start {
            last.duration += ticks;
            return;
        }
    }
    slices.push(ExecutionSlice {
        process: process.id,
        name: process.name.clone(),
        start_time: start,
        duration: ticks,
    });
}
