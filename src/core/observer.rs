use rustc_hash::FxHashMap;

use super::state::{ProcessId, Schedule, Ticks};

/// Cross-checks a finished schedule against the timeline that produced it.
pub fn observe(schedule: &Schedule) {
    for record in &schedule.records {
        let name = record.name();
        debug_assert!(
            record.start_time >= record.process.arrival_time,
            "Process {name} started before it arrived"
        );
        debug_assert_eq!(
            record.turnaround_time,
            record.finish_time - record.process.arrival_time,
            "Process {name} turnaround mismatch"
        );
        debug_assert_eq!(
            record.turnaround_time,
            record.waiting_time + record.process.burst_time,
            "Process {name} violates turnaround == waiting + burst"
        );
    }

    let mut served: FxHashMap<ProcessId, Ticks> = FxHashMap::default();
    let mut cursor: Ticks = 0;
    for slice in &schedule.slices {
        debug_assert!(slice.duration > 0, "Empty slice for {}", slice.name);
        debug_assert!(
            slice.start_time >= cursor,
            "Slice {slice} overlaps the previous slice ending at {cursor}"
        );
        cursor = slice.end_time();
        *served.entry(slice.process).or_default() += slice.duration;
    }

    if schedule.slices.is_empty() {
        return;
    }
    for record in &schedule.records {
        debug_assert_eq!(
            served.get(&record.process.id).copied().unwrap_or(0),
            record.process.burst_time,
            "Slices for {} do not add up to its burst",
            record.name()
        );
    }
}
