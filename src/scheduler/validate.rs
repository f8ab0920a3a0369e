use rustc_hash::FxHashSet;

use crate::core::{InvalidInput, Process, Result, Ticks};

/// Rejects workloads no policy can schedule. Runs before any working state exists.
pub fn validate(processes: &[Process]) -> Result<()> {
    if processes.is_empty() {
        return Err(InvalidInput::Empty);
    }

    let mut names = FxHashSet::default();
    let mut ids = FxHashSet::default();
    let mut latest_arrival: Ticks = 0;
    let mut total_burst: Ticks = 0;
    for process in processes {
        if !names.insert(process.name.as_str()) {
            return Err(InvalidInput::DuplicateName(process.name.clone()));
        }
        if !ids.insert(process.id) {
            return Err(InvalidInput::DuplicateId(process.id));
        }
        if process.burst_time == 0 {
            return Err(InvalidInput::ZeroBurst(process.name.clone()));
        }
        latest_arrival = latest_arrival.max(process.arrival_time);
        total_burst = total_burst
            .checked_add(process.burst_time)
            .ok_or(InvalidInput::TimelineOverflow)?;
    }

    // No policy idles while work is ready, so every finish time is within this horizon
    latest_arrival
        .checked_add(total_burst)
        .ok_or(InvalidInput::TimelineOverflow)?;

    Ok(())
}

pub fn validate_quantum(quantum: Ticks) -> Result<()> {
    if quantum == 0 {
        return Err(InvalidInput::ZeroQuantum);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_workload() {
        assert_eq!(validate(&[]), Err(InvalidInput::Empty));
    }

    #[test]
    fn rejects_duplicate_names() {
        let processes = vec![Process::new(0, "A", 0, 1, 0), Process::new(1, "A", 2, 1, 0)];
        assert_eq!(
            validate(&processes),
            Err(InvalidInput::DuplicateName("A".to_owned()))
        );
    }

    #[test]
    fn rejects_duplicate_ordinals() {
        let processes = vec![Process::new(3, "A", 0, 1, 0), Process::new(3, "B", 2, 1, 0)];
        assert_eq!(validate(&processes), Err(InvalidInput::DuplicateId(3)));
    }

    #[test]
    fn rejects_zero_burst() {
        let processes = vec![Process::new(0, "A", 0, 1, 0), Process::new(1, "B", 2, 0, 0)];
        assert_eq!(
            validate(&processes),
            Err(InvalidInput::ZeroBurst("B".to_owned()))
        );
    }

    #[test]
    fn rejects_timelines_past_the_tick_range() {
        let late = vec![Process::new(0, "A", Ticks::MAX, 1, 0)];
        assert_eq!(validate(&late), Err(InvalidInput::TimelineOverflow));

        let long = vec![
            Process::new(0, "A", 0, Ticks::MAX / 2 + 1, 0),
            Process::new(1, "B", 0, Ticks::MAX / 2 + 1, 0),
        ];
        assert_eq!(validate(&long), Err(InvalidInput::TimelineOverflow));

        let edge = vec![Process::new(0, "A", Ticks::MAX - 3, 3, 0)];
        assert!(validate(&edge).is_ok());
    }

    #[test]
    fn quantum_must_be_positive() {
        assert_eq!(validate_quantum(0), Err(InvalidInput::ZeroQuantum));
        assert!(validate_quantum(1).is_ok());
    }
}
