use rand::prelude::*;
use rustc_hash::FxHashSet;

use crate::core::{InvalidInput, Process, Result, Ticks};
use crate::scheduler::validate;

/// Shape of a randomly generated workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadConfig {
    pub count: usize,
    pub max_arrival: Ticks,
    pub max_burst: Ticks,
    pub max_priority: i64,
    pub distinct_arrivals: bool,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            max_burst: 5,
            max_priority: 3,
            distinct_arrivals: true,
        }
    }
}

/// Draws `config.count` processes named `P1..Pn`.
///
/// Arrival is uniform in `0..=max_arrival` (without repeats when `distinct_arrivals`),
/// burst in `1..=max_burst` and priority in `1..=max_priority`.
pub fn generate(config: &WorkloadConfig, rng: &mut impl Rng) -> Result<Vec<Process>> {
    if config.count == 0 {
        return Err(InvalidInput::Empty);
    }
    if config.max_burst == 0 {
        return Err(InvalidInput::BadSetting {
            name: "max_burst",
            value: config.max_burst.to_string(),
        });
    }
    if config.max_priority < 1 {
        return Err(InvalidInput::BadSetting {
            name: "max_priority",
            value: config.max_priority.to_string(),
        });
    }
    let slots = config.max_arrival.saturating_add(1);
    if config.distinct_arrivals && config.count as u64 > slots {
        return Err(InvalidInput::ArrivalRangeExhausted {
            count: config.count,
            slots,
        });
    }

    let mut seen = FxHashSet::default();
    let mut processes = Vec::with_capacity(config.count);
    for id in 0..config.count {
        let arrival = loop {
            let arrival = rng.random_range(0..=config.max_arrival);
            if !config.distinct_arrivals || seen.insert(arrival) {
                break arrival;
            }
        };
        let burst = rng.random_range(1..=config.max_burst);
        let priority = rng.random_range(1..=config.max_priority);
        processes.push(Process::new(id, format!("P{}", id + 1), arrival, burst, priority));
    }

    Ok(processes)
}

/// Parses one process per line: `arrival burst priority` or `name arrival burst priority`.
///
/// Blank lines and lines starting with `#` are skipped. Unnamed processes are called
/// `P<n>` after their position among the parsed processes.
pub fn parse_workload(text: &str) -> Result<Vec<Process>> {
    let mut processes = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let id = processes.len();
        let (name, numbers) = match fields.len() {
            3 => (format!("P{}", id + 1), &fields[..]),
            4 => (fields[0].to_owned(), &fields[1..]),
            n => {
                return Err(InvalidInput::Malformed {
                    line: line_no,
                    reason: format!("expected 3 or 4 fields, found {n}"),
                });
            }
        };

        let arrival = parse_field(numbers[0], "arrival", line_no)?;
        let burst = parse_field(numbers[1], "burst", line_no)?;
        let priority = parse_field(numbers[2], "priority", line_no)?;

        if arrival < 0 {
            return Err(InvalidInput::NegativeArrival(name));
        }
        if burst <= 0 {
            return Err(InvalidInput::ZeroBurst(name));
        }

        processes.push(Process::new(
            id,
            name,
            arrival as Ticks,
            burst as Ticks,
            priority,
        ));
    }

    validate(&processes)?;
    Ok(processes)
}

fn parse_field(field: &str, what: &str, line: usize) -> Result<i64> {
    field.parse().map_err(|_| InvalidInput::Malformed {
        line,
        reason: format!("{what} {field:?} is not an integer"),
    })
}
