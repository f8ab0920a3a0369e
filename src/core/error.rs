use std::fmt;

use super::state::Ticks;

/// Rejection of a workload, quantum or setting before any scheduling happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    Empty,
    DuplicateName(String),
    // Two processes claiming the same ordinal (timeline row)
    DuplicateId(usize),
    NegativeArrival(String),
    ZeroBurst(String),
    ZeroQuantum,
    // Latest arrival plus total burst does not fit in Ticks
    TimelineOverflow,
    Malformed {
        line: usize,
        reason: String,
    },
    // More distinct arrivals requested than arrival slots exist
    ArrivalRangeExhausted {
        count: usize,
        slots: Ticks,
    },
    BadSetting {
        name: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, InvalidInput>;

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidInput::Empty => write!(f, "no processes given"),
            InvalidInput::DuplicateName(name) => write!(f, "process name {name} is not unique"),
            InvalidInput::DuplicateId(id) => write!(f, "process ordinal {id} is not unique"),
            InvalidInput::NegativeArrival(name) => {
                write!(f, "process {name} has a negative arrival time")
            }
            InvalidInput::ZeroBurst(name) => write!(f, "process {name} has a zero burst time"),
            InvalidInput::ZeroQuantum => write!(f, "round-robin quantum must be positive"),
            InvalidInput::TimelineOverflow => {
                write!(f, "workload runs past the largest representable tick")
            }
            InvalidInput::Malformed { line, reason } => write!(f, "line {line}: {reason}"),
            InvalidInput::ArrivalRangeExhausted { count, slots } => write!(
                f,
                "cannot draw {count} distinct arrival times from {slots} slots"
            ),
            InvalidInput::BadSetting { name, value } => {
                write!(f, "invalid value {value:?} for {name}")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}
