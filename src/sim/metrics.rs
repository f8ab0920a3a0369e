use average::{Estimate, Mean};
use std::fmt;

use crate::core::{InvalidInput, ProcessRecord, Result};

/// Mean waiting and turnaround time over one completed schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageMetrics {
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
}

impl AverageMetrics {
    pub fn from_records(records: &[ProcessRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(InvalidInput::Empty);
        }

        Ok(Self {
            avg_waiting: avg(records.iter().map(|r| r.waiting_time as f64)),
            avg_turnaround: avg(records.iter().map(|r| r.turnaround_time as f64)),
        })
    }

    /// Both means rounded to two decimal places.
    pub fn rounded(&self) -> (f64, f64) {
        (round2(self.avg_waiting), round2(self.avg_turnaround))
    }
}

impl fmt::Display for AverageMetrics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Average waiting time: {:.2} | Average turnaround time: {:.2}",
            self.avg_waiting, self.avg_turnaround
        )
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
