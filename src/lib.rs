pub mod core;
pub mod scheduler;
pub mod sim;

pub use crate::core::{ExecutionSlice, InvalidInput, Process, ProcessRecord, Schedule, Ticks};
pub use scheduler::{Policy, fifo, priority, round_robin, sjf, srtf};
pub use sim::{AverageMetrics, PolicyRun, Sim, SimConfig};
