pub mod dsq;
pub mod error;
pub mod observer;
pub mod state;

pub use dsq::{Dsq, Rank};
pub use error::{InvalidInput, Result};
pub use observer::observe;
pub use state::{ExecutionSlice, Process, ProcessId, ProcessRecord, Schedule, TaskId, Ticks};
