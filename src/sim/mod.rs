pub mod config;
pub mod driver;
pub mod metrics;
pub mod report;
pub mod workload;

pub use config::SimConfig;
pub use driver::{PolicyRun, Sim};
pub use metrics::AverageMetrics;
pub use workload::{WorkloadConfig, generate, parse_workload};
