use super::workload::WorkloadConfig;
use crate::core::Ticks;
use crate::scheduler::DEFAULT_QUANTUM;

/// Settings for a full multi-policy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub quantum: Ticks,
    pub workload: WorkloadConfig,
    // None draws a fresh seed from the OS
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            workload: WorkloadConfig::default(),
            seed: None,
        }
    }
}
