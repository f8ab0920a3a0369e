use log::info;
use rand::prelude::*;

use super::{config::SimConfig, metrics::AverageMetrics, workload};
use crate::{
    core::{Process, Result, Schedule},
    scheduler::{Policy, validate, validate_quantum},
};

/// Outcome of one policy over the simulation's workload.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyRun {
    pub policy: Policy,
    pub schedule: Schedule,
    pub averages: AverageMetrics,
}

/// Runs every policy over independent copies of one base workload.
#[derive(Debug)]
pub struct Sim {
    workload: Vec<Process>,
    config: SimConfig,
}

impl Sim {
    pub fn new(workload: Vec<Process>, config: SimConfig) -> Result<Self> {
        validate(&workload)?;
        validate_quantum(config.quantum)?;
        Ok(Self { workload, config })
    }

    /// Builds a simulation over a freshly generated random workload.
    pub fn random(config: SimConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let workload = workload::generate(&config.workload, &mut rng)?;
        Self::new(workload, config)
    }

    pub fn workload(&self) -> &[Process] {
        &self.workload
    }

    pub fn run(&self, policy: Policy) -> Result<PolicyRun> {
        let schedule = policy.schedule(&self.workload)?;
        let averages = AverageMetrics::from_records(&schedule.records)?;
        info!(
            "{policy}: makespan {} over {} slices, avg waiting {:.2}, avg turnaround {:.2}",
            schedule.makespan(),
            schedule.slices.len(),
            averages.avg_waiting,
            averages.avg_turnaround
        );

        Ok(PolicyRun {
            policy,
            schedule,
            averages,
        })
    }

    pub fn run_all(&self) -> Result<Vec<PolicyRun>> {
        Policy::all(self.config.quantum)
            .into_iter()
            .map(|policy| self.run(policy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InvalidInput;

    #[test]
    fn runs_all_five_policies() {
        let sim = Sim::random(SimConfig {
            seed: Some(3),
            ..SimConfig::default()
        })
        .unwrap();
        let runs = sim.run_all().unwrap();
        assert_eq!(runs.len(), 5);
        for run in &runs {
            assert_eq!(run.schedule.records.len(), sim.workload().len());
        }
        assert_eq!(runs[4].policy, Policy::RoundRobin { quantum: 2 });
    }

    #[test]
    fn rejects_bad_quantum_before_running() {
        let workload = vec![Process::new(0, "P1", 0, 1, 0)];
        let config = SimConfig {
            quantum: 0,
            ..SimConfig::default()
        };
        assert!(matches!(
            Sim::new(workload, config),
            Err(InvalidInput::ZeroQuantum)
        ));
    }
}
