mod logger;

use clap::Parser;
use cpu_sched_sim::{
    Sim, SimConfig, Ticks,
    sim::{parse_workload, report},
};
use log::info;
use std::{error::Error, fs, path::PathBuf};

/// Runs FIFO, SJF, Priority, SRTF and Round Robin over one workload and compares them.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Workload file with `name arrival burst [priority]` lines; random when omitted
    workload: Option<PathBuf>,

    /// Round-robin time quantum
    #[arg(short, long, env = "QUANTUM")]
    quantum: Option<Ticks>,

    /// Number of processes in a generated workload
    #[arg(short, long, env = "PROCESSES")]
    processes: Option<usize>,

    /// Seed for the workload generator
    #[arg(short, long, env = "SEED")]
    seed: Option<u64>,
}

impl Args {
    fn sim_config(&self) -> SimConfig {
        let mut config = SimConfig {
            seed: self.seed,
            ..SimConfig::default()
        };
        if let Some(quantum) = self.quantum {
            config.quantum = quantum;
        }
        if let Some(count) = self.processes {
            config.workload.count = count;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();

    let args = Args::parse();
    let config = args.sim_config();
    let sim = match &args.workload {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            info!("Loaded workload from {}", path.display());
            Sim::new(parse_workload(&text)?, config)?
        }
        None => Sim::random(config)?,
    };

    println!("Workload:");
    for process in sim.workload() {
        println!(
            "  {} arrival={} burst={} priority={}",
            process.name, process.arrival_time, process.burst_time, process.priority
        );
    }
    println!();

    for run in sim.run_all()? {
        println!("{}", report::render_run(&run));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args =
            Args::try_parse_from(["cpu_sched_sim", "-q", "4", "--seed", "99", "jobs.txt"]).unwrap();
        assert_eq!(args.workload, Some(PathBuf::from("jobs.txt")));
        let config = args.sim_config();
        assert_eq!(config.quantum, 4);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.workload.count, 5);
    }

    #[test]
    fn process_count_sizes_generated_workload() {
        let args = Args::try_parse_from(["cpu_sched_sim", "--processes", "8"]).unwrap();
        assert_eq!(args.workload, None);
        assert_eq!(args.sim_config().workload.count, 8);
    }

    #[test]
    fn unparsable_flag_is_rejected() {
        assert!(Args::try_parse_from(["cpu_sched_sim", "--processes", "many"]).is_err());
        assert!(Args::try_parse_from(["cpu_sched_sim", "--quantum", "-1"]).is_err());
    }
}
