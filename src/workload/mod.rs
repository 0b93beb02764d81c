// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/workload/mod.rs
// Version: 1.0.0
//
// This file declares the workload module and the shared program entry point
// used by every binary under src/bin/: parse SIZE, set up logging, run the
// workload on the worker pool and turn the outcome into an exit status.
//
// Tree Location:
// - src/workload/mod.rs (workload dispatch and program entry point)
// - Submodules: cpu, ram, disk

pub mod cpu;
pub mod disk;
pub mod ram;

pub use cpu::{cpu_multiplication, cpu_trigonometry, typical_cpu};
pub use disk::{DISK_WRITE_DIRECTORY, disk_write};
pub use ram::{ram_bandwidth_copy, typical_ram_bandwidth};

use crate::core::{RuntimeConfig, Verdict, Workload, WorkloadArgs, WorkloadError};
use crate::utils::format::FormatUtils;
use crate::utils::logging::init_logging;
use crate::worker::WorkerPool;
use log::{LevelFilter, error, info};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

const LOG_TARGET: &str = "bottlenecks::workload";

impl Workload {
    /// Run the workload at `size` on `pool`
    pub fn run(self, size: u64, pool: &WorkerPool) -> Result<Verdict, WorkloadError> {
        match self {
            Workload::CpuMultiplication => cpu_multiplication(size, pool),
            Workload::CpuTrigonometry => cpu_trigonometry(size, pool),
            Workload::RamBandwidthCopy => ram_bandwidth_copy(size, pool),
            Workload::DiskWrite => disk_write(size, Path::new(DISK_WRITE_DIRECTORY), pool),
            Workload::Cpu => typical_cpu(size, pool),
            Workload::RamBandwidth => typical_ram_bandwidth(size, pool),
        }
    }
}

/// Entry point of a workload program.
///
/// Usage errors and workload errors exit with status 1; `--help` and
/// `--version` exit with status 0.
pub fn run_program(workload: Workload) -> ExitCode {
    let args = match WorkloadArgs::try_parse_for(workload) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = RuntimeConfig::from_env(LevelFilter::Warn);
    if let Err(e) = init_logging(&config) {
        eprintln!("{}: logging disabled: {:#}", workload.name(), e);
    }
    config.log_warnings();

    let pool = WorkerPool::from_config(&config);
    info!(target: LOG_TARGET,
        "Running {} with SIZE={} on {} threads",
        workload.name(), args.size, pool.thread_count()
    );

    let start = Instant::now();
    match workload.run(args.size, &pool) {
        Ok(verdict) => {
            info!(target: LOG_TARGET,
                "{} finished in {}: {:?}",
                workload.name(),
                FormatUtils::format_seconds(start.elapsed()),
                verdict
            );
            verdict.exit_code()
        }
        Err(e) => {
            error!(target: LOG_TARGET, "{}: {}", workload.name(), FormatUtils::format_error_chain(&e));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_runs_each_cpu_workload() {
        let pool = WorkerPool::new(2);
        assert_eq!(Workload::CpuMultiplication.run(0, &pool).unwrap(), Verdict::Passed);
        assert_eq!(Workload::CpuTrigonometry.run(0, &pool).unwrap(), Verdict::Passed);
        assert_eq!(Workload::RamBandwidthCopy.run(0, &pool).unwrap(), Verdict::Failed);
    }

    #[test]
    fn test_dispatch_validates_typical_range() {
        let pool = WorkerPool::new(1);
        assert!(Workload::Cpu.run(0, &pool).is_err());
        assert!(Workload::RamBandwidth.run(4096, &pool).is_err());
    }
}
