// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.0.0
//
// This file defines core data structures for bottlenecks: the catalogue of
// workloads, the command-line arguments of the workload programs and of the
// calibration driver, and the pass/fail verdict a workload returns.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap

use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// The micro-benchmark workloads, one executable each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Workload {
    /// Branch-guarded floating-point multiplication
    CpuMultiplication,
    /// acos(cos(x)) over a dense index range
    CpuTrigonometry,
    /// STREAM-style copy with a final check
    RamBandwidthCopy,
    /// Write then delete 1000 files in build/
    DiskWrite,
    /// Multiplication behind an optimisation barrier, strict multiplier range
    Cpu,
    /// STREAM-style copy, strict multiplier range, no check
    RamBandwidth,
}

impl Workload {
    pub const ALL: [Workload; 6] = [
        Workload::CpuMultiplication,
        Workload::CpuTrigonometry,
        Workload::RamBandwidthCopy,
        Workload::DiskWrite,
        Workload::Cpu,
        Workload::RamBandwidth,
    ];

    /// Executable name
    pub const fn name(self) -> &'static str {
        match self {
            Workload::CpuMultiplication => "cpu-multiplication",
            Workload::CpuTrigonometry => "cpu-trigonometry",
            Workload::RamBandwidthCopy => "ram-bandwidth-copy",
            Workload::DiskWrite => "disk-write",
            Workload::Cpu => "cpu",
            Workload::RamBandwidth => "ram-bandwidth",
        }
    }

    pub const fn about(self) -> &'static str {
        match self {
            Workload::CpuMultiplication => {
                "CPU floating-point throughput: 1024 parallel chains of 1024 * SIZE multiplications"
            }
            Workload::CpuTrigonometry => {
                "CPU transcendental throughput: 1024 parallel rows of 1024 * SIZE acos(cos(x))"
            }
            Workload::RamBandwidthCopy => {
                "RAM bandwidth: 100 parallel copies of SIZE MiElements of 32-bit integers, checked"
            }
            Workload::DiskWrite => {
                "Disk throughput: write then delete 1000 files of SIZE bytes in build/"
            }
            Workload::Cpu => {
                "Typical CPU load: 1024 parallel chains of 1024 * 1024 * SIZE multiplications (SIZE in 1..=1024)"
            }
            Workload::RamBandwidth => {
                "Typical RAM load: 100 parallel copies of SIZE MiElements of 32-bit integers (SIZE in 1..=1024)"
            }
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|workload| workload.name() == name)
    }
}

/// Outcome of a workload that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
}

impl Verdict {
    pub fn from_check(ok: bool) -> Self {
        if ok { Verdict::Passed } else { Verdict::Failed }
    }

    pub fn exit_code(self) -> ExitCode {
        match self {
            Verdict::Passed => ExitCode::SUCCESS,
            Verdict::Failed => ExitCode::FAILURE,
        }
    }
}

/// Command-line arguments shared by every workload program
#[derive(Parser, Debug)]
#[command(version)]
pub struct WorkloadArgs {
    /// Sizing argument; each workload scales it differently
    /// Non-numeric or negative values are rejected
    #[arg(value_name = "SIZE", help = "Workload size (non-negative integer)")]
    pub size: u64,
}

impl WorkloadArgs {
    /// Parse the process arguments under the workload's own name and description
    pub fn try_parse_for(workload: Workload) -> Result<Self, clap::Error> {
        Self::try_parse_from_for(workload, std::env::args_os())
    }

    pub fn try_parse_from_for<I, T>(workload: Workload, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command()
            .name(workload.name())
            .bin_name(workload.name())
            .about(workload.about())
            .try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }
}

/// Command-line arguments for the bottlenecks driver
#[derive(Parser, Debug)]
#[command(
    name = "bottlenecks",
    version,
    about = "Calibration driver for the bottlenecks micro-benchmark programs",
    long_about = "Calibration driver for the bottlenecks micro-benchmark programs.\n\n\
                  Each workload program (cpu-multiplication, cpu-trigonometry, ram-bandwidth-copy,\n\
                  disk-write, cpu, ram-bandwidth) takes a single SIZE argument. The calibrate\n\
                  command searches the SIZE that makes a program run for a target duration.\n\n\
                  Examples:\n\
                    bottlenecks calibrate target/release/cpu-trigonometry\n\
                    bottlenecks calibrate target/release/ram-bandwidth-copy --target-duration 5 --threads 4"
)]
pub struct DriverArgs {
    #[command(subcommand)]
    pub command: DriverCommand,
}

#[derive(Subcommand, Debug)]
pub enum DriverCommand {
    /// Find the SIZE to pass to PROGRAM so that it runs for TARGET_DURATION seconds.
    /// PROGRAM is called repeatedly with different sizes; the size that makes it
    /// last about TARGET_DURATION seconds is printed on the standard output.
    Calibrate(CalibrateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CalibrateArgs {
    /// Workload program to calibrate
    #[arg(value_name = "PROGRAM")]
    pub program: PathBuf,

    /// Target wall-clock duration of one run
    #[arg(
        long,
        default_value_t = 10.0,
        value_name = "TARGET_DURATION",
        help = "The target duration, in seconds"
    )]
    pub target_duration: f64,

    /// Relative error accepted on the duration
    #[arg(
        long,
        default_value_t = 0.05,
        value_name = "TOLERANCE",
        help = "Stop when duration is within TOLERANCE (fraction) of TARGET_DURATION"
    )]
    pub tolerance: f64,

    /// Worker threads given to PROGRAM through BOTTLENECKS_THREADS
    #[arg(
        long,
        default_value_t = 1,
        value_name = "COUNT",
        help = "Worker threads for PROGRAM (0 = auto-detect)"
    )]
    pub threads: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_workload_names_round_trip() {
        for workload in Workload::ALL {
            assert_eq!(Workload::from_name(workload.name()), Some(workload));
        }
        assert_eq!(Workload::from_name("gpu"), None);
    }

    #[test]
    fn test_workload_args_accept_integer() {
        let args =
            WorkloadArgs::try_parse_from_for(Workload::DiskWrite, ["disk-write", "4096"]).unwrap();
        assert_eq!(args.size, 4096);
    }

    #[test]
    fn test_workload_args_reject_bad_input() {
        let missing = WorkloadArgs::try_parse_from_for(Workload::Cpu, ["cpu"]).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::MissingRequiredArgument);

        let text = WorkloadArgs::try_parse_from_for(Workload::Cpu, ["cpu", "ten"]).unwrap_err();
        assert_eq!(text.kind(), ErrorKind::ValueValidation);

        assert!(WorkloadArgs::try_parse_from_for(Workload::Cpu, ["cpu", "-3"]).is_err());
        assert!(WorkloadArgs::try_parse_from_for(Workload::Cpu, ["cpu", "1", "2"]).is_err());
    }

    #[test]
    fn test_help_is_not_a_failure() {
        let help = WorkloadArgs::try_parse_from_for(Workload::Cpu, ["cpu", "--help"]).unwrap_err();
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);
        assert!(!help.use_stderr());
    }

    #[test]
    fn test_verdict_from_check() {
        assert_eq!(Verdict::from_check(true), Verdict::Passed);
        assert_eq!(Verdict::from_check(false), Verdict::Failed);
    }

    #[test]
    fn test_driver_defaults() {
        let args = DriverArgs::try_parse_from(["bottlenecks", "calibrate", "./cpu"]).unwrap();
        let DriverCommand::Calibrate(calibrate) = args.command;
        assert_eq!(calibrate.program, PathBuf::from("./cpu"));
        assert_eq!(calibrate.target_duration, 10.0);
        assert_eq!(calibrate.tolerance, 0.05);
        assert_eq!(calibrate.threads, 1);
    }
}
