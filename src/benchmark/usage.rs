// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/usage.rs
// Version: 1.0.0
//
// This file snapshots the resource usage of the driver's reaped children
// (getrusage RUSAGE_CHILDREN). The difference between a snapshot taken before
// a spawn and one taken after the wait gives the run's CPU times, page
// faults, block I/O and context switches.
//
// Tree Location:
// - src/benchmark/usage.rs (child resource usage accounting)
// - Depends on: nix (unix only)

use std::time::Duration;

/// Accumulated usage of terminated and waited-for children
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChildUsage {
    pub user_time: Duration,
    pub system_time: Duration,
    pub minor_page_faults: u64,
    pub major_page_faults: u64,
    pub input_blocks: u64,
    pub output_blocks: u64,
    pub voluntary_context_switches: u64,
    pub involuntary_context_switches: u64,
}

impl ChildUsage {
    /// Current totals for all reaped children, `None` when unavailable
    #[cfg(unix)]
    pub fn snapshot() -> Option<Self> {
        use nix::sys::resource::{UsageWho, getrusage};
        use nix::sys::time::TimeVal;

        fn duration(time: TimeVal) -> Duration {
            let micros = time.tv_sec() as i128 * 1_000_000 + time.tv_usec() as i128;
            Duration::from_micros(micros.max(0) as u64)
        }
        fn count(value: nix::libc::c_long) -> u64 {
            value.max(0) as u64
        }

        let usage = getrusage(UsageWho::RUSAGE_CHILDREN).ok()?;
        Some(Self {
            user_time: duration(usage.user_time()),
            system_time: duration(usage.system_time()),
            minor_page_faults: count(usage.minor_page_faults()),
            major_page_faults: count(usage.major_page_faults()),
            input_blocks: count(usage.block_reads()),
            output_blocks: count(usage.block_writes()),
            voluntary_context_switches: count(usage.voluntary_context_switches()),
            involuntary_context_switches: count(usage.involuntary_context_switches()),
        })
    }

    #[cfg(not(unix))]
    pub fn snapshot() -> Option<Self> {
        None
    }

    /// Usage accumulated between `earlier` and `self`
    pub fn since(&self, earlier: &ChildUsage) -> ChildUsage {
        ChildUsage {
            user_time: self.user_time.saturating_sub(earlier.user_time),
            system_time: self.system_time.saturating_sub(earlier.system_time),
            minor_page_faults: self.minor_page_faults.saturating_sub(earlier.minor_page_faults),
            major_page_faults: self.major_page_faults.saturating_sub(earlier.major_page_faults),
            input_blocks: self.input_blocks.saturating_sub(earlier.input_blocks),
            output_blocks: self.output_blocks.saturating_sub(earlier.output_blocks),
            voluntary_context_switches: self
                .voluntary_context_switches
                .saturating_sub(earlier.voluntary_context_switches),
            involuntary_context_switches: self
                .involuntary_context_switches
                .saturating_sub(earlier.involuntary_context_switches),
        }
    }

    pub fn cpu_time(&self) -> Duration {
        self.user_time + self.system_time
    }

    pub fn context_switches(&self) -> u64 {
        self.voluntary_context_switches + self.involuntary_context_switches
    }
}
