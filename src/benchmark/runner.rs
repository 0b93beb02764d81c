// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/runner.rs
// Version: 1.0.0
//
// This file implements the monitored execution of one workload program: spawn
// it with a SIZE argument and a thread count, sample its resource usage every
// 100 ms until it exits, and report the wall-clock duration together with the
// child's accumulated resource usage.
//
// Tree Location:
// - src/benchmark/runner.rs (monitored child process execution)
// - Depends on: tokio, profiler, usage

use crate::benchmark::calibrate::Probe;
use crate::benchmark::error::CalibrationError;
use crate::benchmark::profiler::{ResourceMonitor, SampleSeries};
use crate::benchmark::usage::ChildUsage;
use crate::core::THREADS_ENV;
use crate::utils::format::FormatUtils;
use log::{debug, info};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tokio::time::MissedTickBehavior;

const LOG_TARGET: &str = "bottlenecks::runner";

/// Default interval between two resource samples
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(100);

/// Result of one monitored run
#[derive(Debug, Clone)]
pub struct MonitoredRun {
    pub size: u64,
    pub thread_count: usize,
    pub clock_duration: Duration,
    pub samples: SampleSeries,
    /// Resource usage of the child, `None` where the platform cannot report it
    pub usage: Option<ChildUsage>,
}

/// Runs a workload program as a child process
#[derive(Debug, Clone)]
pub struct ProcessProbe {
    program: PathBuf,
    thread_count: usize,
    sample_interval: Duration,
    working_directory: Option<PathBuf>,
}

impl ProcessProbe {
    pub fn new(program: impl Into<PathBuf>, thread_count: usize) -> Self {
        Self {
            program: program.into(),
            thread_count,
            sample_interval: SAMPLE_INTERVAL,
            working_directory: None,
        }
    }

    pub fn with_sample_interval(mut self, interval: Duration) -> Self {
        self.sample_interval = interval;
        self
    }

    /// Run the program from `dir` instead of the driver's working directory
    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    /// Run the program once with `size` and wait for it to exit.
    /// A non-zero exit status is an error.
    pub async fn run_monitored(&self, size: u64) -> Result<MonitoredRun, CalibrationError> {
        debug!(target: LOG_TARGET,
            "Running {:?} {} with {} threads",
            self.program, size, self.thread_count
        );

        let mut command = Command::new(&self.program);
        command
            .arg(size.to_string())
            .env(THREADS_ENV, self.thread_count.to_string())
            .stdin(Stdio::null())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_directory {
            command.current_dir(dir);
        }

        let usage_before = ChildUsage::snapshot();
        let time_before = Instant::now();
        let mut child = command.spawn().map_err(|source| CalibrationError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        let mut monitor = child.id().map(ResourceMonitor::new);

        let start = tokio::time::Instant::now();
        let mut ticker = tokio::time::interval_at(start + self.sample_interval, self.sample_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let status = loop {
            tokio::select! {
                status = child.wait() => {
                    break status.map_err(|source| CalibrationError::Wait {
                        program: self.program.clone(),
                        source,
                    })?;
                }
                _ = ticker.tick() => {
                    let elapsed = start.elapsed();
                    if let Some(monitor) = monitor.as_mut() {
                        match monitor.sample(elapsed) {
                            Some(sample) => debug!(target: LOG_TARGET,
                                "{:?} at {:.3}s: CPU {:.0}%, CPU time {:.3}s, memory {}, written {}",
                                self.program,
                                sample.timestamp.as_secs_f64(),
                                sample.cpu_percent,
                                sample.cpu_time.as_secs_f64(),
                                FormatUtils::format_bytes(sample.memory_bytes),
                                FormatUtils::format_bytes(sample.written_bytes)
                            ),
                            None => debug!(target: LOG_TARGET, "{:?} vanished before sampling", self.program),
                        }
                    }
                }
            }
        };
        let clock_duration = time_before.elapsed();
        let usage = usage_before
            .zip(ChildUsage::snapshot())
            .map(|(before, after)| after.since(&before));

        if !status.success() {
            return Err(CalibrationError::ProgramFailed {
                program: self.program.clone(),
                size,
                status,
            });
        }

        let samples = monitor.map(ResourceMonitor::into_series).unwrap_or_default();
        info!(target: LOG_TARGET,
            "Running {:?} {} with {} threads took {}",
            self.program,
            size,
            self.thread_count,
            FormatUtils::format_seconds(clock_duration)
        );
        if !samples.is_empty() {
            let peak_write_rate = samples.write_rates().into_iter().fold(0.0_f64, f64::max);
            debug!(target: LOG_TARGET,
                "{} samples: average CPU {:.0}%, peak memory {}, peak writes {}/s",
                samples.len(),
                samples.average_cpu_percent(),
                FormatUtils::format_bytes(samples.peak_memory_bytes()),
                FormatUtils::format_bytes(peak_write_rate as u64)
            );
        }
        if let Some(usage) = &usage {
            debug!(target: LOG_TARGET,
                "Usage: user {:.3}s, system {:.3}s, page faults {} minor / {} major, blocks {} in / {} out, context switches {} voluntary / {} involuntary",
                usage.user_time.as_secs_f64(),
                usage.system_time.as_secs_f64(),
                usage.minor_page_faults,
                usage.major_page_faults,
                usage.input_blocks,
                usage.output_blocks,
                usage.voluntary_context_switches,
                usage.involuntary_context_switches
            );
        }

        Ok(MonitoredRun {
            size,
            thread_count: self.thread_count,
            clock_duration,
            samples,
            usage,
        })
    }
}

impl Probe for ProcessProbe {
    async fn measure(&mut self, size: u64) -> Result<Duration, CalibrationError> {
        Ok(self.run_monitored(size).await?.clock_duration)
    }
}
