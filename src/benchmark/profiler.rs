// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/profiler.rs
// Version: 1.0.0
//
// This file provides resource monitoring for a running workload program. The
// driver samples the child's CPU usage, accumulated CPU time, resident memory
// and bytes written at a fixed interval while it runs.
//
// Tree Location:
// - src/benchmark/profiler.rs (child process resource sampling)
// - Depends on: sysinfo

use std::time::Duration;
use sysinfo::{Pid, ProcessesToUpdate, System};

/// One observation of the monitored process
#[derive(Debug, Clone, PartialEq)]
pub struct InstantSample {
    /// Time since the process was spawned
    pub timestamp: Duration,

    /// CPU usage since the previous refresh, in percent of one core
    pub cpu_percent: f32,

    /// User plus system CPU time consumed since the process started
    pub cpu_time: Duration,

    /// Resident memory in bytes
    pub memory_bytes: u64,

    /// Bytes written since the process started
    pub written_bytes: u64,
}

/// Samples collected over one run, with summary helpers
#[derive(Debug, Clone, Default)]
pub struct SampleSeries {
    samples: Vec<InstantSample>,
}

impl SampleSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: InstantSample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[InstantSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn peak_memory_bytes(&self) -> u64 {
        self.samples
            .iter()
            .map(|sample| sample.memory_bytes)
            .max()
            .unwrap_or(0)
    }

    pub fn average_cpu_percent(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.samples.iter().map(|s| s.cpu_percent as f64).sum();
        sum / self.samples.len() as f64
    }

    /// Write throughput between consecutive samples, in bytes per second.
    /// The first entry is measured from the spawn.
    pub fn write_rates(&self) -> Vec<f64> {
        let mut rates = Vec::with_capacity(self.samples.len());
        let mut previous: Option<&InstantSample> = None;
        for sample in &self.samples {
            let (bytes, elapsed) = match previous {
                None => (sample.written_bytes, sample.timestamp),
                Some(prev) => (
                    sample.written_bytes.saturating_sub(prev.written_bytes),
                    sample.timestamp.saturating_sub(prev.timestamp),
                ),
            };
            let seconds = elapsed.as_secs_f64();
            rates.push(if seconds > 0.0 { bytes as f64 / seconds } else { 0.0 });
            previous = Some(sample);
        }
        rates
    }
}

/// System resource monitor for a single process
pub struct ResourceMonitor {
    system: System,
    pid: Pid,
    series: SampleSeries,
}

impl ResourceMonitor {
    /// Start monitoring `pid`. CPU usage needs two refreshes to mean
    /// anything, so the first one happens here and is not recorded.
    pub fn new(pid: u32) -> Self {
        let mut monitor = Self {
            system: System::new(),
            pid: Pid::from_u32(pid),
            series: SampleSeries::new(),
        };
        monitor.refresh();
        monitor
    }

    fn refresh(&mut self) {
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);
    }

    /// Take one sample. Returns `None` when the process is already gone.
    pub fn sample(&mut self, timestamp: Duration) -> Option<&InstantSample> {
        self.refresh();
        let process = self.system.process(self.pid)?;
        self.series.push(InstantSample {
            timestamp,
            cpu_percent: process.cpu_usage(),
            cpu_time: Duration::from_millis(process.accumulated_cpu_time()),
            memory_bytes: process.memory(),
            written_bytes: process.disk_usage().total_written_bytes,
        });
        self.series.samples().last()
    }

    pub fn into_series(self) -> SampleSeries {
        self.series
    }
}
