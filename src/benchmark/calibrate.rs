// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/calibrate.rs
// Version: 1.0.0
//
// This file implements the SIZE calibration search. Starting from SIZE=1 the
// size is doubled until a run lasts at least the target duration, then the
// last interval is bisected until the duration is within tolerance.
//
// Tree Location:
// - src/benchmark/calibrate.rs (doubling + bisection size search)
// - Depends on: runner (through the Probe trait)

use crate::benchmark::error::CalibrationError;
use log::{debug, info};
use std::future::Future;
use std::time::Duration;

const LOG_TARGET: &str = "bottlenecks::calibrate";

/// Sizes at or above this bound mean the program cannot reach the target
pub const SIZE_LIMIT: f64 = (1u64 << 30) as f64;

/// Upper bound on bisection probes
pub const MAX_BISECTIONS: usize = 64;

/// Something that can time a workload at a given size
pub trait Probe {
    fn measure(&mut self, size: u64) -> impl Future<Output = Result<Duration, CalibrationError>> + Send;
}

/// Calibration target
#[derive(Debug, Clone)]
pub struct CalibrationConfig {
    pub target: Duration,
    /// Accepted relative error on the duration (0.05 = 5%)
    pub tolerance: f64,
    pub max_bisections: usize,
}

impl CalibrationConfig {
    pub fn new(target_secs: f64, tolerance: f64) -> Result<Self, CalibrationError> {
        if !(target_secs.is_finite() && target_secs > 0.0) {
            return Err(CalibrationError::InvalidTarget {
                message: format!("target duration must be a positive number of seconds, got {}", target_secs),
            });
        }
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(CalibrationError::InvalidTarget {
                message: format!("tolerance must be positive, got {}", tolerance),
            });
        }
        let target = Duration::try_from_secs_f64(target_secs).map_err(|e| {
            CalibrationError::InvalidTarget {
                message: format!("target duration {} is out of range: {}", target_secs, e),
            }
        })?;
        Ok(Self {
            target,
            tolerance,
            max_bisections: MAX_BISECTIONS,
        })
    }
}

/// Outcome of a successful calibration
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    pub size: u64,
    pub duration: Duration,
    pub relative_error: f64,
    pub probes: usize,
}

pub fn relative_error(duration: f64, target: f64) -> f64 {
    (duration - target).abs() / target
}

pub struct Calibrator<P> {
    config: CalibrationConfig,
    probe: P,
    probes: usize,
}

impl<P: Probe> Calibrator<P> {
    pub fn new(config: CalibrationConfig, probe: P) -> Self {
        Self {
            config,
            probe,
            probes: 0,
        }
    }

    pub fn into_probe(self) -> P {
        self.probe
    }

    async fn probe_at(&mut self, size: f64) -> Result<f64, CalibrationError> {
        let size = size as u64;
        let duration = self.probe.measure(size).await?.as_secs_f64();
        self.probes += 1;
        debug!(target: LOG_TARGET, "Probe {}: SIZE={} took {:.3}s", self.probes, size, duration);
        Ok(duration)
    }

    pub async fn run(&mut self) -> Result<Calibration, CalibrationError> {
        let target = self.config.target.as_secs_f64();
        let tolerance = self.config.tolerance;
        self.probes = 0;

        // Doubling: 1, 2, 4, ... until the target is reached
        let mut size = 0.5_f64;
        let mut lo_size = size;
        let mut duration = 0.0_f64;
        while duration < target {
            lo_size = size;
            size *= 2.0;
            if size >= SIZE_LIMIT {
                return Err(CalibrationError::TooQuick { size: size as u64 });
            }
            duration = self.probe_at(size).await?;
        }

        // Bisection between the last two sizes
        let mut hi_size = size;
        let mut bisections = 0;
        while relative_error(duration, target) > tolerance {
            if bisections == self.config.max_bisections {
                return Err(CalibrationError::DidNotConverge {
                    probes: self.probes,
                });
            }
            bisections += 1;
            size = (lo_size + hi_size) / 2.0;
            duration = self.probe_at(size).await?;
            if duration > target {
                hi_size = size;
            } else {
                lo_size = size;
            }
        }

        let calibration = Calibration {
            size: size as u64,
            duration: Duration::from_secs_f64(duration),
            relative_error: relative_error(duration, target),
            probes: self.probes,
        };
        info!(target: LOG_TARGET,
            "Duration reached: {:.2}s, relative error: {:.2}",
            duration, calibration.relative_error
        );
        Ok(calibration)
    }
}
