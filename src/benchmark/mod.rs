// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/mod.rs
// Version: 1.0.0
//
// This file declares the benchmark module used by the calibration driver. It
// runs workload programs as monitored child processes and searches the SIZE
// that makes a program last for a target duration.
//
// Tree Location:
// - src/benchmark/mod.rs (benchmark module entry point)
// - Submodules: calibrate, error, profiler, runner, usage

pub mod calibrate;
pub mod error;
pub mod profiler;
pub mod runner;
pub mod usage;

// Re-export key benchmark types and functions
pub use calibrate::{Calibration, CalibrationConfig, Calibrator, Probe};
pub use error::CalibrationError;
pub use profiler::{InstantSample, ResourceMonitor, SampleSeries};
pub use runner::{MonitoredRun, ProcessProbe};
pub use usage::ChildUsage;

// Changelog:
// - v1.0.0 (2026-10-18): Initial benchmark module.
//   - Purpose: Provides the calibration driver's building blocks: monitored
//     child process runs and the doubling/bisection size search.
//   - Features: Declares calibrate, error, profiler and runner submodules with
//     re-exports; the Probe trait lets the search run against a fake program
//     in tests.
