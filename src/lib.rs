// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.0
//
// This file serves as the main library entry point for bottlenecks. Every
// workload binary under src/bin/ is a thin wrapper around this library, and
// the calibration driver (src/main.rs) uses the benchmark module.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, worker, workload, benchmark, utils

pub mod benchmark;
pub mod core;
pub mod utils;
pub mod worker;
pub mod workload;

// Re-export commonly used types at the crate root for convenience
pub use crate::benchmark::{Calibrator, ProcessProbe};
pub use crate::core::{RuntimeConfig, Verdict, Workload, WorkloadError};
pub use crate::worker::WorkerPool;
pub use crate::workload::run_program;

// Changelog:
// - v1.0.0 (2026-10-18): Initial library layout.
//   - Purpose: Establishes the library root shared by the workload binaries
//     and the calibration driver.
//   - Features: Re-exports the workload enum, worker pool, runtime config and
//     calibration types.
