// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the core functionality of
// bottlenecks. It declares submodules and re-exports key types for use
// throughout the project.

pub mod config;
pub mod error;
pub mod types;

// Re-export the most commonly used items
pub use config::{LOG_CONFIG_ENV, LOG_LEVEL_ENV, RuntimeConfig, THREADS_ENV, resolve_thread_count};
pub use error::WorkloadError;
pub use types::{CalibrateArgs, DriverArgs, DriverCommand, Verdict, Workload, WorkloadArgs};
