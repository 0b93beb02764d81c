// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/error.rs
// Version: 1.0.0
//
// This file defines the errors raised while calibrating a workload program.
//
// Tree Location:
// - src/benchmark/error.rs (calibration error taxonomy)
// - Depends on: thiserror

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error("Failed to start {program:?}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to wait for {program:?}")]
    Wait {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{program:?} with SIZE={size} exited with {status}")]
    ProgramFailed {
        program: PathBuf,
        size: u64,
        status: ExitStatus,
    },

    #[error("PROGRAM is too quick: still under the target duration at SIZE={size}")]
    TooQuick { size: u64 },

    #[error("Calibration did not converge after {probes} probes")]
    DidNotConverge { probes: usize },

    #[error("Invalid calibration target: {message}")]
    InvalidTarget { message: String },
}
