// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/error.rs
// Version: 1.0.0
//
// This file defines the error type shared by every workload program. Any of
// these errors terminates the program with exit status 1.
//
// Tree Location:
// - src/core/error.rs (workload error taxonomy)
// - Depends on: thiserror

use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkloadError {
    #[error("Size {value} is out of range (expected {min}..={max})")]
    SizeOutOfRange { value: u64, min: u64, max: u64 },

    #[error("Size {value} scaled by {scale} does not fit in this platform's integers")]
    SizeOverflow { value: u64, scale: u64 },

    #[error("Failed to allocate {bytes} bytes")]
    Allocation {
        bytes: u128,
        #[source]
        source: TryReserveError,
    },

    #[error("Directory {path:?} does not exist")]
    DirectoryNotFound { path: PathBuf },

    #[error("IO operation failed on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("A worker thread panicked")]
    WorkerPanicked,
}

impl WorkloadError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| WorkloadError::Io { path, source }
    }
}
