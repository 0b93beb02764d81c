// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/workload/ram.rs
// Version: 1.0.0
//
// This file contains the memory-bandwidth workloads, modelled on the STREAM
// "copy" kernel (https://www.cs.virginia.edu/stream/): two large arrays of
// 32-bit integers, the first copied into the second 100 times in parallel.
//
// Tree Location:
// - src/workload/ram.rs (STREAM-style copy workloads)
// - Depends on: worker::pool

use super::cpu::{check_typical_range, scaled};
use crate::core::{Verdict, WorkloadError};
use crate::worker::WorkerPool;
use log::debug;
use std::hint::black_box;

const LOG_TARGET: &str = "bottlenecks::workload::ram";

/// Elements per unit of SIZE (one MiElement)
pub const ELEMENTS_PER_UNIT: u64 = 1024 * 1024;

/// Full copies of the source array per run
pub const REPETITIONS: usize = 100;

const SOURCE_VALUE: i32 = 42;

/// Allocate `len` copies of `value`, reporting failure instead of aborting
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>, WorkloadError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|source| WorkloadError::Allocation {
            bytes: len as u128 * size_of::<T>() as u128,
            source,
        })?;
    buffer.resize(len, value);
    Ok(buffer)
}

fn element_count(size: u64) -> Result<usize, WorkloadError> {
    let elements = scaled(size, ELEMENTS_PER_UNIT)?;
    usize::try_from(elements).map_err(|_| WorkloadError::SizeOverflow {
        value: size,
        scale: ELEMENTS_PER_UNIT,
    })
}

fn copy_repeatedly(elements: usize, pool: &WorkerPool) -> Result<Vec<i32>, WorkloadError> {
    let source = try_filled(elements, SOURCE_VALUE)?;
    let mut destination = try_filled(elements, 0i32)?;
    debug!(target: LOG_TARGET,
        "Copying {} elements {} times on {} workers",
        elements, REPETITIONS, pool.thread_count()
    );

    pool.copy_repeated(&source, &mut destination, REPETITIONS)?;
    Ok(destination)
}

/// Copy `1024 * 1024 * size` integers 100 times, then check both ends of the
/// destination. An empty array fails the check.
pub fn ram_bandwidth_copy(size: u64, pool: &WorkerPool) -> Result<Verdict, WorkloadError> {
    let destination = copy_repeatedly(element_count(size)?, pool)?;
    let ok = matches!(
        (destination.first(), destination.last()),
        (Some(&SOURCE_VALUE), Some(&SOURCE_VALUE))
    );
    Ok(Verdict::from_check(ok))
}

/// Typical RAM load: same copy without the final check. `size` must be in
/// 1..=1024.
pub fn typical_ram_bandwidth(size: u64, pool: &WorkerPool) -> Result<Verdict, WorkloadError> {
    check_typical_range(size)?;
    black_box(copy_repeatedly(element_count(size)?, pool)?);
    Ok(Verdict::Passed)
}
