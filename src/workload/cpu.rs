// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/workload/cpu.rs
// Version: 1.0.0
//
// This file contains the CPU-bound workloads. Each one runs 1024 independent
// rows on the worker pool; rows never share data, so throughput scales with
// the number of cores until the FPU saturates.
//
// Tree Location:
// - src/workload/cpu.rs (floating-point and transcendental workloads)
// - Depends on: worker::pool

use crate::core::{Verdict, WorkloadError};
use crate::worker::WorkerPool;
use std::hint::black_box;
use std::sync::atomic::{AtomicBool, Ordering};

/// Number of independent rows handed to the worker pool
pub const ROWS: usize = 1024;

/// Inner-loop scale of cpu-multiplication and cpu-trigonometry
pub const ROW_SCALE: u64 = 1024;

/// Inner-loop scale of the typical cpu workload
pub const TYPICAL_ROW_SCALE: u64 = 1024 * 1024;

/// Accepted multiplier range of the typical workloads
pub const TYPICAL_SIZE_RANGE: (u64, u64) = (1, 1024);

#[allow(clippy::approx_constant)]
const SEED: f64 = 3.14;

pub(crate) fn scaled(size: u64, scale: u64) -> Result<u64, WorkloadError> {
    size.checked_mul(scale)
        .ok_or(WorkloadError::SizeOverflow { value: size, scale })
}

pub(crate) fn check_typical_range(size: u64) -> Result<(), WorkloadError> {
    let (min, max) = TYPICAL_SIZE_RANGE;
    if (min..=max).contains(&size) {
        Ok(())
    } else {
        Err(WorkloadError::SizeOutOfRange { value: size, min, max })
    }
}

/// Multiply a seed by the row index `1024 * size` times per row.
///
/// A row fails if its product ever turns negative, which cannot happen for a
/// non-negative factor; the branch is what keeps the optimiser from dropping
/// the loop.
pub fn cpu_multiplication(size: u64, pool: &WorkerPool) -> Result<Verdict, WorkloadError> {
    let repetitions = scaled(size, ROW_SCALE)?;
    let ok = AtomicBool::new(true);

    pool.for_each_index(ROWS, |row| {
        let factor = row as f64;
        let mut x = SEED;
        for _ in 0..repetitions {
            x *= factor;
            if x < 0.0 {
                ok.store(false, Ordering::Relaxed);
                break;
            }
        }
    })?;

    Ok(Verdict::from_check(ok.load(Ordering::Relaxed)))
}

/// Evaluate `acos(cos(x))` for `x = row * size + column` over every cell of a
/// 1024 x (1024 * size) grid.
pub fn cpu_trigonometry(size: u64, pool: &WorkerPool) -> Result<Verdict, WorkloadError> {
    let columns = scaled(size, ROW_SCALE)?;
    let row_width = columns as f64;

    pool.for_each_index(ROWS, |row| {
        let row_start = row as f64 * row_width;
        for column in 0..columns {
            let x = row_start + column as f64;
            black_box(x.cos().acos());
        }
    })?;

    Ok(Verdict::Passed)
}

/// Typical CPU load: multiply a barrier-protected accumulator by the inner
/// index `1024 * 1024 * size` times per row. `size` must be in 1..=1024.
pub fn typical_cpu(size: u64, pool: &WorkerPool) -> Result<Verdict, WorkloadError> {
    check_typical_range(size)?;
    let repetitions = scaled(size, TYPICAL_ROW_SCALE)?;

    pool.for_each_index(ROWS, |_| {
        let mut x = black_box(SEED);
        for j in 0..repetitions {
            x = black_box(x * j as f64);
        }
    })?;

    Ok(Verdict::Passed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplication_passes() {
        let pool = WorkerPool::new(4);
        assert_eq!(cpu_multiplication(0, &pool).unwrap(), Verdict::Passed);
        assert_eq!(cpu_multiplication(1, &pool).unwrap(), Verdict::Passed);
    }

    #[test]
    fn test_trigonometry_passes() {
        let pool = WorkerPool::new(4);
        assert_eq!(cpu_trigonometry(1, &pool).unwrap(), Verdict::Passed);
    }

    #[test]
    fn test_scaled_overflow() {
        assert!(matches!(
            scaled(u64::MAX, ROW_SCALE),
            Err(WorkloadError::SizeOverflow { scale: ROW_SCALE, .. })
        ));
        assert!(matches!(
            cpu_multiplication(u64::MAX / 2, &WorkerPool::new(1)),
            Err(WorkloadError::SizeOverflow { .. })
        ));
    }

    #[test]
    fn test_typical_cpu_rejects_out_of_range() {
        let pool = WorkerPool::new(1);
        assert!(matches!(
            typical_cpu(0, &pool),
            Err(WorkloadError::SizeOutOfRange { value: 0, min: 1, max: 1024 })
        ));
        assert!(matches!(
            typical_cpu(1025, &pool),
            Err(WorkloadError::SizeOutOfRange { value: 1025, .. })
        ));
    }
}
