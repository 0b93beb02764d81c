// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/worker/pool.rs
// Version: 1.0.0
//
// This file implements the fixed-width worker pool behind every workload's
// parallel-for loop. The index range is split into contiguous blocks, one per
// worker thread, and workers share a stop flag so the first failure ends the
// loop early.
//
// Tree Location:
// - src/worker/pool.rs (parallel-for over scoped threads)
// - Depends on: crossbeam, log

use crate::core::{RuntimeConfig, WorkloadError};
use log::debug;
use std::hint::black_box;
use std::ops::Range;
use std::sync::Barrier;
use std::sync::atomic::{AtomicBool, Ordering};

const LOG_TARGET: &str = "bottlenecks::worker";

#[derive(Debug, Clone)]
pub struct WorkerPool {
    thread_count: usize,
}

impl WorkerPool {
    /// Create a pool with `thread_count` workers (at least one)
    pub fn new(thread_count: usize) -> Self {
        Self {
            thread_count: thread_count.max(1),
        }
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::new(config.thread_count)
    }

    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    /// Contiguous blocks covering `0..len`, at most one per worker
    pub fn partition(&self, len: usize) -> Vec<Range<usize>> {
        if len == 0 {
            return Vec::new();
        }
        let block = len.div_ceil(self.thread_count);
        (0..len)
            .step_by(block)
            .map(|start| start..(start + block).min(len))
            .collect()
    }

    /// Run `body` for every index in `0..len`
    pub fn for_each_index<F>(&self, len: usize, body: F) -> Result<(), WorkloadError>
    where
        F: Fn(usize) + Sync,
    {
        self.try_for_each_index(len, |index| {
            body(index);
            Ok(())
        })
    }

    /// Run `body` for every index in `0..len`, stopping all workers at the
    /// first error. The first error observed is returned.
    pub fn try_for_each_index<F>(&self, len: usize, body: F) -> Result<(), WorkloadError>
    where
        F: Fn(usize) -> Result<(), WorkloadError> + Sync,
    {
        let blocks = self.partition(len);
        let should_stop = AtomicBool::new(false);

        let outcome = crossbeam::scope(|scope| {
            let handles: Vec<_> = blocks
                .into_iter()
                .enumerate()
                .map(|(worker_id, block)| {
                    let body = &body;
                    let should_stop = &should_stop;
                    scope.spawn(move |_| {
                        for index in block {
                            if should_stop.load(Ordering::Relaxed) {
                                debug!(target: LOG_TARGET, "Worker {}: stopping early", worker_id);
                                break;
                            }
                            if let Err(e) = body(index) {
                                should_stop.store(true, Ordering::Relaxed);
                                return Err(e);
                            }
                        }
                        Ok(())
                    })
                })
                .collect();

            let mut first_error = None;
            for (worker_id, handle) in handles.into_iter().enumerate() {
                let result = match handle.join() {
                    Ok(result) => result,
                    Err(_) => {
                        debug!(target: LOG_TARGET, "Worker {} panicked", worker_id);
                        Err(WorkloadError::WorkerPanicked)
                    }
                };
                if let Err(e) = result {
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
            first_error
        });

        match outcome {
            Ok(None) => Ok(()),
            Ok(Some(e)) => Err(e),
            Err(_) => Err(WorkloadError::WorkerPanicked),
        }
    }

    /// Element-wise parallel copy of `src` into `dst`, `passes` times, with one
    /// team of workers. Each worker owns the same contiguous block of both
    /// slices on every pass and all workers meet at a barrier between passes.
    ///
    /// # Panics
    /// If the slices differ in length.
    pub fn copy_repeated<T>(&self, src: &[T], dst: &mut [T], passes: usize) -> Result<(), WorkloadError>
    where
        T: Copy + Send + Sync,
    {
        assert_eq!(src.len(), dst.len(), "copy between slices of different lengths");
        if src.is_empty() || passes == 0 {
            return Ok(());
        }
        let block = src.len().div_ceil(self.thread_count);
        let barrier = Barrier::new(src.len().div_ceil(block));

        crossbeam::scope(|scope| {
            for (from, to) in src.chunks(block).zip(dst.chunks_mut(block)) {
                let barrier = &barrier;
                scope.spawn(move |_| {
                    for _ in 0..passes {
                        to.copy_from_slice(from);
                        black_box(&mut *to);
                        barrier.wait();
                    }
                });
            }
        })
        .map_err(|_| WorkloadError::WorkerPanicked)
    }
}
