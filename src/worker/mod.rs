// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/worker/mod.rs
// Version: 1.0.0
//
// This file declares the worker module, which owns the threads that execute a
// workload's parallel loop.
//
// Tree Location:
// - src/worker/mod.rs (worker module entry point)
// - Submodules: pool

pub mod pool;

pub use pool::WorkerPool;
