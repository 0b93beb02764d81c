// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/bin/cpu_multiplication.rs
// Version: 1.0.0
//
// CPU floating-point throughput. Usage: cpu-multiplication SIZE

use bottlenecks::{Workload, run_program};
use std::process::ExitCode;

fn main() -> ExitCode {
    run_program(Workload::CpuMultiplication)
}
