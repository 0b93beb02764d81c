// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/bin/disk_write.rs
// Version: 1.0.0
//
// Disk write/delete throughput in ./build. Usage: disk-write SIZE

use bottlenecks::{Workload, run_program};
use std::process::ExitCode;

fn main() -> ExitCode {
    run_program(Workload::DiskWrite)
}
