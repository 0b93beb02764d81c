// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/bin/ram_bandwidth_copy.rs
// Version: 1.0.0
//
// RAM copy bandwidth, checked. Usage: ram-bandwidth-copy SIZE

use bottlenecks::{Workload, run_program};
use std::process::ExitCode;

fn main() -> ExitCode {
    run_program(Workload::RamBandwidthCopy)
}
