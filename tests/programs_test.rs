// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/programs_test.rs
// Version: 1.0.0
//
// This file runs the built workload executables end to end and checks their
// exit statuses: 0 on success, 1 on bad arguments, missing directories or a
// failed result check.
//
// Tree Location:
// - tests/programs_test.rs (executable exit-status tests)
// - Depends on: bottlenecks binaries, tempfile

use bottlenecks::core::THREADS_ENV;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_in(program: &str, args: &[&str], dir: Option<&Path>) -> Output {
    let mut command = Command::new(program);
    command.args(args).env(THREADS_ENV, "2");
    if let Some(dir) = dir {
        command.current_dir(dir);
    }
    command.output().expect("Failed to launch workload program")
}

fn run(program: &str, args: &[&str]) -> Output {
    run_in(program, args, None)
}

fn status_code(output: &Output) -> Option<i32> {
    output.status.code()
}

const CPU_MULTIPLICATION: &str = env!("CARGO_BIN_EXE_cpu-multiplication");
const CPU_TRIGONOMETRY: &str = env!("CARGO_BIN_EXE_cpu-trigonometry");
const RAM_BANDWIDTH_COPY: &str = env!("CARGO_BIN_EXE_ram-bandwidth-copy");
const DISK_WRITE: &str = env!("CARGO_BIN_EXE_disk-write");
const CPU: &str = env!("CARGO_BIN_EXE_cpu");
const RAM_BANDWIDTH: &str = env!("CARGO_BIN_EXE_ram-bandwidth");

#[test]
fn test_missing_size_exits_with_one() {
    for program in [
        CPU_MULTIPLICATION,
        CPU_TRIGONOMETRY,
        RAM_BANDWIDTH_COPY,
        DISK_WRITE,
        CPU,
        RAM_BANDWIDTH,
    ] {
        let output = run(program, &[]);
        assert_eq!(status_code(&output), Some(1), "{} without SIZE", program);
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn test_non_numeric_size_exits_with_one() {
    assert_eq!(status_code(&run(CPU_MULTIPLICATION, &["many"])), Some(1));
    assert_eq!(status_code(&run(RAM_BANDWIDTH_COPY, &["-1"])), Some(1));
    assert_eq!(status_code(&run(CPU_TRIGONOMETRY, &["1.5"])), Some(1));
}

#[test]
fn test_help_exits_with_zero() {
    let output = run(DISK_WRITE, &["--help"]);
    assert_eq!(status_code(&output), Some(0));
    let help = String::from_utf8_lossy(&output.stdout);
    assert!(help.contains("disk-write"));
    assert!(help.contains("SIZE"));
}

#[test]
fn test_cpu_programs_succeed() {
    let output = run(CPU_MULTIPLICATION, &["1"]);
    assert_eq!(status_code(&output), Some(0));
    assert!(output.stdout.is_empty());

    assert_eq!(status_code(&run(CPU_TRIGONOMETRY, &["1"])), Some(0));
}

#[test]
fn test_ram_copy_check() {
    assert_eq!(status_code(&run(RAM_BANDWIDTH_COPY, &["1"])), Some(0));
    assert_eq!(status_code(&run(RAM_BANDWIDTH_COPY, &["0"])), Some(1));
}

#[test]
fn test_typical_workloads_validate_range() {
    assert_eq!(status_code(&run(CPU, &["0"])), Some(1));
    assert_eq!(status_code(&run(CPU, &["1025"])), Some(1));
    assert_eq!(status_code(&run(RAM_BANDWIDTH, &["0"])), Some(1));
    assert_eq!(status_code(&run(RAM_BANDWIDTH, &["1025"])), Some(1));
    assert_eq!(status_code(&run(RAM_BANDWIDTH, &["1"])), Some(0));
}

#[test]
fn test_disk_write_without_build_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(DISK_WRITE, &["64"], Some(temp_dir.path()));
    assert_eq!(status_code(&output), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("build"), "stderr: {}", stderr);
}

#[test]
fn test_disk_write_cleans_up_after_itself() {
    let temp_dir = TempDir::new().unwrap();
    let build = temp_dir.path().join("build");
    fs::create_dir(&build).unwrap();

    let output = run_in(DISK_WRITE, &["4096"], Some(temp_dir.path()));
    assert_eq!(status_code(&output), Some(0));
    assert_eq!(fs::read_dir(&build).unwrap().count(), 0);
}
