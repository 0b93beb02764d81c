// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/workloads_test.rs
// Version: 1.0.0
//
// This file exercises the workload library API across thread counts: every
// workload must give the same verdict whatever the pool width.
//
// Tree Location:
// - tests/workloads_test.rs (workload library tests)
// - Depends on: bottlenecks, tempfile

use bottlenecks::workload::{
    cpu_multiplication, cpu_trigonometry, disk_write, ram_bandwidth_copy, typical_ram_bandwidth,
};
use bottlenecks::{Verdict, Workload, WorkerPool, WorkloadError};
use std::fs;
use tempfile::TempDir;

const THREAD_COUNTS: [usize; 4] = [1, 2, 3, 8];

#[test]
fn test_cpu_workloads_across_thread_counts() {
    for threads in THREAD_COUNTS {
        let pool = WorkerPool::new(threads);
        assert_eq!(cpu_multiplication(1, &pool).unwrap(), Verdict::Passed, "{} threads", threads);
        assert_eq!(cpu_trigonometry(0, &pool).unwrap(), Verdict::Passed, "{} threads", threads);
    }
}

#[test]
fn test_ram_copy_across_thread_counts() {
    for threads in THREAD_COUNTS {
        let pool = WorkerPool::new(threads);
        assert_eq!(ram_bandwidth_copy(1, &pool).unwrap(), Verdict::Passed, "{} threads", threads);
    }
    assert_eq!(
        typical_ram_bandwidth(1, &WorkerPool::new(4)).unwrap(),
        Verdict::Passed
    );
}

#[test]
fn test_disk_write_across_thread_counts() {
    for threads in THREAD_COUNTS {
        let temp_dir = TempDir::new().unwrap();
        let pool = WorkerPool::new(threads);
        assert_eq!(
            disk_write(1000, temp_dir.path(), &pool).unwrap(),
            Verdict::Passed
        );
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}

#[test]
fn test_disk_write_into_a_file_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    let not_a_directory = temp_dir.path().join("build");
    fs::write(&not_a_directory, b"occupied").unwrap();

    let result = disk_write(8, &not_a_directory, &WorkerPool::new(2));
    assert!(matches!(result, Err(WorkloadError::DirectoryNotFound { .. })));
}

#[test]
fn test_every_workload_has_a_distinct_name() {
    let mut names: Vec<&str> = Workload::ALL.iter().map(|w| w.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Workload::ALL.len());
}
