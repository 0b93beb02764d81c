// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/workload/disk.rs
// Version: 1.0.0
//
// This file contains the disk write/delete workload: 1000 files, each written
// with the same buffer, closed and removed again, spread over the worker pool.
//
// Tree Location:
// - src/workload/disk.rs (file write/delete workload)
// - Depends on: worker::pool

use super::ram::try_filled;
use crate::core::{Verdict, WorkloadError};
use crate::worker::WorkerPool;
use log::debug;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const LOG_TARGET: &str = "bottlenecks::workload::disk";

/// Directory the disk-write program works in, relative to the working directory
pub const DISK_WRITE_DIRECTORY: &str = "build";

/// Files written (and deleted) per run
pub const FILE_COUNT: usize = 1000;

/// `io-0042.dat`
pub fn file_name(index: usize) -> String {
    format!("io-{:04}.dat", index)
}

/// Buffer holding 0, 1, 2, ... wrapping at 256
fn sequence_buffer(len: usize) -> Result<Vec<u8>, WorkloadError> {
    let mut data = try_filled(len, 0u8)?;
    for (i, byte) in data.iter_mut().enumerate() {
        *byte = i as u8;
    }
    Ok(data)
}

fn write_then_remove(path: &Path, data: &[u8]) -> Result<(), WorkloadError> {
    {
        let mut file = File::create(path).map_err(WorkloadError::io(path))?;
        file.write_all(data).map_err(WorkloadError::io(path))?;
    }
    fs::remove_file(path).map_err(WorkloadError::io(path))
}

/// Write `size` bytes to each of 1000 files in `directory`, deleting every
/// file right after closing it. The directory must already exist.
pub fn disk_write(size: u64, directory: &Path, pool: &WorkerPool) -> Result<Verdict, WorkloadError> {
    let len = usize::try_from(size).map_err(|_| WorkloadError::SizeOverflow {
        value: size,
        scale: 1,
    })?;
    if !directory.is_dir() {
        return Err(WorkloadError::DirectoryNotFound {
            path: directory.to_path_buf(),
        });
    }
    let data = sequence_buffer(len)?;
    debug!(target: LOG_TARGET,
        "Writing {} files of {} bytes in {:?}",
        FILE_COUNT, len, directory
    );

    pool.try_for_each_index(FILE_COUNT, |index| {
        let path: PathBuf = directory.join(file_name(index));
        write_then_remove(&path, &data)
    })?;

    Ok(Verdict::Passed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_name_is_zero_padded() {
        assert_eq!(file_name(0), "io-0000.dat");
        assert_eq!(file_name(42), "io-0042.dat");
        assert_eq!(file_name(999), "io-0999.dat");
    }

    #[test]
    fn test_sequence_buffer_wraps() {
        let data = sequence_buffer(300).unwrap();
        assert_eq!(data[0], 0);
        assert_eq!(data[255], 255);
        assert_eq!(data[256], 0);
        assert_eq!(data[299], 43);
    }

    #[test]
    fn test_disk_write_leaves_directory_empty() {
        let temp_dir = TempDir::new().unwrap();
        let pool = WorkerPool::new(4);
        let verdict = disk_write(512, temp_dir.path(), &pool).unwrap();
        assert_eq!(verdict, Verdict::Passed);
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_disk_write_zero_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let verdict = disk_write(0, temp_dir.path(), &WorkerPool::new(2)).unwrap();
        assert_eq!(verdict, Verdict::Passed);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join(DISK_WRITE_DIRECTORY);
        let result = disk_write(16, &missing, &WorkerPool::new(2));
        assert!(matches!(result, Err(WorkloadError::DirectoryNotFound { path }) if path == missing));
    }

    #[test]
    fn test_write_then_remove_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(file_name(7));
        let result = write_then_remove(&path, b"data");
        assert!(matches!(result, Err(WorkloadError::Io { path: p, .. }) if p == path));
    }
}
