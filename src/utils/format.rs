// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.0.0
//
// This file provides utility functions for formatting measurements in
// bottlenecks. It formats durations, byte counts and error chains for
// consistent output in logs.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

use std::error::Error;
use std::time::Duration;

/// Utility functions for formatting benchmark measurements
pub struct FormatUtils;

impl FormatUtils {
    /// Format a duration as seconds with two decimals
    pub fn format_seconds(duration: Duration) -> String {
        format!("{:.2}s", duration.as_secs_f64())
    }

    /// Format a byte count in binary units (B, KiB, MiB, GiB)
    pub fn format_bytes(bytes: u64) -> String {
        const KIB: f64 = 1024.0;
        let value = bytes as f64;
        if value >= KIB * KIB * KIB {
            format!("{:.2} GiB", value / (KIB * KIB * KIB))
        } else if value >= KIB * KIB {
            format!("{:.2} MiB", value / (KIB * KIB))
        } else if value >= KIB {
            format!("{:.2} KiB", value / KIB)
        } else {
            format!("{} B", bytes)
        }
    }

    /// Join an error and all its sources with ": "
    pub fn format_error_chain(error: &dyn Error) -> String {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}
