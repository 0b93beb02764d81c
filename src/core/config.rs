// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/config.rs
// Version: 1.0.0
//
// This file resolves the runtime configuration that sits outside the single
// positional SIZE argument: worker thread count and logging setup, both read
// from the environment so the calibration driver can steer its children.
//
// Tree Location:
// - src/core/config.rs (environment-driven runtime configuration)
// - Depends on: log, num_cpus

use log::{LevelFilter, warn};
use std::path::PathBuf;

const LOG_TARGET: &str = "bottlenecks::config";

/// Worker thread count for the parallel loop (0 or unset = auto-detect)
pub const THREADS_ENV: &str = "BOTTLENECKS_THREADS";

/// Log level override (error, warn, info, debug, trace, off)
pub const LOG_LEVEL_ENV: &str = "BOTTLENECKS_LOG";

/// Path to a log4rs YAML file replacing the built-in console logger
pub const LOG_CONFIG_ENV: &str = "BOTTLENECKS_LOG_CONFIG";

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub thread_count: usize,
    pub log_level: LevelFilter,
    pub log_config: Option<PathBuf>,
    /// Problems found while reading the environment, reported once logging is up
    warnings: Vec<String>,
}

impl RuntimeConfig {
    /// Read the configuration from the process environment
    pub fn from_env(default_level: LevelFilter) -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), default_level)
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F, default_level: LevelFilter) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        let requested_threads = match lookup(THREADS_ENV) {
            None => 0,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(threads) => threads,
                Err(_) => {
                    warnings.push(format!(
                        "Ignoring {}={:?}: not a thread count, using auto-detect",
                        THREADS_ENV, raw
                    ));
                    0
                }
            },
        };

        let log_level = match lookup(LOG_LEVEL_ENV) {
            None => default_level,
            Some(raw) => match raw.trim().parse::<LevelFilter>() {
                Ok(level) => level,
                Err(_) => {
                    warnings.push(format!(
                        "Ignoring {}={:?}: unknown log level, using {}",
                        LOG_LEVEL_ENV, raw, default_level
                    ));
                    default_level
                }
            },
        };

        let log_config = lookup(LOG_CONFIG_ENV)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        Self {
            thread_count: resolve_thread_count(requested_threads),
            log_level,
            log_config,
            warnings,
        }
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Emit the deferred configuration warnings through the logger
    pub fn log_warnings(&self) {
        for message in &self.warnings {
            warn!(target: LOG_TARGET, "{}", message);
        }
    }
}

/// 0 means one worker per logical CPU
pub fn resolve_thread_count(requested: usize) -> usize {
    if requested == 0 {
        num_cpus::get()
    } else {
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> RuntimeConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RuntimeConfig::from_lookup(|key| env.get(key).cloned(), LevelFilter::Warn)
    }

    #[test]
    fn test_defaults_auto_detect_threads() {
        let config = config_from(&[]);
        assert_eq!(config.thread_count, num_cpus::get());
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(config.log_config.is_none());
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn test_explicit_thread_count() {
        let config = config_from(&[(THREADS_ENV, "3")]);
        assert_eq!(config.thread_count, 3);

        let config = config_from(&[(THREADS_ENV, "0")]);
        assert_eq!(config.thread_count, num_cpus::get());
    }

    #[test]
    fn test_invalid_values_fall_back_with_warning() {
        let config = config_from(&[(THREADS_ENV, "many"), (LOG_LEVEL_ENV, "loud")]);
        assert_eq!(config.thread_count, num_cpus::get());
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(config.warnings().len(), 2);
    }

    #[test]
    fn test_log_settings() {
        let config = config_from(&[(LOG_LEVEL_ENV, "debug"), (LOG_CONFIG_ENV, "logs/log4rs.yml")]);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_config, Some(PathBuf::from("logs/log4rs.yml")));

        let config = config_from(&[(LOG_CONFIG_ENV, "  ")]);
        assert!(config.log_config.is_none());
    }
}
