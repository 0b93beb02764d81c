// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/logging.rs
// Version: 1.0.0
//
// This file sets up the log4rs backend behind the `log` facade. By default a
// single console appender writes to stderr, leaving stdout free for program
// output. A log4rs YAML file named by BOTTLENECKS_LOG_CONFIG replaces it.
//
// Tree Location:
// - src/utils/logging.rs (logger initialisation)
// - Depends on: log4rs, anyhow

use crate::core::RuntimeConfig;
use anyhow::Context;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const STDERR_APPENDER: &str = "stderr";

/// `12:04:31.207 INFO  bottlenecks::calibrate - message`
pub const LOG_PATTERN: &str = "{d(%H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";

/// Build the built-in stderr configuration at `level`
pub fn console_config(level: LevelFilter) -> anyhow::Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(level))?;
    Ok(config)
}

/// Install the global logger. Fails if a logger is already installed.
pub fn init_logging(config: &RuntimeConfig) -> anyhow::Result<()> {
    match &config.log_config {
        Some(path) => log4rs::init_file(path, Default::default())
            .with_context(|| format!("Could not load log configuration {:?}", path)),
        None => {
            log4rs::init_config(console_config(config.log_level)?)
                .context("Could not install console logger")?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_config_has_stderr_root() {
        let config = console_config(LevelFilter::Info).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Info);
        assert_eq!(config.root().appenders().to_vec(), vec![STDERR_APPENDER.to_string()]);
        assert_eq!(config.appenders().len(), 1);
    }
}
