// Bottlenecks - Free and Open Source Software Statement
//
// This project, bottlenecks, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 1.0.0
//
// Calibration driver: bottlenecks calibrate PROGRAM [--target-duration S]
// [--tolerance F] [--threads N]. Prints the calibrated SIZE on stdout.

use anyhow::Context;
use bottlenecks::benchmark::{CalibrationConfig, Calibrator, ProcessProbe};
use bottlenecks::core::{CalibrateArgs, DriverArgs, DriverCommand, RuntimeConfig};
use bottlenecks::utils::format::FormatUtils;
use bottlenecks::utils::logging::init_logging;
use clap::Parser;
use log::{LevelFilter, error, info};
use std::process::ExitCode;

const LOG_TARGET: &str = "bottlenecks::driver";

#[tokio::main]
async fn main() -> ExitCode {
    let args = DriverArgs::parse();

    let config = RuntimeConfig::from_env(LevelFilter::Info);
    if let Err(e) = init_logging(&config) {
        eprintln!("❌ Error: {:#}", e);
        return ExitCode::FAILURE;
    }
    config.log_warnings();

    let result = match args.command {
        DriverCommand::Calibrate(calibrate) => handle_calibrate(&calibrate).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(target: LOG_TARGET, "{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn handle_calibrate(args: &CalibrateArgs) -> anyhow::Result<()> {
    let config = CalibrationConfig::new(args.target_duration, args.tolerance)?;
    info!(target: LOG_TARGET,
        "Calibrating {:?} for {} with {} threads (tolerance {:.0}%)",
        args.program,
        FormatUtils::format_seconds(config.target),
        args.threads,
        args.tolerance * 100.0
    );

    let probe = ProcessProbe::new(&args.program, args.threads);
    let mut calibrator = Calibrator::new(config, probe);
    let calibration = calibrator
        .run()
        .await
        .with_context(|| format!("Calibration of {:?} failed", args.program))?;

    info!(target: LOG_TARGET,
        "SIZE={} after {} probes ({})",
        calibration.size,
        calibration.probes,
        FormatUtils::format_seconds(calibration.duration)
    );
    println!("{}", calibration.size);
    Ok(())
}
