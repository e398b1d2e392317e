// src/bin/main.rs
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;
use wordfreq_core::{logging, Cli, Config, OutputFormat, Report, WordFreqEngine, WordFreqError};

fn main() -> ExitCode {
    // Usage errors exit with status 2 from inside clap.
    let cli = Cli::parse();

    let config = match Config::resolve(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", logging::error_prefix(), e);
            return ExitCode::from(2);
        }
    };
    logging::init(config.log_level);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("{} {}", logging::error_prefix(), e);
            ExitCode::FAILURE
        }
    }
}

// Output is written only once the whole input has been read and ranked.
fn run(config: &Config) -> Result<(), WordFreqError> {
    let engine = WordFreqEngine::new(config);
    let report = match &config.input {
        Some(path) => {
            log::info!("reading {}", path.display());
            let file = File::open(path).map_err(WordFreqError::InputUnreadable)?;
            engine.run(BufReader::new(file))?
        }
        None => engine.run(io::stdin().lock())?,
    };
    write_report(&report, config.format)
}

fn write_report(report: &Report, format: OutputFormat) -> Result<(), WordFreqError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Plain => report.write_plain(&mut out),
        OutputFormat::Json => report.write_json(&mut out),
    }
}
