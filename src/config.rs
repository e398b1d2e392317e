// src/config.rs
use crate::error::{Result, WordFreqError};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const DEFAULT_CAPACITY: usize = 10;
pub const CAPACITY_ENV: &str = "WORDFREQ_CAPACITY";

/// Counts whitespace-separated words (ASCII case-insensitive) and prints the
/// most frequent ones as '<count> <word>', lowest count first.
#[derive(Parser, Debug)]
#[command(name = "wordfreq", version, long_about = None)]
pub struct Cli {
    /// Read from FILE instead of stdin ('-' means stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// How many words to keep (0 prints nothing)
    #[arg(short = 'k', long, value_name = "N", env = "WORDFREQ_CAPACITY")]
    pub capacity: Option<usize>,

    /// Print a JSON report instead of plain lines
    #[arg(long)]
    pub json: bool,

    /// Read capacity/format from a JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// No log output
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub capacity: usize,
    pub format: OutputFormat,
    /// `None` reads standard input.
    pub input: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            format: OutputFormat::Plain,
            input: None,
            log_level: LevelFilter::Warn,
        }
    }
}

/// Keys accepted in a `--config` file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    capacity: Option<usize>,
    format: Option<OutputFormat>,
}

impl Config {
    /// Layers defaults, then the config file, then `-k`/`WORDFREQ_CAPACITY`
    /// (clap already gives the flag precedence over the variable).
    pub fn resolve(cli: Cli) -> Result<Self> {
        let mut config = Config::default();

        if let Some(path) = &cli.config {
            let file = load_file(path)?;
            if let Some(capacity) = file.capacity {
                config.capacity = capacity;
            }
            if let Some(format) = file.format {
                config.format = format;
            }
        }

        if let Some(capacity) = cli.capacity {
            config.capacity = capacity;
        }
        if cli.json {
            config.format = OutputFormat::Json;
        }
        config.input = cli.input.filter(|path| path.as_path() != Path::new("-"));
        config.log_level = match (cli.quiet, cli.verbose) {
            (true, _) => LevelFilter::Off,
            (false, 0) => LevelFilter::Warn,
            (false, 1) => LevelFilter::Info,
            (false, 2) => LevelFilter::Debug,
            (false, _) => LevelFilter::Trace,
        };

        Ok(config)
    }
}

fn load_file(path: &Path) -> Result<FileConfig> {
    let config_err = |source: Box<dyn std::error::Error + Send + Sync>| WordFreqError::ConfigFile {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(|e| config_err(Box::new(e)))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| config_err(Box::new(e)))
}
