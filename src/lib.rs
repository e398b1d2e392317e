// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod report;

pub use crate::config::{Cli, Config, OutputFormat};
pub use crate::core::engine::WordFreqEngine;
pub use crate::core::selector::{top_k, Admission, TopKSelector};
pub use crate::core::types::Candidate;
pub use crate::error::{Result, WordFreqError};
pub use crate::report::Report;
