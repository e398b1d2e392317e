// src/logging.rs
use crossterm::style::Stylize;
use env_logger::{Env, Target};
use log::LevelFilter;

/// Installs `env_logger` on stderr at `level`; stdout only carries results.
/// A second call is a no-op.
pub fn init(level: LevelFilter) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr);
    builder.format_timestamp(None);
    builder.filter_level(level);
    let _ = builder.try_init();
}

/// The red `error:` prefix used for fatal messages from the binary.
pub fn error_prefix() -> String {
    "error:".red().bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init(LevelFilter::Off);
        init(LevelFilter::Debug);
        log::error!("after repeated init");
    }

    #[test]
    fn error_prefix_mentions_error() {
        assert!(error_prefix().contains("error:"));
    }
}
