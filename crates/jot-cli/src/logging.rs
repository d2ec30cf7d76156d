//! Tracing setup
//!
//! Logs go to stderr unless `log_file` is configured. `JOT_LOG` takes a full
//! `EnvFilter` directive and overrides the level picked from `--verbose`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

use jot_core::Config;

const LOG_ENV: &str = "JOT_LOG";

/// Install the global subscriber; failures only print a warning
pub fn init(config: &Config, verbose: bool) {
    let level = default_level(verbose);
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false);

    // Ignore the error if a subscriber is already installed
    match &config.log_file {
        Some(path) => {
            let file = match OpenOptions::new().create(true).append(true).open(path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Warning: Could not open log file {:?}: {}", path, e);
                    return;
                }
            };
            let _ = builder.with_writer(Mutex::new(file)).try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }

    debug!("Logging initialized at {}", level);
}

fn default_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

fn default_directive(level: Level) -> String {
    let level = level.to_string().to_lowercase();
    format!("jot_core={},jot_cli={}", level, level)
}
