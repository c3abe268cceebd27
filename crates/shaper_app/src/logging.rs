//! Logging initialization for shaper_app.
//!
//! Logs go to `./shaper.log`; the terminal is reserved for the workflow UI.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{CombinedLogger, Config, ConfigBuilder, WriteLogger};

/// Initialize the file logger. Logging is best-effort: if the log file
/// cannot be created the app runs without it.
pub fn initialize() {
    let level = LevelFilter::Info;
    let config = build_config();

    let log_path = PathBuf::from("./shaper.log");
    match File::create(&log_path) {
        Ok(file) => {
            let _ = CombinedLogger::init(vec![WriteLogger::new(level, config, file)]);
        }
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                log_path, err
            );
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
