// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::Write;

use log::LevelFilter;

pub(crate) struct Logger;

impl Logger {
    /// Logs to stderr at `Warn`, or `Debug` when `debug` is set. `RUST_LOG`
    /// overrides both.
    pub fn initialize(debug: bool) {
        let level = if debug { LevelFilter::Debug } else { LevelFilter::Warn };

        let result = env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .format(|f, record| {
                writeln!(f, "[{}] {}: {}", record.level(), record.target(), record.args())
            })
            .try_init();

        if let Err(e) = result {
            eprintln!("Failed to install logger: {e}");
            return;
        }

        log::info!("Logger initialized at {level}");
    }
}
