// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! Logger setup for the command line.

use chrono::Local;
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Log to stderr with a timestamp, at `level` unless `RUST_LOG` says otherwise.
pub fn setup_logging(level: LevelFilter) {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .parse_default_env()
        .init();
}
