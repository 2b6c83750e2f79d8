use env_logger::Builder;
use log::LevelFilter;
use std::env;
use std::io::Write;

use crate::errors::prelude::*;

pub struct ClDefaultLogger;

impl ClDefaultLogger {
    /// Installs `env_logger` as the global logger. `pattern` uses the `RUST_LOG`
    /// syntax and falls back to the `RUST_LOG` variable, logging nothing when
    /// neither is set.
    pub fn init(pattern: Option<String>) -> ClResult<()> {
        let pattern = pattern.or_else(|| env::var("RUST_LOG").ok());

        Builder::new()
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{:>5}|{:<30}|{:>35}:{:<4}| {}",
                    record.level(),
                    record.target(),
                    record.file().unwrap_or(""),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .filter(None, LevelFilter::Off)
            .parse_filters(pattern.as_deref().unwrap_or(""))
            .try_init()?;

        Ok(())
    }
}
