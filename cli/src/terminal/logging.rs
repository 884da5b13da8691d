use std::path::Path;

use anyhow::Context;
use wakr_common::config::Config;
use wakr_common::logging::{self, LogBuffer, LogSink, LoggerConfig};

/// Logs go to a buffer when a log file was requested, to the terminal otherwise.
pub fn sink_for(cfg: &Config) -> LogSink {
    match cfg.log_path {
        Some(_) => LogSink::Buffer(LogBuffer::new()),
        None => LogSink::Console,
    }
}

/// Installs the global logger for this run and returns the buffer to flush, if any.
pub fn init_logging(cfg: &Config) -> Option<LogBuffer> {
    let sink = sink_for(cfg);
    let buffer = match &sink {
        LogSink::Buffer(buffer) => Some(buffer.clone()),
        LogSink::Console => None,
    };
    logging::init(LoggerConfig::new(cfg.colorize_logs()), sink);
    buffer
}

/// Colored terminal logger used before any configuration exists.
pub fn init_console_logging() {
    logging::init(LoggerConfig::new(true), LogSink::Console);
}

pub fn persist_logs(buffer: &LogBuffer, path: &Path) -> anyhow::Result<()> {
    buffer
        .persist(path)
        .with_context(|| format!("failed to write log file {}", path.display()))
}
