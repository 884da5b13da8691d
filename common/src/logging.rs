//! # Log Output
//!
//! Every line written by the tool has the shape
//!
//! ```text
//! [<color><level> : <local timestamp><reset>] <message>
//! ```
//!
//! Call sites use the plain `tracing` macros (`info!`, `warn!`, `error!`).
//! This module turns those events into the line above and hands them to a
//! [`LogSink`]: the terminal, or an in-memory [`LogBuffer`] that is written
//! to disk once at the end of a run.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use colored::Color;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

use crate::contract::UnwrapOrLog;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

impl From<&Level> for LogLevel {
    fn from(level: &Level) -> Self {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warning,
            _ => LogLevel::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Escape sequences used around the level tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub info: String,
    pub warning: String,
    pub error: String,
    pub reset: String,
}

impl Palette {
    fn start(&self, level: LogLevel) -> &str {
        match level {
            LogLevel::Info => &self.info,
            LogLevel::Warning => &self.warning,
            LogLevel::Error => &self.error,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            info: ansi(Color::Blue),
            warning: ansi(Color::Yellow),
            error: ansi(Color::Red),
            reset: RESET.to_string(),
        }
    }
}

fn ansi(color: Color) -> String {
    format!("\x1b[{}m", color.to_fg_str())
}

#[derive(Debug, Clone, Default)]
pub struct LoggerConfig {
    pub palette: Palette,
    pub color_enabled: bool,
}

impl LoggerConfig {
    pub fn new(color_enabled: bool) -> Self {
        Self {
            palette: Palette::default(),
            color_enabled,
        }
    }
}

/// `[<color><level> : <timestamp><reset>]`
pub fn format_prefix(level: LogLevel, timestamp: &str, config: &LoggerConfig) -> String {
    let (start, reset) = if config.color_enabled {
        (config.palette.start(level), config.palette.reset.as_str())
    } else {
        ("", "")
    };
    format!("[{start}{level} : {timestamp}{reset}]")
}

pub fn format_line(level: LogLevel, timestamp: &str, message: &str, config: &LoggerConfig) -> String {
    format!("{} {}", format_prefix(level, timestamp, config), message)
}

pub fn local_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub struct WakrFormatter {
    config: LoggerConfig,
}

impl WakrFormatter {
    pub fn new(config: LoggerConfig) -> Self {
        Self { config }
    }
}

impl<S, N> FormatEvent<S, N> for WakrFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let level = LogLevel::from(event.metadata().level());
        let prefix = format_prefix(level, &local_timestamp(), &self.config);

        write!(writer, "{} ", prefix)?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Shared in-memory log destination.
///
/// Clones write into the same buffer.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().expect_or_log("log buffer lock poisoned");
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Writes everything logged so far to `path`, replacing any existing file.
    pub fn persist(&self, path: &Path) -> io::Result<()> {
        std::fs::write(path, self.contents())
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Writes happen inside event dispatch, so a poisoned lock is recovered
        // instead of logged.
        let mut bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum LogSink {
    Console,
    Buffer(LogBuffer),
}

pub enum SinkWriter {
    Console(io::Stdout),
    Buffer(LogBuffer),
}

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            SinkWriter::Console(out) => out.write(buf),
            SinkWriter::Buffer(buffer) => buffer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            SinkWriter::Console(out) => out.flush(),
            SinkWriter::Buffer(buffer) => buffer.flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = SinkWriter;

    fn make_writer(&'a self) -> Self::Writer {
        match self {
            LogSink::Console => SinkWriter::Console(io::stdout()),
            LogSink::Buffer(buffer) => SinkWriter::Buffer(buffer.clone()),
        }
    }
}

/// Builds a subscriber that formats every event with `config` and sends it to `sink`.
pub fn subscriber(config: LoggerConfig, sink: LogSink) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .event_format(WakrFormatter::new(config))
        .with_writer(sink)
        .finish()
}

/// Installs the process-wide subscriber. Only the first call has an effect.
pub fn init(config: LoggerConfig, sink: LogSink) {
    let _ = tracing::subscriber::set_global_default(subscriber(config, sink));
}
