use std::path::PathBuf;

/// Executable invoked when no `--tool` override is given.
pub const DEFAULT_TOOL: &str = "wakeonlan";

pub struct Config {
    /// Scan dump holding the `MAC Address:` lines.
    pub dump_path: PathBuf,
    /// When set, every log line is buffered and written here once the run ends.
    ///
    /// Logs go to the terminal otherwise.
    pub log_path: Option<PathBuf>,
    /// Wake-on-LAN program used for both the probe and the per-address calls.
    pub tool: String,
    /// Colorize terminal output. Ignored for file logs.
    pub color: bool,
}

impl Config {
    pub fn new(dump_path: impl Into<PathBuf>) -> Self {
        Self {
            dump_path: dump_path.into(),
            log_path: None,
            tool: DEFAULT_TOOL.to_string(),
            color: true,
        }
    }

    /// Whether log lines should carry color escapes.
    pub fn colorize_logs(&self) -> bool {
        self.color && self.log_path.is_none()
    }
}
