use std::path::PathBuf;

use clap::Parser;
use wakr_common::config::{Config, DEFAULT_TOOL};

pub const USAGE: &str = "Usage: wakr <mac-dump-path> [log-path]";

#[derive(Parser, Debug)]
#[command(name = "wakr")]
#[command(version)]
#[command(about = "Wake every host listed in a network scan dump.")]
pub struct CommandLine {
    /// Scan dump containing `MAC Address:` lines (e.g. nmap output)
    pub mac_dump: PathBuf,
    /// Write logs to this file instead of the terminal
    pub log_path: Option<PathBuf>,
    /// Wake-on-LAN program to invoke
    #[arg(long, default_value = DEFAULT_TOOL)]
    pub tool: String,
    /// Disable colored terminal output
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    pub fn into_config(self) -> Config {
        Config {
            dump_path: self.mac_dump,
            log_path: self.log_path,
            tool: self.tool,
            color: !self.no_color,
        }
    }
}
