//! # Wake-on-LAN Tool
//!
//! Packet construction is delegated to an external program (`wakeonlan` by
//! default). [`WakeTool`] is the seam between the session and that program;
//! [`ExternalTool`] is the real implementation backed by `tokio::process`.

use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

use wakr_common::config::DEFAULT_TOOL;

/// Argument used to check that the program is installed and runnable.
pub const PROBE_ARG: &str = "--help";

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` {}{}", exit_label(.code), output_suffix(.output))]
    Failed {
        command: String,
        code: Option<i32>,
        output: String,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

fn output_suffix(output: &str) -> String {
    if output.is_empty() {
        String::new()
    } else {
        format!(": {output}")
    }
}

#[async_trait]
pub trait WakeTool: Send + Sync {
    /// Program name as shown in log lines.
    fn name(&self) -> &str;

    /// Succeeds when the program can be run at all.
    async fn probe(&self) -> Result<(), ToolError>;

    /// Sends one magic packet to `mac_address`.
    async fn wake(&self, mac_address: &str) -> Result<(), ToolError>;
}

#[derive(Debug, Clone)]
pub struct ExternalTool {
    program: String,
}

impl ExternalTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runs `<program> <arg>` directly, without a shell, so a malformed
    /// address token is passed through as a single argument.
    async fn invoke(&self, arg: &str) -> Result<(), ToolError> {
        let command = format!("{} {}", self.program, arg);

        let output = Command::new(&self.program)
            .arg(arg)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ToolError::Spawn {
                command: command.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let output_text = if stderr.is_empty() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr
        };

        Err(ToolError::Failed {
            command,
            code: output.status.code(),
            output: output_text,
        })
    }
}

impl Default for ExternalTool {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL)
    }
}

#[async_trait]
impl WakeTool for ExternalTool {
    fn name(&self) -> &str {
        &self.program
    }

    async fn probe(&self) -> Result<(), ToolError> {
        self.invoke(PROBE_ARG).await
    }

    async fn wake(&self, mac_address: &str) -> Result<(), ToolError> {
        self.invoke(mac_address).await
    }
}
