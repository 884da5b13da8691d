//! # Wake Session
//!
//! One run of the tool, start to finish:
//!
//! 1. read the scan dump,
//! 2. extract the MAC addresses,
//! 3. make sure the wake program is usable,
//! 4. wake every address and report the failures.
//!
//! The first two failures are terminal and come back as [`SessionError`].
//! Per-address failures are only logged.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use wakr_common::config::Config;
use wakr_common::network::mac;

use crate::dispatch::{self, WakeFailure};
use crate::tool::{ToolError, WakeTool};

const ADDRESSES_PER_LINE: usize = 3;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Could not read the file with MAC addresses ({}): {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{tool} does not exist: {source}")]
    MissingTool {
        tool: String,
        #[source]
        source: ToolError,
    },
}

#[derive(Debug)]
pub struct WakeReport {
    pub mac_addresses: Vec<String>,
    pub failures: Vec<WakeFailure>,
}

pub async fn run<T>(cfg: &Config, tool: Arc<T>) -> Result<WakeReport, SessionError>
where
    T: WakeTool + ?Sized + 'static,
{
    info!("Wake instantiated");

    info!("Reading MAC address file");
    let dump = read_dump(&cfg.dump_path)?;
    info!("File read successfully");

    info!("Trying to decode the file");
    let mac_addresses = mac::extract(&dump);
    info!(
        "Decoded such MAC addresses:\n\t{}",
        mac::grouped(&mac_addresses, ADDRESSES_PER_LINE)
    );

    let name = tool.name().to_string();
    info!("Checking if `{name}` is installed");
    tool.probe()
        .await
        .map_err(|source| SessionError::MissingTool {
            tool: name.clone(),
            source,
        })?;
    info!("`{name}` exists. Continuing");

    info!("Running all `{name}` commands now");
    let failures = dispatch::dispatch(tool, &mac_addresses).await;
    for failure in &failures {
        info!(
            "There was an error for MAC address {}: {}",
            failure.mac_address, failure.error
        );
    }
    info!("Finished!");

    Ok(WakeReport {
        mac_addresses,
        failures,
    })
}

fn read_dump(path: &Path) -> Result<String, SessionError> {
    std::fs::read_to_string(path).map_err(|source| SessionError::Input {
        path: path.to_path_buf(),
        source,
    })
}
