//! Drives the real process-backed tool against a shell script that plays
//! the part of `wakeonlan`.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use wakr_core::session::{self, SessionError};
use wakr_core::tool::{ExternalTool, ToolError};

use crate::utils::{config_for, dump_file};

const FAKE_WAKEONLAN: &str = r#"#!/bin/sh
case "$1" in
  --help) echo "Usage: wakeonlan [options] [mac] ..."; exit 0 ;;
  00:00:00:00:00:02) echo "cannot reach host" >&2; exit 1 ;;
  *) echo "Sending magic packet to 255.255.255.255:9 with $1"; exit 0 ;;
esac
"#;

fn install_script(dir: &Path) -> PathBuf {
    let path = dir.join("wakeonlan");
    std::fs::write(&path, FAKE_WAKEONLAN).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[tokio::test]
async fn external_tool_end_to_end() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let script = install_script(dir.path());
    let dump = dump_file(
        "MAC Address: 00:00:00:00:00:01 (A)\n\
         MAC Address: 00:00:00:00:00:02 (B)\n\
         MAC Address: 00:00:00:00:00:03 (C)\n",
    );
    let mut cfg = config_for(dump.path());
    cfg.tool = script.display().to_string();

    let report = session::run(&cfg, Arc::new(ExternalTool::new(cfg.tool.clone()))).await?;

    assert_eq!(report.mac_addresses.len(), 3);
    assert_eq!(report.failures.len(), 1);
    let failure = &report.failures[0];
    assert_eq!(failure.mac_address, "00:00:00:00:00:02");
    match &failure.error {
        ToolError::Failed { code, output, .. } => {
            assert_eq!(*code, Some(1));
            assert_eq!(output, "cannot reach host");
        }
        other => panic!("expected Failed, got {other:?}"),
    }

    let missing = dir.path().join("not-installed");
    let result = session::run(
        &config_for(dump.path()),
        Arc::new(ExternalTool::new(missing.display().to_string())),
    )
    .await;
    assert!(matches!(
        result,
        Err(SessionError::MissingTool { source: ToolError::Spawn { .. }, .. })
    ));
    Ok(())
}
