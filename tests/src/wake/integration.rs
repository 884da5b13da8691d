use std::path::PathBuf;

use wakr_core::session::{self, SessionError};

use crate::utils::{capture_logs, config_for, dump_file, shared, FakeTool};

const THREE_HOSTS: &str = "\
Nmap scan report for 192.168.1.10
Host is up (0.0021s latency).
MAC Address: 00:11:22:33:44:01 (Intel Corporate)
Nmap scan report for 192.168.1.11
MAC Address: 00:11:22:33:44:02 (Raspberry Pi Foundation)
Nmap scan report for 192.168.1.12
MAC Address: 00:11:22:33:44:03 (Unknown)
Nmap done: 256 IP addresses (3 hosts up) scanned in 2.41 seconds
";

#[tokio::test]
async fn extracts_only_marker_lines() {
    let dump = dump_file("MAC Address: 00:11:22:33:44:55\nOther: xyz\n");
    let tool = shared(FakeTool::installed());

    let report = session::run(&config_for(dump.path()), tool.clone()).await.unwrap();

    assert_eq!(report.mac_addresses, vec!["00:11:22:33:44:55".to_string()]);
    assert_eq!(tool.wakes(), vec!["00:11:22:33:44:55".to_string()]);
}

#[tokio::test]
async fn unreadable_dump_stops_before_any_wake() {
    let dir = tempfile::tempdir().unwrap();
    let missing: PathBuf = dir.path().join("does-not-exist.txt");
    let tool = shared(FakeTool::installed());

    let result = session::run(&config_for(&missing), tool.clone()).await;

    assert!(matches!(result, Err(SessionError::Input { .. })));
    assert_eq!(tool.probes(), 0);
    assert!(tool.wakes().is_empty());
}

#[tokio::test]
async fn missing_tool_stops_before_any_wake() {
    let dump = dump_file(THREE_HOSTS);
    let tool = shared(FakeTool::missing());

    let result = session::run(&config_for(dump.path()), tool.clone()).await;

    match result {
        Err(SessionError::MissingTool { tool: name, .. }) => assert_eq!(name, "wakeonlan"),
        other => panic!("expected MissingTool, got {other:?}"),
    }
    assert_eq!(tool.probes(), 1);
    assert!(tool.wakes().is_empty());
}

#[tokio::test]
async fn one_failed_host_does_not_block_the_others() {
    let (logs, _guard) = capture_logs();
    let dump = dump_file(THREE_HOSTS);
    let tool = shared(FakeTool::installed().failing_for("00:11:22:33:44:02"));

    let report = session::run(&config_for(dump.path()), tool.clone()).await.unwrap();

    assert_eq!(report.mac_addresses.len(), 3);
    assert_eq!(tool.wakes().len(), 3);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].mac_address, "00:11:22:33:44:02");

    let logs = logs.contents();
    assert!(logs.contains(
        "] There was an error for MAC address 00:11:22:33:44:02: \
         `wakeonlan 00:11:22:33:44:02` exited with status 1: network unreachable"
    ));
    assert!(logs.lines().last().unwrap().ends_with("] Finished!"));
}

#[tokio::test]
async fn empty_dump_completes_without_waking() {
    let dump = dump_file("Nmap done: 0 hosts up\n");
    let tool = shared(FakeTool::installed());

    let report = session::run(&config_for(dump.path()), tool.clone()).await.unwrap();

    assert!(report.mac_addresses.is_empty());
    assert!(report.failures.is_empty());
    assert_eq!(tool.probes(), 1);
    assert!(tool.wakes().is_empty());
}

#[tokio::test]
async fn progress_is_logged_in_order() {
    let (logs, _guard) = capture_logs();
    let dump = dump_file(THREE_HOSTS);
    let tool = shared(FakeTool::installed());

    session::run(&config_for(dump.path()), tool).await.unwrap();

    let logs = logs.contents();
    let expected = [
        "Wake instantiated",
        "Reading MAC address file",
        "File read successfully",
        "Trying to decode the file",
        "Decoded such MAC addresses:\n\t00:11:22:33:44:01 00:11:22:33:44:02 00:11:22:33:44:03",
        "Checking if `wakeonlan` is installed",
        "`wakeonlan` exists. Continuing",
        "Running all `wakeonlan` commands now",
        "Finished!",
    ];
    let mut cursor = 0;
    for message in expected {
        let found = logs[cursor..]
            .find(message)
            .unwrap_or_else(|| panic!("missing or out of order: {message}\n{logs}"));
        cursor += found + message.len();
    }
    assert!(logs.lines().all(|line| !line.contains('\x1b')));
}

#[tokio::test]
async fn failed_run_logs_are_written_to_the_log_file() {
    let (logs, _guard) = capture_logs();
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("wake.log");
    let tool = shared(FakeTool::installed());

    let result = session::run(&config_for(&dir.path().join("missing.txt")), tool).await;
    assert!(result.is_err());
    logs.persist(&log_path).unwrap();

    let written = std::fs::read_to_string(&log_path).unwrap();
    assert!(written.contains("Reading MAC address file"));
    assert!(!written.contains("File read successfully"));
}
