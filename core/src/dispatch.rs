//! Fan-out of wake requests.
//!
//! Every address gets its own task and every task runs to completion. A
//! failure for one host never cancels or delays the others.

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::tool::{ToolError, WakeTool};

#[derive(Debug)]
pub struct WakeFailure {
    pub mac_address: String,
    pub error: ToolError,
}

/// Wakes every address concurrently and returns the ones that failed.
///
/// Failures come back in completion order, not input order.
pub async fn dispatch<T>(tool: Arc<T>, mac_addresses: &[String]) -> Vec<WakeFailure>
where
    T: WakeTool + ?Sized + 'static,
{
    let mut tasks = JoinSet::new();

    for mac_address in mac_addresses {
        let tool = tool.clone();
        let mac_address = mac_address.clone();

        tasks.spawn(async move {
            match tool.wake(&mac_address).await {
                Ok(()) => None,
                Err(error) => Some(WakeFailure { mac_address, error }),
            }
        });
    }

    let mut failures = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Some(failure)) => failures.push(failure),
            Ok(None) => {}
            // Tasks are never aborted, so a join error is a panic inside `wake`.
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }
    failures
}
