//! Extraction helpers for values the caller has already ruled out as failures.
//!
//! Taking the wrong variant is a bug, not a runtime condition. Each helper
//! logs what was found at error level and then panics.
//!
//! These lines always go to a colored console logger of their own, never to
//! the run's configured sink: a panic unwinds past the point where a file
//! log would be written.

use std::fmt::Debug;
use std::sync::OnceLock;

use tracing::{Dispatch, error};

use crate::logging::{self, LogSink, LoggerConfig};

static CONTRACT_LOGGER: OnceLock<Dispatch> = OnceLock::new();

fn contract_logger() -> &'static Dispatch {
    CONTRACT_LOGGER.get_or_init(|| Dispatch::new(logging::subscriber(LoggerConfig::new(true), LogSink::Console)))
}

fn report_to(dispatch: &Dispatch, message: &str) {
    tracing::dispatcher::with_default(dispatch, || error!("{message}"));
}

fn report(message: &str) {
    report_to(contract_logger(), message);
}

pub trait UnwrapOrLog<T> {
    fn unwrap_or_log(self) -> T;
    fn expect_or_log(self, message: &str) -> T;
}

pub trait UnwrapErrOrLog<E> {
    fn unwrap_err_or_log(self) -> E;
    fn expect_err_or_log(self, message: &str) -> E;
}

impl<T, E: Debug> UnwrapOrLog<T> for Result<T, E> {
    #[track_caller]
    fn unwrap_or_log(self) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                report(&format!("Err({e:?}).unwrap: unexpected unwrap"));
                panic!("Err.unwrap");
            }
        }
    }

    #[track_caller]
    fn expect_or_log(self, message: &str) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                report(&format!("Err({e:?}).expect: {message}"));
                panic!("Err.expect");
            }
        }
    }
}

impl<T: Debug, E> UnwrapErrOrLog<E> for Result<T, E> {
    #[track_caller]
    fn unwrap_err_or_log(self) -> E {
        match self {
            Err(e) => e,
            Ok(value) => {
                report(&format!("Ok({value:?}).unwrap_err: unexpected unwrap"));
                panic!("Ok.unwrap_err");
            }
        }
    }

    #[track_caller]
    fn expect_err_or_log(self, message: &str) -> E {
        match self {
            Err(e) => e,
            Ok(value) => {
                report(&format!("Ok({value:?}).expect_err: {message}"));
                panic!("Ok.expect_err");
            }
        }
    }
}

impl<T> UnwrapOrLog<T> for Option<T> {
    #[track_caller]
    fn unwrap_or_log(self) -> T {
        match self {
            Some(value) => value,
            None => {
                report("Unexpected None.unwrap()");
                panic!("None.unwrap");
            }
        }
    }

    #[track_caller]
    fn expect_or_log(self, message: &str) -> T {
        match self {
            Some(value) => value,
            None => {
                report(&format!("None.expect: {message}"));
                panic!("None.expect");
            }
        }
    }
}
