mod commands;
mod exit;
mod terminal;

use std::process::ExitCode;
use std::sync::Arc;

use clap::error::ErrorKind;
use tracing::error;

use commands::{CommandLine, USAGE};
use exit::{codes, exit_code};
use terminal::logging;
use wakr_core::session;
use wakr_core::tool::ExternalTool;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let commands = match CommandLine::try_parse_args() {
        Ok(commands) => commands,
        Err(e) => return usage_error(e),
    };
    let cfg = commands.into_config();

    let buffer = logging::init_logging(&cfg);
    let tool = Arc::new(ExternalTool::new(cfg.tool.clone()));

    let code = match session::run(&cfg, tool).await {
        Ok(_) => codes::SUCCESS,
        Err(e) => {
            error!("{e}");
            exit_code(&e)
        }
    };

    if let (Some(buffer), Some(path)) = (buffer, &cfg.log_path) {
        if let Err(e) = logging::persist_logs(&buffer, path) {
            eprintln!("error: {e:#}");
        }
    }

    ExitCode::from(code)
}

fn usage_error(e: clap::Error) -> ExitCode {
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        let _ = e.print();
        return ExitCode::from(codes::SUCCESS);
    }

    logging::init_console_logging();
    error!("{USAGE}");
    if let Some(reason) = e.kind().as_str() {
        error!("{reason}");
    }
    ExitCode::from(codes::USAGE)
}
