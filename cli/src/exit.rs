//! Process exit codes. These are stable for scripts that call `wakr`.

use wakr_core::session::SessionError;

pub mod codes {
    pub const SUCCESS: u8 = 0;
    /// The scan dump could not be read.
    pub const NO_INPUT: u8 = 1;
    /// The wake-on-LAN program is missing or unusable.
    pub const MISSING_TOOL: u8 = 2;
    /// Required argument missing or arguments malformed.
    pub const USAGE: u8 = 3;
}

pub fn exit_code(error: &SessionError) -> u8 {
    match error {
        SessionError::Input { .. } => codes::NO_INPUT,
        SessionError::MissingTool { .. } => codes::MISSING_TOOL,
    }
}
