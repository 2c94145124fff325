//! Command parse result type.

use crate::models::{LogType, ModuleId};

/// The action a parsed command asks the terminal to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandAction {
    Navigate,
    List,
    Help,
    Clear,
    Pwd,
    None,
}

/// Result of parsing one line of terminal input.
///
/// Parsing never fails outright: errors come back as a result with
/// `success == false` and an ERROR-typed message for the log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub action: CommandAction,
    /// Navigation target; `None` means the root overview.
    pub module: Option<ModuleId>,
    pub message: String,
    pub kind: LogType,
}

impl CommandResult {
    /// Result for blank input: nothing to do, nothing to log.
    pub fn empty() -> Self {
        Self {
            success: false,
            action: CommandAction::None,
            module: None,
            message: String::new(),
            kind: LogType::Info,
        }
    }

    /// A failed parse with an ERROR message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: LogType::Error,
            ..Self::empty()
        }
    }

    /// A successful non-navigating action.
    pub fn ok(action: CommandAction, message: impl Into<String>, kind: LogType) -> Self {
        Self {
            success: true,
            action,
            module: None,
            message: message.into(),
            kind,
        }
    }

    /// A successful navigation to `module` (or the root when `None`).
    pub fn navigate(module: Option<ModuleId>, message: impl Into<String>) -> Self {
        Self {
            module,
            ..Self::ok(CommandAction::Navigate, message, LogType::System)
        }
    }
}
