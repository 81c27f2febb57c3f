use serde::{Deserialize, Serialize};

/// Terminal side effects executed by the runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Side effects requested by `update`
///
/// Every widget is pure, so the only effects left are terminal control and
/// logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    Tui(TuiCommand),
    LogInfo { message: String },
    LogError { message: String },
}

impl Cmd {
    pub fn log_info(message: impl Into<String>) -> Cmd {
        Cmd::LogInfo {
            message: message.into(),
        }
    }

    pub fn log_error(message: impl Into<String>) -> Cmd {
        Cmd::LogError {
            message: message.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui::Resize",
            Cmd::LogInfo { .. } => "LogInfo",
            Cmd::LogError { .. } => "LogError",
        }
    }
}
