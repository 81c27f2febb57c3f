use color_eyre::eyre::Result;
use ratatui::layout::Rect;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    infrastructure::tui::TuiLike,
};

/// Runs the side effects `update` asked for against a terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct CmdExecutor;

impl CmdExecutor {
    pub fn new() -> Self {
        Self
    }

    pub fn execute_command(&self, cmd: &Cmd, tui: &mut dyn TuiLike) -> Result<()> {
        match cmd {
            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                tui.resize(Rect::new(0, 0, *width, *height))?;
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }
        }

        Ok(())
    }

    /// Executes every command, logging failures instead of stopping at the first
    pub fn execute_commands(&self, commands: &[Cmd], tui: &mut dyn TuiLike) -> Vec<String> {
        let mut failures = Vec::new();

        for cmd in commands {
            if let Err(e) = self.execute_command(cmd, tui) {
                let message = format!("Failed to execute {}: {e}", cmd.name());
                log::error!("{message}");
                failures.push(message);
            }
        }

        failures
    }
}
