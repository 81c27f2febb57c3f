use std::time::Duration;

use crossterm::event::KeyEvent;

/// Events as they arrive from the terminal and the runner, before translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawMsg {
    /// Time measured by the runner since the previous tick
    Tick(Duration),
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,
    Key(KeyEvent),
    Paste(String),
    Error(String),
}
