#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemMsg {
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),
    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}
