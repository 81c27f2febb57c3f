use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompressionMsg {
    StartEditing,
    StopEditing,
    /// Key forwarded to the text area while editing
    ProcessTextAreaInput(KeyEvent),
    Paste(String),
    LoadNextSample,
    NextScheme,
    PreviousScheme,
    GrowWindow,
    ShrinkWindow,
}
