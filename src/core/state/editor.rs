/// Cursor position in a text area, zero based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Everything needed to rebuild a text area between updates
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextAreaState {
    pub content: String,
    pub cursor: CursorPosition,
}

impl TextAreaState {
    pub fn new(content: String, cursor: CursorPosition) -> Self {
        Self { content, cursor }
    }

    /// Snapshot with the cursor placed after the last char
    pub fn with_cursor_at_end(content: impl Into<String>) -> Self {
        let content = content.into();
        let line = content.split('\n').count().saturating_sub(1);
        let column = content
            .rsplit('\n')
            .next()
            .map(|last| last.chars().count())
            .unwrap_or(0);

        Self {
            content,
            cursor: CursorPosition { line, column },
        }
    }
}
