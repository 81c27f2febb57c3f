use crossterm::event::{Event, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::core::{
    state::editor::{CursorPosition, TextAreaState},
    textarea_engine::TextAreaEngine,
};

/// Engine backed by tui-textarea: hydrate a throwaway `TextArea` from the
/// snapshot, feed it the keys, read the new snapshot back
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    fn hydrate(snapshot: &TextAreaState) -> TextArea<'static> {
        let mut textarea = TextArea::from(snapshot.content.split('\n').map(str::to_string));
        textarea.move_cursor(CursorMove::Jump(
            u16::try_from(snapshot.cursor.line).unwrap_or(u16::MAX),
            u16::try_from(snapshot.cursor.column).unwrap_or(u16::MAX),
        ));
        textarea
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let mut textarea = Self::hydrate(snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }

        let (line, column) = textarea.cursor();
        TextAreaState::new(textarea.lines().join("\n"), CursorPosition { line, column })
    }
}
