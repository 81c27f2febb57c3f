use crossterm::event::KeyEvent;

use crate::core::state::editor::TextAreaState;

/// Applies key events to a text area snapshot and returns the new snapshot
///
/// Implementations must be deterministic and side-effect free so they can be
/// called from `update`.
pub trait TextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState;
}

/// Ignores every key
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, _keys: &[KeyEvent]) -> TextAreaState {
        snapshot.clone()
    }
}
