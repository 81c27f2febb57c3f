use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{
        config::{Action, Mode},
        widgets::status_bar::StatusBarWidget,
    },
};

/// Hints for the active mode, followed by the global ones
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    fn actions(mode: Mode) -> &'static [(Action, &'static str)] {
        match mode {
            Mode::Compression => &[
                (Action::StartEditing, "edit"),
                (Action::LoadNextSample, "sample"),
                (Action::NextScheme, "scheme"),
                (Action::GrowWindow, "window+"),
                (Action::ShrinkWindow, "window-"),
            ],
            Mode::Cost => &[
                (Action::NextField, "next field"),
                (Action::Increase, "increase"),
                (Action::Decrease, "decrease"),
            ],
            Mode::RateLimit => &[
                (Action::ToggleSimulation, "start/stop"),
                (Action::ResetSimulation, "reset"),
                (Action::NextStrategy, "strategy"),
                (Action::ToggleBurst, "burst"),
            ],
            Mode::Editing => &[(Action::StopEditing, "done")],
            Mode::Global => &[],
        }
    }

    /// `(key, label)` pairs for every action that has a binding
    pub fn hints(state: &AppState) -> Vec<(String, &'static str)> {
        let keybindings = &state.config.config.keybindings;
        let mode = state.mode();

        let mut hints: Vec<(String, &'static str)> = Self::actions(mode)
            .iter()
            .filter_map(|(action, label)| {
                keybindings
                    .key_hint(mode, action)
                    .map(|key| (key, *label))
            })
            .collect();

        if mode != Mode::Editing {
            let global = [(Action::NextTab, "next tab"), (Action::Quit, "quit")];
            hints.extend(global.iter().filter_map(|(action, label)| {
                keybindings
                    .key_hint(Mode::Global, action)
                    .map(|key| (key, *label))
            }));
        }

        hints
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let widget = StatusBarWidget::new(
            Self::hints(state),
            state.system.status_message.as_deref(),
            &state.config.config.styles,
        );
        frame.render_widget(widget, area);
    }
}

impl Default for StatusBarComponent {
    fn default() -> Self {
        Self::new()
    }
}
