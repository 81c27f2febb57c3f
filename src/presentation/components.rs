//! Per-tab views and the screen layout around them
//!
//! Components render from `AppState` only. The compression view keeps a
//! `TextArea` of its own, synced from the state snapshot before each frame.

use ratatui::prelude::*;

use crate::{
    core::state::{navigation::Tab, AppState},
    presentation::widgets::tab_bar::TabBarWidget,
};

pub mod compression;
pub mod cost;
pub mod rate_limit;
pub mod status_bar;

pub use compression::CompressionComponent;
pub use cost::CostComponent;
pub use rate_limit::RateLimitComponent;
pub use status_bar::StatusBarComponent;

pub struct Components<'a> {
    pub compression: CompressionComponent<'a>,
    pub cost: CostComponent,
    pub rate_limit: RateLimitComponent,
    pub status_bar: StatusBarComponent,
}

impl Components<'_> {
    pub fn new() -> Self {
        Self {
            compression: CompressionComponent::new(),
            cost: CostComponent::new(),
            rate_limit: RateLimitComponent::new(),
            status_bar: StatusBarComponent::new(),
        }
    }

    /// Tab bar, the current tab, then two status lines
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(frame.area());

        let styles = &state.config.config.styles;
        frame.render_widget(TabBarWidget::new(state.current_tab(), styles), layout[0]);

        match state.current_tab() {
            Tab::Compression => self.compression.view(state, frame, layout[1]),
            Tab::Cost => self.cost.view(state, frame, layout[1]),
            Tab::RateLimit => self.rate_limit.view(state, frame, layout[1]),
        }

        self.status_bar.view(state, frame, layout[2]);
    }
}

impl Default for Components<'_> {
    fn default() -> Self {
        Self::new()
    }
}
