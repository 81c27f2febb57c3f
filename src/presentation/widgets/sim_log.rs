use std::collections::VecDeque;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

use crate::{
    domain::rate_limit::{Outcome, SimEvent},
    presentation::config::{Mode, Styles},
};

/// Request outcomes, newest first
pub struct SimLogWidget<'a> {
    events: &'a VecDeque<SimEvent>,
    styles: &'a Styles,
}

impl<'a> SimLogWidget<'a> {
    pub fn new(events: &'a VecDeque<SimEvent>, styles: &'a Styles) -> Self {
        Self { events, styles }
    }

    pub fn format_event(event: &SimEvent) -> String {
        format!(
            "{:>7.2}s  #{:<4} {}",
            event.at_ms as f64 / 1000.0,
            event.request_id,
            event.outcome
        )
    }

    fn style_for(&self, outcome: &Outcome) -> Style {
        let name = match outcome {
            Outcome::Accepted => "ok",
            Outcome::Queued { .. } => "warning",
            _ => "error",
        };
        self.styles.get_or_default(Mode::RateLimit, name)
    }
}

impl Widget for SimLogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .events
            .iter()
            .rev()
            .map(|event| {
                ListItem::new(Self::format_event(event)).style(self.style_for(&event.outcome))
            })
            .collect();

        let title = if items.is_empty() {
            " Log (press s to start) ".to_owned()
        } else {
            format!(" Log ({}) ", items.len())
        };

        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        Widget::render(list, area, buf);
    }
}
