use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    domain::text::truncate_width,
    presentation::config::{Mode, Styles},
};

/// Key hints on the first line, the status message on the second
pub struct StatusBarWidget<'a> {
    hints: Vec<(String, &'static str)>,
    message: Option<&'a str>,
    styles: &'a Styles,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(
        hints: Vec<(String, &'static str)>,
        message: Option<&'a str>,
        styles: &'a Styles,
    ) -> Self {
        Self {
            hints,
            message,
            styles,
        }
    }

    pub fn hint_line(&self) -> String {
        self.hints
            .iter()
            .map(|(key, label)| format!("{key} {label}"))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(1), Constraint::Length(1)],
        )
        .split(area);
        let width = usize::from(area.width);

        Paragraph::new(truncate_width(&self.hint_line(), width))
            .style(self.styles.get_or_default(Mode::Global, "hint"))
            .render(layout[0], buf);

        let message = self.message.unwrap_or_default();
        let style = if message.starts_with("Error") {
            self.styles.get_or_default(Mode::Global, "error")
        } else {
            self.styles.get_or_default(Mode::Global, "status")
        };
        Paragraph::new(truncate_width(message, width))
            .style(style)
            .render(layout[1], buf);
    }
}
