use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::{
    domain::{compression::CodeAssignment, text::visible_symbol},
    presentation::config::{Mode, Styles},
};

/// Rank codes, most frequent symbol first
pub struct CodeTableWidget<'a> {
    assignment: &'a CodeAssignment,
    styles: &'a Styles,
}

impl<'a> CodeTableWidget<'a> {
    pub fn new(assignment: &'a CodeAssignment, styles: &'a Styles) -> Self {
        Self { assignment, styles }
    }
}

impl Widget for CodeTableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(["Symbol", "Count", "Code", "Bits"])
            .style(self.styles.get_or_default(Mode::Global, "title"));

        let rows = self.assignment.codes().iter().map(|code| {
            Row::new([
                Cell::from(visible_symbol(code.symbol)),
                Cell::from(code.count.to_string()),
                Cell::from(code.code.clone()),
                Cell::from(code.weighted_bits().to_string()),
            ])
        });

        let title = if self.assignment.is_prefix_free() {
            " Rank codes ".to_owned()
        } else {
            " Rank codes (not prefix-free) ".to_owned()
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Length(7),
                Constraint::Min(6),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
        Widget::render(table, area, buf);
    }
}
