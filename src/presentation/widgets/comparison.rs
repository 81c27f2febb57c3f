use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Row, Table},
};

use crate::{
    domain::{
        pricing::{format_usd, ModelKey, PriceQuote},
        text::truncate_width,
    },
    presentation::config::{Mode, Styles},
};

/// Every model's monthly cost for the current workload, cheapest first
pub struct ComparisonWidget<'a> {
    rows: &'a [(ModelKey, PriceQuote)],
    selected: &'a ModelKey,
    styles: &'a Styles,
}

impl<'a> ComparisonWidget<'a> {
    const NAME_WIDTH: usize = 30;

    pub fn new(
        rows: &'a [(ModelKey, PriceQuote)],
        selected: &'a ModelKey,
        styles: &'a Styles,
    ) -> Self {
        Self {
            rows,
            selected,
            styles,
        }
    }

    /// Monthly cost of the selected model minus the cheapest one
    pub fn savings_available(&self) -> Option<f64> {
        let cheapest = self.rows.first()?.1.monthly_cost;
        let selected = self
            .rows
            .iter()
            .find(|(key, _)| key == self.selected)?
            .1
            .monthly_cost;
        Some(selected - cheapest)
    }
}

impl Widget for ComparisonWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let highlight = self.styles.get_or_default(Mode::Global, "highlight");

        let rows = self.rows.iter().map(|(key, quote)| {
            let marker = if key == self.selected { "▶" } else { " " };
            let name = truncate_width(
                &format!("{}/{}", key.provider, key.model),
                Self::NAME_WIDTH,
            );
            let row = Row::new([
                marker.to_owned(),
                name,
                format_usd(quote.monthly_cost, 2),
                format_usd(quote.yearly_cost, 2),
            ]);
            if key == self.selected {
                row.style(highlight)
            } else {
                row
            }
        });

        let title = match self.savings_available() {
            Some(savings) if savings > 0.0 => format!(
                " All models · cheapest saves {} / month ",
                format_usd(savings, 2)
            ),
            _ => " All models ".to_owned(),
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Length(Self::NAME_WIDTH as u16),
                Constraint::Length(14),
                Constraint::Length(14),
            ],
        )
        .header(
            Row::new(["", "Model", "Monthly", "Yearly"])
                .style(self.styles.get_or_default(Mode::Global, "title")),
        )
        .block(Block::default().borders(Borders::ALL).title(title));
        Widget::render(table, area, buf);
    }
}
