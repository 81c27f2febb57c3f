use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::{
    domain::pricing::{format_usd, PriceQuote, PricingError},
    presentation::config::{Mode, Styles},
};

pub struct QuoteTableWidget<'a> {
    quote: Result<&'a PriceQuote, &'a PricingError>,
    styles: &'a Styles,
}

impl<'a> QuoteTableWidget<'a> {
    pub fn new(quote: Result<&'a PriceQuote, &'a PricingError>, styles: &'a Styles) -> Self {
        Self { quote, styles }
    }

    /// Label and formatted amount per row; small amounts keep four decimals
    pub fn rows(quote: &PriceQuote) -> Vec<(&'static str, String)> {
        vec![
            ("Input tokens", format_usd(quote.input_token_cost, 4)),
            ("Output tokens", format_usd(quote.output_token_cost, 4)),
            ("Per request", format_usd(quote.per_request_cost, 4)),
            ("Daily", format_usd(quote.daily_cost, 2)),
            ("Monthly", format_usd(quote.monthly_cost, 2)),
            ("Yearly", format_usd(quote.yearly_cost, 2)),
        ]
    }
}

impl Widget for QuoteTableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Quote ");

        match self.quote {
            Ok(quote) => {
                let highlight = self.styles.get_or_default(Mode::Global, "ok");
                let rows = Self::rows(quote).into_iter().map(|(label, amount)| {
                    let row = Row::new([label.to_owned(), amount]);
                    if label == "Monthly" {
                        row.style(highlight)
                    } else {
                        row
                    }
                });
                let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(10)])
                    .block(block);
                Widget::render(table, area, buf);
            }
            Err(error) => {
                Paragraph::new(error.to_string())
                    .style(self.styles.get_or_default(Mode::Global, "error"))
                    .block(block)
                    .render(area, buf);
            }
        }
    }
}
