use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    domain::{
        compression::{LzToken, RleRun},
        text::{visible_symbol, wrap_pieces},
    },
    presentation::config::{Mode, Styles},
};

/// Encoded output as a wrapped sequence of short pieces
pub struct TokenStreamWidget<'a> {
    title: String,
    pieces: Vec<String>,
    styles: &'a Styles,
}

impl<'a> TokenStreamWidget<'a> {
    /// Literals as their symbol, references as `<distance,length>`
    pub fn from_tokens(tokens: &[LzToken], styles: &'a Styles) -> Self {
        let references = tokens.iter().filter(|t| t.is_reference()).count();
        let pieces = tokens
            .iter()
            .map(|token| match token {
                LzToken::Literal(c) => visible_symbol(*c),
                reference => reference.to_string(),
            })
            .collect();

        Self {
            title: format!(
                " {} tokens, {references} references ",
                tokens.len()
            ),
            pieces,
            styles,
        }
    }

    /// Runs as `count` followed by the symbol, e.g. `6A`
    pub fn from_runs(runs: &[RleRun], styles: &'a Styles) -> Self {
        let pieces = runs
            .iter()
            .map(|run| format!("{}{}", run.count, visible_symbol(run.symbol)))
            .collect();

        Self {
            title: format!(" {} runs ", runs.len()),
            pieces,
            styles,
        }
    }

    pub fn lines(&self, width: usize) -> Vec<String> {
        wrap_pieces(&self.pieces, width, " ")
    }
}

impl Widget for TokenStreamWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(self.title.clone());
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .lines(usize::from(inner.width))
            .into_iter()
            .map(Line::from)
            .collect();
        Paragraph::new(lines)
            .style(self.styles.get_or_default(Mode::Global, "status"))
            .render(inner, buf);
    }
}
