use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use tui_textarea::{CursorMove, TextArea};

use crate::{
    core::state::{editor::TextAreaState, AppState},
    domain::compression::{Encoded, Scheme},
    presentation::{
        config::Mode,
        widgets::{
            code_table::CodeTableWidget, size_summary::SizeSummaryWidget,
            token_stream::TokenStreamWidget,
        },
    },
};

/// Input text, scheme selector and the encoded result
#[derive(Debug)]
pub struct CompressionComponent<'a> {
    textarea: TextArea<'a>,
    last_synced: Option<TextAreaState>,
}

impl CompressionComponent<'_> {
    const INPUT_HEIGHT: u16 = 8;

    pub fn new() -> Self {
        Self {
            textarea: TextArea::default(),
            last_synced: None,
        }
    }

    /// Rebuild the text area when the snapshot changed since the last frame
    fn sync(&mut self, snapshot: &TextAreaState) {
        if self.last_synced.as_ref() == Some(snapshot) {
            return;
        }

        let mut textarea = TextArea::from(snapshot.content.split('\n').map(str::to_owned));
        textarea.move_cursor(CursorMove::Jump(
            u16::try_from(snapshot.cursor.line).unwrap_or(u16::MAX),
            u16::try_from(snapshot.cursor.column).unwrap_or(u16::MAX),
        ));
        self.textarea = textarea;
        self.last_synced = Some(snapshot.clone());
    }

    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    fn input_title(state: &AppState) -> String {
        let compression = &state.compression;
        if compression.editing {
            " Input (editing, Esc to finish) ".to_owned()
        } else {
            match compression.current_sample() {
                Some(sample) => format!(" Input: {} ", sample.name),
                None => " Input (custom) ".to_owned(),
            }
        }
    }

    fn scheme_line(state: &AppState) -> Line<'static> {
        let styles = &state.config.config.styles;
        let active = styles.get_or_default(Mode::Global, "highlight");
        let muted = styles.get_or_default(Mode::Global, "muted");
        let compression = &state.compression;

        let mut spans = vec![Span::raw("Scheme: ")];
        for scheme in Scheme::iter() {
            let style = if scheme == compression.scheme {
                active
            } else {
                muted
            };
            spans.push(Span::styled(format!(" {scheme} "), style));
            spans.push(Span::raw(" "));
        }
        if compression.scheme == Scheme::WindowedMatch {
            spans.push(Span::raw(format!(" window {}", compression.window.get())));
        }

        Line::from(spans)
    }

    pub fn view(&mut self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let compression = &state.compression;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(Self::INPUT_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(Paragraph::new(Self::scheme_line(state)), layout[0]);

        self.sync(&compression.textarea);
        let cursor_style = if compression.editing {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor_style);
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(Self::input_title(state))
                .title_style(styles.get_or_default(state.mode(), "title")),
        );
        frame.render_widget(&self.textarea, layout[1]);

        let results = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(layout[2]);

        let report = compression.report();
        frame.render_widget(
            SizeSummaryWidget::new(report, compression.window, styles),
            results[0],
        );
        match &report.encoded {
            Encoded::Ranks(assignment) => {
                frame.render_widget(CodeTableWidget::new(assignment, styles), results[1]);
            }
            Encoded::Tokens(tokens) => {
                frame.render_widget(TokenStreamWidget::from_tokens(tokens, styles), results[1]);
            }
            Encoded::Runs(runs) => {
                frame.render_widget(TokenStreamWidget::from_runs(runs, styles), results[1]);
            }
        }
    }
}

impl Default for CompressionComponent<'_> {
    fn default() -> Self {
        Self::new()
    }
}
