use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use thousands::Separable;

use crate::{
    core::state::{cost::CostField, AppState},
    presentation::{
        config::Mode,
        widgets::{comparison::ComparisonWidget, quote_table::QuoteTableWidget},
    },
};

/// Workload inputs and quote on the left, every model compared on the right
#[derive(Debug, Default)]
pub struct CostComponent;

impl CostComponent {
    pub fn new() -> Self {
        Self
    }

    fn field_value(state: &AppState, field: CostField) -> String {
        let cost = &state.cost;
        match field {
            CostField::Provider => cost.provider.clone(),
            CostField::Model => cost.model.clone(),
            CostField::InputTokens => cost.workload.input_tokens.separate_with_commas(),
            CostField::OutputTokens => cost.workload.output_tokens.separate_with_commas(),
            CostField::RequestsPerDay => cost.workload.requests_per_day.separate_with_commas(),
        }
    }

    /// One `label  value` line per field, the focused one highlighted
    pub fn field_lines(state: &AppState) -> Vec<Line<'static>> {
        let highlight = state
            .config
            .config
            .styles
            .get_or_default(Mode::Cost, "highlight");

        CostField::iter()
            .map(|field| {
                let focused = field == state.cost.focus;
                let marker = if focused { "▶" } else { " " };
                let text = format!(
                    "{marker} {:<15} ◀ {} ▶",
                    field.to_string(),
                    Self::field_value(state, field)
                );
                if focused {
                    Line::styled(text, highlight)
                } else {
                    Line::raw(text)
                }
            })
            .collect()
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let cost = &state.cost;

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(columns[0]);

        frame.render_widget(
            Paragraph::new(Self::field_lines(state))
                .block(Block::default().borders(Borders::ALL).title(" Workload ")),
            left[0],
        );
        frame.render_widget(QuoteTableWidget::new(cost.quote(), styles), left[1]);

        let selected = cost.selected_key();
        frame.render_widget(
            ComparisonWidget::new(cost.comparison(), &selected, styles),
            columns[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::msg::cost::CostMsg;

    fn texts(state: &AppState) -> Vec<String> {
        CostComponent::field_lines(state)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_default_fields() {
        let state = AppState::default();

        assert_eq!(
            texts(&state),
            vec![
                "▶ Provider        ◀ openai ▶",
                "  Model           ◀ gpt-4 ▶",
                "  Input tokens    ◀ 1,000 ▶",
                "  Output tokens   ◀ 500 ▶",
                "  Requests / day  ◀ 100 ▶",
            ]
        );
    }

    #[test]
    fn test_focus_moves_marker() {
        let mut state = AppState::default();
        state.cost.update(CostMsg::NextField);
        state.cost.update(CostMsg::NextField);
        state.cost.update(CostMsg::Increase);

        let lines = texts(&state);
        assert_eq!(lines[2], "▶ Input tokens    ◀ 1,100 ▶");
        assert!(lines[0].starts_with("  Provider"));
    }
}
