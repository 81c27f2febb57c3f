use ratatui::{
    prelude::*,
    widgets::{Block, Borders, LineGauge, Paragraph},
};

use crate::{
    core::state::AppState,
    domain::rate_limit::Simulator,
    presentation::{
        config::Mode,
        widgets::{quota_gauge::QuotaGaugeWidget, sim_log::SimLogWidget},
    },
};

/// Quota gauge, run settings and counters, then the request log
#[derive(Debug, Default)]
pub struct RateLimitComponent;

impl RateLimitComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn info_lines(simulator: &Simulator) -> Vec<String> {
        let settings = simulator.settings();
        let stats = simulator.stats();
        let burst = if simulator.burst() {
            format!("on (+{} per tick)", settings.burst_size)
        } else {
            "off".to_owned()
        };

        vec![
            format!(
                "Strategy: {}   Burst: {burst}   Phase: {}",
                simulator.strategy(),
                simulator.phase()
            ),
            format!(
                "Issued {}  Accepted {}  Errors {}  Retries {}  Queued {}  Dropped {}  Pending {}  Cancelled {}",
                stats.issued,
                stats.accepted,
                stats.errors,
                stats.retries,
                stats.queued,
                stats.dropped,
                simulator.pending(),
                stats.cancelled
            ),
        ]
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let simulator = &state.rate_limit.simulator;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            QuotaGaugeWidget::new(simulator.quota(), simulator.clock_ms(), styles),
            layout[0],
        );

        let elapsed = simulator.run_elapsed_ms() as f64 / 1000.0;
        let duration = simulator.settings().duration_ms as f64 / 1000.0;
        frame.render_widget(
            LineGauge::default()
                .filled_style(styles.get_or_default(Mode::RateLimit, "title"))
                .unfilled_style(styles.get_or_default(Mode::RateLimit, "muted"))
                .label(format!("Run {elapsed:.1}/{duration:.1} s "))
                .ratio(simulator.run_progress()),
            layout[1],
        );

        let info: Vec<Line> = Self::info_lines(simulator)
            .into_iter()
            .map(Line::from)
            .collect();
        frame.render_widget(
            Paragraph::new(info).block(Block::default().borders(Borders::ALL).title(" Run ")),
            layout[2],
        );

        frame.render_widget(SimLogWidget::new(simulator.events(), styles), layout[3]);
    }
}
