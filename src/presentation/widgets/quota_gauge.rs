use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge},
};

use crate::{
    domain::rate_limit::RateQuota,
    presentation::config::{Mode, Styles},
};

/// Budget usage of the simulated API
pub struct QuotaGaugeWidget<'a> {
    quota: &'a RateQuota,
    now_ms: u64,
    styles: &'a Styles,
}

impl<'a> QuotaGaugeWidget<'a> {
    pub fn new(quota: &'a RateQuota, now_ms: u64, styles: &'a Styles) -> Self {
        Self {
            quota,
            now_ms,
            styles,
        }
    }

    /// `ok` below 70% load, `warning` below 90%, `error` above
    pub fn style_name(load: f64) -> &'static str {
        if load < 0.7 {
            "ok"
        } else if load < 0.9 {
            "warning"
        } else {
            "error"
        }
    }

    pub fn label(&self) -> String {
        format!(
            "{}/{} · {} accepted in the last {} s",
            self.quota.current_count(),
            self.quota.max_per_window(),
            self.quota.accepted_in_window(self.now_ms),
            self.quota.window_length_seconds(),
        )
    }
}

impl Widget for QuotaGaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let load = self.quota.load();
        let style = self
            .styles
            .get_or_default(Mode::RateLimit, Self::style_name(load));

        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Quota "))
            .gauge_style(style)
            .ratio(load)
            .label(self.label())
            .render(area, buf);
    }
}
