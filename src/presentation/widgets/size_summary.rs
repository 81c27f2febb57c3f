use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use thousands::Separable;

use crate::{
    domain::compression::{CompressionReport, Encoded, Scheme, WindowSize},
    presentation::config::{Mode, Styles},
};

/// Original vs estimated size for the selected scheme
pub struct SizeSummaryWidget<'a> {
    report: &'a CompressionReport,
    window: WindowSize,
    styles: &'a Styles,
}

impl<'a> SizeSummaryWidget<'a> {
    pub fn new(report: &'a CompressionReport, window: WindowSize, styles: &'a Styles) -> Self {
        Self {
            report,
            window,
            styles,
        }
    }

    fn style(&self, name: &str) -> Style {
        self.styles.get_or_default(Mode::Global, name)
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let report = self.report;
        let mut lines = vec![
            Line::from(format!(
                "Original:   {} B ({} bits)",
                report.original_bytes().separate_with_commas(),
                report.original_bits().separate_with_commas()
            )),
            Line::from(format!(
                "Compressed: {} B ({} bits)",
                report.compressed_bytes().separate_with_commas(),
                report.compressed_bits.separate_with_commas()
            )),
        ];

        match (report.ratio(), report.space_saving()) {
            (Some(ratio), Some(saving)) => {
                lines.push(Line::from(format!("Ratio:      {:.1}%", ratio * 100.0)));
                if report.expands() {
                    lines.push(Line::styled(
                        format!("Expands by  {:.1}%", -saving),
                        self.style("warning"),
                    ));
                } else {
                    lines.push(Line::styled(
                        format!("Saves       {saving:.1}%"),
                        self.style("ok"),
                    ));
                }
            }
            _ => lines.push(Line::styled(
                "Type something or load a sample",
                self.style("muted"),
            )),
        }

        match (&report.scheme, &report.encoded) {
            (Scheme::RankCoding, Encoded::Ranks(assignment)) if !assignment.is_prefix_free() => {
                lines.push(Line::styled(
                    "Codes share prefixes, so this is only an estimate",
                    self.style("muted"),
                ));
            }
            (Scheme::WindowedMatch, _) => {
                lines.push(Line::from(format!("Window:     {} chars", self.window.get())));
            }
            _ => {}
        }

        lines
    }
}

impl Widget for SizeSummaryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.report.scheme);
        Paragraph::new(self.lines())
            .block(Block::default().borders(Borders::ALL).title(title))
            .render(area, buf);
    }
}
