use ratatui::{prelude::*, widgets::Tabs};
use strum::IntoEnumIterator;

use crate::{
    core::state::navigation::Tab,
    presentation::config::{Mode, Styles},
};

pub struct TabBarWidget<'a> {
    current: Tab,
    styles: &'a Styles,
}

impl<'a> TabBarWidget<'a> {
    pub fn new(current: Tab, styles: &'a Styles) -> Self {
        Self { current, styles }
    }

    /// `1 Compression`, `2 Cost`, ...
    pub fn titles(&self) -> Vec<String> {
        Tab::iter()
            .map(|tab| format!("{} {tab}", tab.index() + 1))
            .collect()
    }
}

impl Widget for TabBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Tabs::new(self.titles())
            .select(self.current.index())
            .style(self.styles.get_or_default(Mode::Global, "tab"))
            .highlight_style(self.styles.get_or_default(Mode::Global, "tab_active"))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presentation::widgets::buffer_lines;

    #[test]
    fn test_titles_are_numbered() {
        let styles = Styles::default();
        let widget = TabBarWidget::new(Tab::Cost, &styles);
        assert_eq!(
            widget.titles(),
            vec!["1 Compression", "2 Cost", "3 Rate limits"]
        );
    }

    #[test]
    fn test_render_lists_every_tab() {
        let styles = Styles::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 1));
        TabBarWidget::new(Tab::RateLimit, &styles).render(buf.area, &mut buf);

        let line = &buffer_lines(&buf)[0];
        assert!(line.contains("1 Compression"));
        assert!(line.contains("3 Rate limits"));
    }
}
