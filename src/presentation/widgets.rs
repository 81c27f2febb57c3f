//! Reusable widgets
//!
//! Each widget borrows the data it shows and the configured styles, and is
//! rendered once per frame.

pub mod code_table;
pub mod comparison;
pub mod quota_gauge;
pub mod quote_table;
pub mod sim_log;
pub mod size_summary;
pub mod status_bar;
pub mod tab_bar;
pub mod token_stream;

#[cfg(test)]
use ratatui::buffer::Buffer;

#[cfg(test)]
pub(crate) fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
