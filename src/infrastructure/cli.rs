use clap::{Parser, ValueEnum};

use crate::{core::state::navigation::Tab, utils::version};

/// Tab shown at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StartTab {
    #[default]
    Compression,
    Cost,
    RateLimit,
}

impl From<StartTab> for Tab {
    fn from(tab: StartTab) -> Self {
        match tab {
            StartTab::Compression => Tab::Compression,
            StartTab::Cost => Tab::Cost,
            StartTab::RateLimit => Tab::RateLimit,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 10.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(long, value_enum, default_value_t = StartTab::Compression, help = "Tab to open first")]
    pub tab: StartTab,
}
