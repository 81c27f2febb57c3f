pub mod compression;
pub mod cost;
pub mod navigation;
pub mod rate_limit;
pub mod system;

use compression::CompressionMsg;
use cost::CostMsg;
use navigation::NavigationMsg;
use rate_limit::RateLimitMsg;
use system::SystemMsg;

/// Domain messages, one variant per state slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    System(SystemMsg),
    Navigation(NavigationMsg),
    Compression(CompressionMsg),
    Cost(CostMsg),
    RateLimit(RateLimitMsg),
}

impl Msg {
    /// Messages sent on every tick, left out of the debug log
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::RateLimit(RateLimitMsg::Tick(_)))
    }
}
