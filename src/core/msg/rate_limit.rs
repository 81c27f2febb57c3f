use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitMsg {
    /// Start when idle, stop when running
    Toggle,
    Reset,
    NextStrategy,
    ToggleBurst,
    /// Advance the simulated clock
    Tick(Duration),
}
