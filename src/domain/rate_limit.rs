//! Rate limit simulation
//!
//! A simulated API with a per-window request budget and three client
//! strategies for dealing with rejections. Everything runs on a simulated
//! clock advanced by the caller, so runs are deterministic and testable.

pub mod quota;
pub mod simulator;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

pub use quota::RateQuota;
pub use simulator::{Outcome, Phase, SimEvent, SimStats, Simulator};

/// What the client does with a rejected request
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Count an error and drop the request
    #[default]
    #[strum(to_string = "None")]
    None,
    /// Retry with exponentially growing delays
    #[strum(to_string = "Backoff")]
    Backoff,
    /// Hold the request and try again after a fixed delay
    #[strum(to_string = "Queue")]
    Queue,
}

impl Strategy {
    pub fn next(self) -> Self {
        let strategies: Vec<Strategy> = Strategy::iter().collect();
        let index = strategies.iter().position(|s| *s == self).unwrap_or(0);
        strategies[(index + 1) % strategies.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackoffPolicy {
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
    pub max_retries: u32,
}

impl BackoffPolicy {
    /// `min(base · 2^attempt, max)`
    pub fn delay_for(&self, attempt: u32) -> u64 {
        self.base_delay_ms
            .saturating_mul(2u64.saturating_pow(attempt))
            .min(self.max_delay_ms)
    }
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            base_delay_ms: 1000,
            max_delay_ms: 8000,
            max_retries: 4,
        }
    }
}

/// Tunables of a simulation run, loaded from the `simulator` config section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorSettings {
    pub max_per_window: u32,
    pub window_length_seconds: u32,
    pub request_interval_ms: u64,
    pub decay_interval_ms: u64,
    pub duration_ms: u64,
    /// Extra requests per tick while burst traffic is on
    pub burst_size: u32,
    pub queue_delay_ms: u64,
    pub backoff: BackoffPolicy,
    pub strategy: Strategy,
    pub log_capacity: usize,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            max_per_window: 60,
            window_length_seconds: 60,
            request_interval_ms: 500,
            decay_interval_ms: 1000,
            duration_ms: 10_000,
            burst_size: 5,
            queue_delay_ms: 1000,
            backoff: BackoffPolicy::default(),
            strategy: Strategy::None,
            log_capacity: 50,
        }
    }
}
