use std::collections::VecDeque;

/// Request budget for one simulated API
///
/// `current_count` is the load the UI shows: it grows by one per accepted
/// request and decays by one per simulated second. Acceptance times inside
/// the trailing window are tracked as well, so a fast decay can never let
/// more than `max_per_window` requests through in any window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateQuota {
    current_count: u32,
    max_per_window: u32,
    window_length_seconds: u32,
    accepted_at_ms: VecDeque<u64>,
}

impl RateQuota {
    pub fn new(max_per_window: u32, window_length_seconds: u32) -> Self {
        Self {
            current_count: 0,
            max_per_window,
            window_length_seconds,
            accepted_at_ms: VecDeque::new(),
        }
    }

    pub fn current_count(&self) -> u32 {
        self.current_count
    }

    pub fn max_per_window(&self) -> u32 {
        self.max_per_window
    }

    pub fn window_length_seconds(&self) -> u32 {
        self.window_length_seconds
    }

    fn window_ms(&self) -> u64 {
        u64::from(self.window_length_seconds) * 1000
    }

    /// Acceptances in `(now - window, now]`
    pub fn accepted_in_window(&self, now_ms: u64) -> usize {
        let window_ms = self.window_ms();
        self.accepted_at_ms
            .iter()
            .filter(|&&at| at + window_ms > now_ms)
            .count()
    }

    pub fn is_exhausted(&self, now_ms: u64) -> bool {
        self.current_count >= self.max_per_window
            || self.accepted_in_window(now_ms) >= self.max_per_window as usize
    }

    pub fn record_acceptance(&mut self, now_ms: u64) {
        self.current_count = self.current_count.saturating_add(1);
        self.accepted_at_ms.push_back(now_ms);
        self.prune(now_ms);
    }

    /// One decay step, never below zero
    pub fn decay(&mut self) {
        self.current_count = self.current_count.saturating_sub(1);
    }

    /// Drop acceptance times that left the window
    pub fn prune(&mut self, now_ms: u64) {
        let window_ms = self.window_ms();
        while let Some(&oldest) = self.accepted_at_ms.front() {
            if now_ms >= oldest + window_ms {
                self.accepted_at_ms.pop_front();
            } else {
                break;
            }
        }
    }

    /// `current_count / max_per_window`, clamped to `0.0..=1.0`
    pub fn load(&self) -> f64 {
        if self.max_per_window == 0 {
            return 1.0;
        }
        (f64::from(self.current_count) / f64::from(self.max_per_window)).min(1.0)
    }

    pub fn reset(&mut self) {
        self.current_count = 0;
        self.accepted_at_ms.clear();
    }
}
