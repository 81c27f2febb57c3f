use std::{collections::VecDeque, fmt, time::Duration};

use strum::Display;

use super::{RateQuota, SimulatorSettings, Strategy};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum Phase {
    #[default]
    Idle,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected,
    RetryScheduled { attempt: u32, delay_ms: u64 },
    Queued { delay_ms: u64 },
    GaveUp { attempts: u32 },
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Outcome::Rejected | Outcome::RetryScheduled { .. } | Outcome::GaveUp { .. }
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Accepted => write!(f, "accepted"),
            Outcome::Rejected => write!(f, "rejected (429)"),
            Outcome::RetryScheduled { attempt, delay_ms } => {
                write!(f, "429, retry #{attempt} in {delay_ms} ms")
            }
            Outcome::Queued { delay_ms } => write!(f, "queued for {delay_ms} ms"),
            Outcome::GaveUp { attempts } => write!(f, "gave up after {attempts} retries"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimEvent {
    pub at_ms: u64,
    pub request_id: u64,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    pub issued: u64,
    pub accepted: u64,
    /// Rejections, including the ones that were retried later
    pub errors: u64,
    pub retries: u64,
    pub queued: u64,
    pub dropped: u64,
    /// Retries and queued requests dropped by a stop
    pub cancelled: u64,
}

/// Largest accepted `log_capacity`
pub const MAX_LOG_CAPACITY: usize = 100_000;
/// Largest accepted `burst_size`
pub const MAX_BURST_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    request_id: u64,
    due_ms: u64,
    attempt: u32,
}

// Variant order breaks ties between timers due at the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Timer {
    RunEnd,
    Pending,
    Decay,
    Request,
}

/// Request generator, decaying budget and client strategy on a simulated clock
#[derive(Debug, Clone)]
pub struct Simulator {
    settings: SimulatorSettings,
    strategy: Strategy,
    burst: bool,
    phase: Phase,
    clock_ms: u64,
    run_started_ms: u64,
    next_request_ms: u64,
    next_decay_ms: u64,
    quota: RateQuota,
    stats: SimStats,
    pending: Vec<Pending>,
    log: VecDeque<SimEvent>,
    next_request_id: u64,
}

impl Simulator {
    pub fn new(mut settings: SimulatorSettings) -> Self {
        settings.request_interval_ms = settings.request_interval_ms.max(1);
        settings.decay_interval_ms = settings.decay_interval_ms.max(1);
        settings.queue_delay_ms = settings.queue_delay_ms.max(1);
        settings.backoff.base_delay_ms = settings.backoff.base_delay_ms.max(1);
        if settings.log_capacity > MAX_LOG_CAPACITY {
            log::warn!(
                "simulator.log_capacity {} is too large, using {MAX_LOG_CAPACITY}",
                settings.log_capacity
            );
            settings.log_capacity = MAX_LOG_CAPACITY;
        }
        if settings.burst_size > MAX_BURST_SIZE {
            log::warn!(
                "simulator.burst_size {} is too large, using {MAX_BURST_SIZE}",
                settings.burst_size
            );
            settings.burst_size = MAX_BURST_SIZE;
        }

        Self {
            strategy: settings.strategy,
            burst: false,
            phase: Phase::Idle,
            clock_ms: 0,
            run_started_ms: 0,
            next_request_ms: 0,
            next_decay_ms: 0,
            quota: RateQuota::new(settings.max_per_window, settings.window_length_seconds),
            stats: SimStats::default(),
            pending: vec![],
            log: VecDeque::new(),
            next_request_id: 1,
            settings,
        }
    }

    pub fn settings(&self) -> &SimulatorSettings {
        &self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Applies to requests handled from now on, including pending ones
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn burst(&self) -> bool {
        self.burst
    }

    pub fn set_burst(&mut self, burst: bool) {
        self.burst = burst;
    }

    pub fn quota(&self) -> &RateQuota {
        &self.quota
    }

    pub fn stats(&self) -> SimStats {
        self.stats
    }

    /// Requests waiting for a retry or in the queue
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Oldest first
    pub fn events(&self) -> &VecDeque<SimEvent> {
        &self.log
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn run_elapsed_ms(&self) -> u64 {
        match self.phase {
            Phase::Running => self.clock_ms - self.run_started_ms,
            Phase::Idle => 0,
        }
    }

    /// Fraction of the demonstration duration that has passed
    pub fn run_progress(&self) -> f64 {
        if self.settings.duration_ms == 0 {
            return 0.0;
        }
        (self.run_elapsed_ms() as f64 / self.settings.duration_ms as f64).min(1.0)
    }

    /// Returns `false` when already running
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }

        self.phase = Phase::Running;
        self.run_started_ms = self.clock_ms;
        self.next_request_ms = self.clock_ms + self.settings.request_interval_ms;
        self.next_decay_ms = self.clock_ms + self.settings.decay_interval_ms;
        true
    }

    /// Cancels every scheduled retry and queued request. Returns `false` when idle.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        self.phase = Phase::Idle;
        self.stats.cancelled += self.pending.len() as u64;
        self.pending.clear();
        true
    }

    /// Back to a fresh idle simulator, keeping strategy and burst settings
    pub fn reset(&mut self) {
        let strategy = self.strategy;
        let burst = self.burst;
        *self = Self::new(self.settings);
        self.strategy = strategy;
        self.burst = burst;
    }

    /// Moves the simulated clock forward, firing every timer that falls due
    ///
    /// Returns `true` when the demonstration duration ran out during this call.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.is_running() {
            return false;
        }

        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let target = self.clock_ms.saturating_add(elapsed_ms);

        while let Some((at, timer)) = self.next_timer() {
            if at > target {
                break;
            }
            self.clock_ms = at;

            match timer {
                Timer::RunEnd => {
                    self.stop();
                    return true;
                }
                Timer::Pending => self.fire_pending(),
                Timer::Decay => {
                    self.quota.decay();
                    self.next_decay_ms += self.settings.decay_interval_ms;
                }
                Timer::Request => {
                    self.issue_requests();
                    self.next_request_ms += self.settings.request_interval_ms;
                }
            }
        }

        self.clock_ms = target;
        false
    }

    fn next_timer(&self) -> Option<(u64, Timer)> {
        let run_end = self.run_started_ms.saturating_add(self.settings.duration_ms);
        let pending = self
            .pending
            .iter()
            .map(|p| p.due_ms)
            .min()
            .map(|at| (at, Timer::Pending));

        [
            Some((run_end, Timer::RunEnd)),
            pending,
            Some((self.next_decay_ms, Timer::Decay)),
            Some((self.next_request_ms, Timer::Request)),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn issue_requests(&mut self) {
        let extra = if self.burst { self.settings.burst_size } else { 0 };

        for _ in 0..=extra {
            let request_id = self.next_request_id;
            self.next_request_id += 1;
            self.stats.issued += 1;
            self.handle_request(request_id, 0);
        }
    }

    fn fire_pending(&mut self) {
        let now = self.clock_ms;
        let (due, waiting): (Vec<Pending>, Vec<Pending>) =
            self.pending.drain(..).partition(|p| p.due_ms <= now);
        self.pending = waiting;

        for pending in due {
            self.handle_request(pending.request_id, pending.attempt);
        }
    }

    fn handle_request(&mut self, request_id: u64, attempt: u32) {
        let now = self.clock_ms;

        if !self.quota.is_exhausted(now) {
            self.quota.record_acceptance(now);
            self.stats.accepted += 1;
            self.record(request_id, Outcome::Accepted);
            return;
        }

        match self.strategy {
            Strategy::None => {
                self.stats.errors += 1;
                self.stats.dropped += 1;
                self.record(request_id, Outcome::Rejected);
            }
            Strategy::Backoff => {
                self.stats.errors += 1;
                if attempt >= self.settings.backoff.max_retries {
                    self.stats.dropped += 1;
                    self.record(request_id, Outcome::GaveUp { attempts: attempt });
                } else {
                    let delay_ms = self.settings.backoff.delay_for(attempt);
                    self.stats.retries += 1;
                    self.schedule(request_id, now + delay_ms, attempt + 1);
                    self.record(
                        request_id,
                        Outcome::RetryScheduled {
                            attempt: attempt + 1,
                            delay_ms,
                        },
                    );
                }
            }
            Strategy::Queue => {
                if attempt == 0 {
                    self.stats.queued += 1;
                }
                let delay_ms = self.settings.queue_delay_ms;
                self.schedule(request_id, now + delay_ms, attempt.saturating_add(1));
                self.record(request_id, Outcome::Queued { delay_ms });
            }
        }
    }

    fn schedule(&mut self, request_id: u64, due_ms: u64, attempt: u32) {
        self.pending.push(Pending {
            request_id,
            due_ms,
            attempt,
        });
    }

    fn record(&mut self, request_id: u64, outcome: Outcome) {
        if self.settings.log_capacity == 0 {
            return;
        }
        while self.log.len() >= self.settings.log_capacity {
            self.log.pop_front();
        }
        self.log.push_back(SimEvent {
            at_ms: self.clock_ms,
            request_id,
            outcome,
        });
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(SimulatorSettings::default())
    }
}
