use crate::{
    core::{cmd::Cmd, msg::rate_limit::RateLimitMsg},
    domain::rate_limit::{Simulator, SimulatorSettings},
};

#[derive(Debug, Clone, Default)]
pub struct RateLimitState {
    pub simulator: Simulator,
}

impl RateLimitState {
    pub fn new(settings: SimulatorSettings) -> Self {
        Self {
            simulator: Simulator::new(settings),
        }
    }

    pub fn is_running(&self) -> bool {
        self.simulator.is_running()
    }

    /// One-line summary shown when a run starts or ends
    pub fn phase_notice(&self) -> String {
        let stats = self.simulator.stats();
        if self.is_running() {
            format!(
                "Simulation running with strategy {}",
                self.simulator.strategy()
            )
        } else {
            format!(
                "Simulation stopped: {} issued, {} accepted, {} errors",
                stats.issued, stats.accepted, stats.errors
            )
        }
    }

    pub fn update(&mut self, msg: RateLimitMsg) -> Vec<Cmd> {
        match msg {
            RateLimitMsg::Toggle => {
                if self.simulator.is_running() {
                    self.simulator.stop();
                } else {
                    self.simulator.start();
                }
                vec![Cmd::log_info(self.phase_notice())]
            }

            RateLimitMsg::Reset => {
                self.simulator.reset();
                vec![]
            }

            RateLimitMsg::NextStrategy => {
                let strategy = self.simulator.strategy().next();
                self.simulator.set_strategy(strategy);
                vec![]
            }

            RateLimitMsg::ToggleBurst => {
                let burst = !self.simulator.burst();
                self.simulator.set_burst(burst);
                vec![]
            }

            RateLimitMsg::Tick(elapsed) => {
                if self.simulator.advance(elapsed) {
                    vec![Cmd::log_info(self.phase_notice())]
                } else {
                    vec![]
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::rate_limit::{Phase, Strategy};

    #[test]
    fn test_toggle_starts_and_stops() {
        let mut state = RateLimitState::default();

        let cmds = state.update(RateLimitMsg::Toggle);
        assert!(state.is_running());
        assert_eq!(
            cmds,
            vec![Cmd::log_info("Simulation running with strategy None")]
        );

        state.update(RateLimitMsg::Toggle);
        assert_eq!(state.simulator.phase(), Phase::Idle);
    }

    #[test]
    fn test_tick_runs_until_duration() {
        let mut state = RateLimitState::default();
        state.update(RateLimitMsg::Toggle);

        assert!(state
            .update(RateLimitMsg::Tick(Duration::from_millis(5_000)))
            .is_empty());
        assert_eq!(state.simulator.stats().issued, 10);

        let cmds = state.update(RateLimitMsg::Tick(Duration::from_millis(5_000)));
        assert!(!state.is_running());
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn test_tick_while_idle_does_nothing() {
        let mut state = RateLimitState::default();
        state.update(RateLimitMsg::Tick(Duration::from_secs(3)));
        assert_eq!(state.simulator.stats().issued, 0);
    }

    #[test]
    fn test_strategy_and_burst_survive_reset() {
        let mut state = RateLimitState::default();
        state.update(RateLimitMsg::NextStrategy);
        state.update(RateLimitMsg::ToggleBurst);
        state.update(RateLimitMsg::Toggle);
        state.update(RateLimitMsg::Tick(Duration::from_secs(2)));
        state.update(RateLimitMsg::Reset);

        assert_eq!(state.simulator.strategy(), Strategy::Backoff);
        assert!(state.simulator.burst());
        assert_eq!(state.simulator.stats().issued, 0);
        assert!(!state.is_running());
    }
}
