use std::time::{Duration, Instant};

use color_eyre::eyre::Result;

use crate::{
    core::{raw_msg::RawMsg, state::AppState},
    infrastructure::tui::{Event, Frame, TuiLike},
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// Main loop: terminal events in, rendered frames out
pub struct AppRunner<'a, T: TuiLike> {
    runtime: Runtime,
    tui: T,
    components: Components<'a>,
    last_tick: Instant,
    fixed_tick: Option<Duration>,
}

impl<T: TuiLike> AppRunner<'_, T> {
    pub fn new(initial_state: AppState, tui: T) -> Self {
        Self {
            runtime: Runtime::new(initial_state),
            tui,
            components: Components::new(),
            last_tick: Instant::now(),
            fixed_tick: None,
        }
    }

    /// Every tick advances the simulated clock by `tick` instead of the
    /// wall time since the previous one
    pub fn with_fixed_tick(mut self, tick: Duration) -> Self {
        self.fixed_tick = Some(tick);
        self
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        self.last_tick = Instant::now();

        let result = self.event_loop().await;
        self.tui.exit()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        while let Some(event) = self.tui.next().await {
            let mut should_render = self.handle_event(event);

            for failure in self.runtime.run_update_cycle(&mut self.tui) {
                self.runtime.send_raw_msg(RawMsg::Error(failure));
            }

            if self.runtime.state().system.should_suspend {
                self.suspend()?;
                should_render = true;
            }
            if self.runtime.state().system.should_quit {
                break;
            }
            if should_render {
                self.render()?;
            }
        }

        Ok(())
    }

    /// Queues the raw message for `event`; returns whether a frame is due
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Init | Event::Render => return true,
            Event::Resize(width, height) => {
                self.runtime.send_raw_msg(RawMsg::Resize(width, height));
                return true;
            }
            Event::Tick => {
                let elapsed = self.tick_elapsed();
                self.runtime.send_raw_msg(RawMsg::Tick(elapsed));
            }
            Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            Event::Paste(text) => self.runtime.send_raw_msg(RawMsg::Paste(text)),
            Event::Quit | Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            Event::Error(error) => self.runtime.send_raw_msg(RawMsg::Error(error)),
            Event::FocusGained | Event::FocusLost => {}
        }
        false
    }

    fn tick_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.fixed_tick.unwrap_or(elapsed)
    }

    /// Blocks until the process is resumed; time spent stopped is not simulated
    fn suspend(&mut self) -> Result<()> {
        log::info!("Suspending");
        self.tui.suspend()?;

        self.runtime.send_raw_msg(RawMsg::Resume);
        self.runtime.process_all_messages();
        self.tui.resume()?;
        self.last_tick = Instant::now();
        log::info!("Resumed");
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &mut self.components;
        self.tui
            .draw(&mut |frame: &mut Frame<'_>| components.render(frame, state))
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::state::navigation::Tab,
        infrastructure::{config::Config, tui::test::TestTui},
    };

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn runner(events: Vec<Event>) -> AppRunner<'static, TestTui> {
        let state = AppState::new(Config::embedded().expect("embedded config"));
        let tui = TestTui::with_events(100, 30, events).expect("test tui");
        AppRunner::new(state, tui).with_fixed_tick(Duration::from_secs(1))
    }

    #[tokio::test]
    async fn test_simulation_runs_on_ticks() -> Result<()> {
        let mut runner = runner(vec![
            Event::Init,
            key('3'),
            key('s'),
            Event::Tick,
            Event::Tick,
            Event::Render,
        ]);
        runner.run().await?;

        let state = runner.runtime().state();
        assert_eq!(state.current_tab(), Tab::RateLimit);
        assert_eq!(state.rate_limit.simulator.stats().issued, 4);
        assert_eq!(runner.tui().draw_count(), 2);
        assert!(runner.tui().contains("Issued 4  Accepted 4"));
        assert!(!runner.tui().is_entered());
        Ok(())
    }

    #[tokio::test]
    async fn test_quit_stops_before_rendering() -> Result<()> {
        let mut runner = runner(vec![Event::Init, key('q'), Event::Render, Event::Render]);
        runner.run().await?;

        assert!(runner.runtime().state().system.should_quit);
        assert_eq!(runner.tui().draw_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_suspend_and_resume() -> Result<()> {
        let mut runner = runner(vec![Event::Key(KeyEvent::new(
            KeyCode::Char('z'),
            KeyModifiers::CONTROL,
        ))]);
        runner.run().await?;

        assert_eq!(runner.tui().suspensions(), 1);
        assert!(!runner.runtime().state().system.should_suspend);
        assert_eq!(runner.tui().draw_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_resize_reaches_terminal() -> Result<()> {
        let mut runner = runner(vec![Event::Resize(60, 20)]);
        runner.run().await?;

        assert_eq!(runner.tui().buffer().area.width, 60);
        assert!(runner.tui().contains("1 Compression"));
        Ok(())
    }
}
