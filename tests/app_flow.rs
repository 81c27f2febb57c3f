use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use conceptlab::{
    core::{
        msg::{navigation::NavigationMsg, Msg},
        state::{cost::CostField, navigation::Tab, AppState},
        update::update,
    },
    domain::{compression::Scheme, rate_limit::Strategy},
    infrastructure::{
        config::Config,
        tui::{test::TestTui, Event},
    },
    integration::app_runner::AppRunner,
    Result, VERSION,
};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn chars(text: &str) -> Vec<Event> {
    text.chars().map(|c| press(KeyCode::Char(c))).collect()
}

fn state() -> AppState {
    AppState::new(Config::embedded().expect("embedded config"))
}

async fn run_session(events: Vec<Event>) -> Result<AppRunner<'static, TestTui>> {
    let tui = TestTui::with_events(100, 30, events)?;
    let mut runner = AppRunner::new(state(), tui).with_fixed_tick(Duration::from_secs(1));
    runner.run().await?;
    Ok(runner)
}

#[test]
fn test_version_info() {
    assert!(!VERSION.is_empty());
}

#[test]
fn test_tabs_cycle_through_update() {
    let next = || Msg::Navigation(NavigationMsg::NextTab);

    let (state, _) = update(next(), state());
    assert_eq!(state.current_tab(), Tab::Cost);
    let (state, _) = update(next(), state);
    assert_eq!(state.current_tab(), Tab::RateLimit);
    let (state, _) = update(next(), state);
    assert_eq!(state.current_tab(), Tab::Compression);
}

#[tokio::test]
async fn test_compression_session() -> Result<()> {
    let mut events = vec![Event::Init, press(KeyCode::Char('e'))];
    events.push(press(KeyCode::Char('a')));
    events.extend(chars("qq"));
    events.push(Event::Paste("zz\r\nzz".into()));
    events.push(press(KeyCode::Esc));
    events.extend(chars("l"));
    events.push(Event::Render);

    let runner = run_session(events).await?;
    let compression = &runner.runtime().state().compression;

    // `q` is typed while editing instead of quitting
    assert!(!runner.runtime().state().system.should_quit);
    assert!(!compression.editing);
    assert!(compression.text().ends_with("aqqzz\nzz"));
    assert_eq!(compression.current_sample(), None);
    assert_eq!(compression.scheme, Scheme::WindowedMatch);
    assert!(runner.tui().contains("Input (custom)"));
    assert!(runner.tui().contains("references"));
    Ok(())
}

#[tokio::test]
async fn test_cost_session() -> Result<()> {
    let mut events = vec![Event::Init];
    events.extend(chars("2jjl"));
    events.push(Event::Render);

    let runner = run_session(events).await?;
    let cost = &runner.runtime().state().cost;

    assert_eq!(cost.focus, CostField::InputTokens);
    assert_eq!(cost.workload.input_tokens, 1100);
    assert!(runner.tui().contains("Input tokens    ◀ 1,100 ▶"));
    assert!(runner.tui().contains("$0.0330"));
    assert!(runner.tui().contains("openai/gpt-4o-mini"));
    Ok(())
}

#[tokio::test]
async fn test_rate_limit_session_runs_to_the_end() -> Result<()> {
    let mut events = vec![Event::Init];
    events.extend(chars("3ts"));
    events.extend((0..10).map(|_| Event::Tick));
    events.push(Event::Render);

    let runner = run_session(events).await?;
    let rate_limit = &runner.runtime().state().rate_limit;

    assert!(!rate_limit.is_running());
    assert_eq!(rate_limit.simulator.strategy(), Strategy::Backoff);
    assert_eq!(rate_limit.simulator.stats().issued, 19);
    assert!(runner
        .tui()
        .contains("Simulation stopped: 19 issued, 19 accepted, 0 errors"));
    Ok(())
}

#[tokio::test]
async fn test_ticks_keep_running_on_other_tabs() -> Result<()> {
    let mut events = vec![Event::Init];
    events.extend(chars("3s1"));
    events.extend((0..2).map(|_| Event::Tick));

    let runner = run_session(events).await?;
    let state = runner.runtime().state();

    assert_eq!(state.current_tab(), Tab::Compression);
    assert_eq!(state.rate_limit.simulator.stats().issued, 4);
    Ok(())
}
