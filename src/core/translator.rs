use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            compression::CompressionMsg, cost::CostMsg, navigation::NavigationMsg,
            rate_limit::RateLimitMsg, system::SystemMsg, Msg,
        },
        raw_msg::RawMsg,
        state::{navigation::Tab, AppState},
    },
    presentation::config::{keybindings::normalize_key_event, Action, Mode},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Paste(text) if state.mode() == Mode::Editing => {
            vec![Msg::Compression(CompressionMsg::Paste(text))]
        }
        RawMsg::Paste(_) => vec![],

        // The simulator keeps running whichever tab is shown
        RawMsg::Tick(elapsed) if state.rate_limit.is_running() => {
            vec![Msg::RateLimit(RateLimitMsg::Tick(elapsed))]
        }
        RawMsg::Tick(_) | RawMsg::Render => vec![],
    }
}

fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    match state.mode() {
        Mode::Editing => translate_editing_keys(key, state),
        mode => state
            .config
            .config
            .keybindings
            .action_for(mode, key)
            .map(|action| translate_action_to_msg(action, state))
            .unwrap_or_default(),
    }
}

/// Only `Editing` bindings apply; every other key is typed into the input
fn translate_editing_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let bound = state
        .config
        .config
        .keybindings
        .get(&Mode::Editing)
        .and_then(|bindings| bindings.get(&vec![normalize_key_event(key)]));

    match bound {
        Some(action) => translate_action_to_msg(action, state),
        None => vec![Msg::Compression(CompressionMsg::ProcessTextAreaInput(key))],
    }
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::ClearStatus => vec![Msg::System(SystemMsg::ClearStatusMessage)],

        Action::NextTab => vec![Msg::Navigation(NavigationMsg::NextTab)],
        Action::PreviousTab => vec![Msg::Navigation(NavigationMsg::PreviousTab)],
        Action::ShowCompression => vec![Msg::Navigation(NavigationMsg::Show(Tab::Compression))],
        Action::ShowCost => vec![Msg::Navigation(NavigationMsg::Show(Tab::Cost))],
        Action::ShowRateLimit => vec![Msg::Navigation(NavigationMsg::Show(Tab::RateLimit))],

        Action::StartEditing if state.current_tab() == Tab::Compression => {
            vec![Msg::Compression(CompressionMsg::StartEditing)]
        }
        Action::StopEditing => vec![Msg::Compression(CompressionMsg::StopEditing)],
        Action::LoadNextSample => vec![Msg::Compression(CompressionMsg::LoadNextSample)],
        Action::NextScheme => vec![Msg::Compression(CompressionMsg::NextScheme)],
        Action::PreviousScheme => vec![Msg::Compression(CompressionMsg::PreviousScheme)],
        Action::GrowWindow => vec![Msg::Compression(CompressionMsg::GrowWindow)],
        Action::ShrinkWindow => vec![Msg::Compression(CompressionMsg::ShrinkWindow)],

        Action::NextField => vec![Msg::Cost(CostMsg::NextField)],
        Action::PreviousField => vec![Msg::Cost(CostMsg::PreviousField)],
        Action::Increase => vec![Msg::Cost(CostMsg::Increase)],
        Action::Decrease => vec![Msg::Cost(CostMsg::Decrease)],

        Action::ToggleSimulation => vec![Msg::RateLimit(RateLimitMsg::Toggle)],
        Action::ResetSimulation => vec![Msg::RateLimit(RateLimitMsg::Reset)],
        Action::NextStrategy => vec![Msg::RateLimit(RateLimitMsg::NextStrategy)],
        Action::ToggleBurst => vec![Msg::RateLimit(RateLimitMsg::ToggleBurst)],

        Action::StartEditing => vec![],
    }
}
