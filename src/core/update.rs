use crate::core::{
    cmd::Cmd,
    msg::{compression::CompressionMsg, system::SystemMsg, Msg},
    state::AppState,
    textarea_engine::{NoopTextAreaEngine, TextAreaEngine},
};

/// Dependencies `update` may call without giving up purity
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
///
/// Text input is ignored here; use [`update_with_context`] with a real engine.
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    update_with_context(
        msg,
        state,
        &UpdateContext {
            text_area: &NoopTextAreaEngine,
        },
    )
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Navigation(navigation_msg) => {
            let commands = state.navigation.update(navigation_msg);
            (state, commands)
        }

        Msg::Compression(compression_msg) => {
            let notice = match &compression_msg {
                CompressionMsg::StartEditing => Some(Notice::Editing),
                CompressionMsg::StopEditing => Some(Notice::Clear),
                CompressionMsg::LoadNextSample => Some(Notice::Sample),
                _ => None,
            };
            let mut commands = state.compression.update(compression_msg, ctx.text_area);

            let status = match notice {
                Some(Notice::Editing) => Some(SystemMsg::UpdateStatusMessage(
                    "Editing input, Esc to finish".to_owned(),
                )),
                Some(Notice::Clear) => Some(SystemMsg::ClearStatusMessage),
                Some(Notice::Sample) => state.compression.current_sample().map(|sample| {
                    SystemMsg::UpdateStatusMessage(format!("Loaded sample: {}", sample.name))
                }),
                None => None,
            };
            if let Some(status) = status {
                commands.extend(state.system.update(status));
            }
            (state, commands)
        }

        Msg::Cost(cost_msg) => {
            let commands = state.cost.update(cost_msg);
            (state, commands)
        }

        Msg::RateLimit(rate_limit_msg) => {
            let was_running = state.rate_limit.is_running();
            let mut commands = state.rate_limit.update(rate_limit_msg);
            if was_running != state.rate_limit.is_running() {
                let notice = SystemMsg::UpdateStatusMessage(state.rate_limit.phase_notice());
                commands.extend(state.system.update(notice));
            }
            (state, commands)
        }
    }
}

enum Notice {
    Editing,
    Clear,
    Sample,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{
            msg::{
                cost::CostMsg, navigation::NavigationMsg, rate_limit::RateLimitMsg,
                system::SystemMsg,
            },
            state::navigation::Tab,
        },
        infrastructure::tui::textarea_engine::TuiTextAreaEngine,
    };

    #[test]
    fn test_update_quit() {
        let (state, cmds) = update(Msg::System(SystemMsg::Quit), AppState::default());
        assert!(state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_navigation() {
        let (state, _) = update(
            Msg::Navigation(NavigationMsg::Show(Tab::Cost)),
            AppState::default(),
        );
        assert_eq!(state.current_tab(), Tab::Cost);
    }

    #[test]
    fn test_editing_status_messages() {
        let (state, _) = update(
            Msg::Compression(CompressionMsg::StartEditing),
            AppState::default(),
        );
        assert!(state.compression.editing);
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Editing input, Esc to finish")
        );

        let (state, _) = update(Msg::Compression(CompressionMsg::StopEditing), state);
        assert!(!state.compression.editing);
        assert_eq!(state.system.status_message, None);
    }

    #[test]
    fn test_load_sample_reports_name() {
        let (state, _) = update(
            Msg::Compression(CompressionMsg::LoadNextSample),
            AppState::default(),
        );
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Loaded sample: Repeated phrase")
        );
    }

    #[test]
    fn test_text_input_needs_engine() {
        let key = KeyEvent::new(KeyCode::Char('!'), KeyModifiers::NONE);
        let (state, _) = update(
            Msg::Compression(CompressionMsg::StartEditing),
            AppState::default(),
        );
        let before = state.compression.text().to_owned();

        let (state, _) = update(
            Msg::Compression(CompressionMsg::ProcessTextAreaInput(key)),
            state,
        );
        assert_eq!(state.compression.text(), before);

        let ctx = UpdateContext {
            text_area: &TuiTextAreaEngine,
        };
        let (state, _) = update_with_context(
            Msg::Compression(CompressionMsg::ProcessTextAreaInput(key)),
            state,
            &ctx,
        );
        assert_eq!(state.compression.text(), format!("{before}!"));
    }

    #[test]
    fn test_cost_update() {
        let (state, _) = update(Msg::Cost(CostMsg::NextField), AppState::default());
        let (state, _) = update(Msg::Cost(CostMsg::NextField), state);
        let (state, _) = update(Msg::Cost(CostMsg::Increase), state);
        assert_eq!(state.cost.workload.input_tokens, 1100);
    }

    #[test]
    fn test_simulation_end_sets_status() {
        let (state, cmds) = update(Msg::RateLimit(RateLimitMsg::Toggle), AppState::default());
        assert_eq!(cmds.len(), 1);
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Simulation running with strategy None")
        );

        let (state, _) = update(
            Msg::RateLimit(RateLimitMsg::Tick(Duration::from_secs(10))),
            state,
        );
        assert!(!state.rate_limit.is_running());
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Simulation stopped: 19 issued, 19 accepted, 0 errors")
        );
    }
}
