//! Elm architecture core
//!
//! Raw terminal events are translated into [`msg::Msg`] values, folded into
//! [`state::AppState`] by [`update::update_with_context`], and any side effects
//! come back out as [`cmd::Cmd`] for the runner to execute.

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod textarea_engine;
pub mod translator;
pub mod update;
