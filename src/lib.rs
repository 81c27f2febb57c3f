//! # conceptlab
//!
//! A terminal playground with three interactive demos of ideas behind
//! working with AI/ML APIs:
//!
//! - **Compression lab**: how frequency ranks, windowed matches and run
//!   lengths shrink (or grow) a piece of text
//! - **Cost calculator**: what an LLM workload costs per request, day, month
//!   and year, and how every known model compares
//! - **Rate limit simulator**: a decaying request budget, burst traffic and
//!   three client strategies for rejected requests
//!
//! ## Architecture
//!
//! The crate follows an Elm-like architecture:
//!
//! - **State** ([`core::state`]): everything the UI shows
//! - **Message** ([`core::msg`]): what can change the state
//! - **Update** ([`core::update`]): pure state transitions
//! - **Command** ([`core::cmd`]): side effects for the runner
//! - **View** ([`presentation::components`]): rendering from state
//!
//! ```rust
//! use conceptlab::core::{
//!     msg::{navigation::NavigationMsg, Msg},
//!     state::{navigation::Tab, AppState},
//!     update::update,
//! };
//!
//! let state = AppState::default();
//! let (state, commands) = update(Msg::Navigation(NavigationMsg::NextTab), state);
//!
//! assert_eq!(state.current_tab(), Tab::Cost);
//! assert!(commands.is_empty());
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
