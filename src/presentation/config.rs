//! UI configuration
//!
//! Key bindings and named styles, both keyed by [`Mode`].

pub mod keybindings;
pub mod styles;

pub use keybindings::{Action, KeyBindings, Mode};
pub use styles::Styles;
