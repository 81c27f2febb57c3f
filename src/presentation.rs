//! Presentation layer
//!
//! - Components: one view per tab plus the surrounding layout
//! - Widgets: small renderers shared by the components
//! - Configuration: key bindings and named styles

pub mod components;
pub mod config;
pub mod widgets;
