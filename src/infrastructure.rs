//! Infrastructure layer
//!
//! Everything that touches the outside world: the terminal, command line
//! arguments and configuration files.

pub mod cli;
pub mod config;
pub mod tui;
