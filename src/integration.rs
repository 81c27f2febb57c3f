//! Wiring between the pure core and the terminal
//!
//! [`runtime::Runtime`] owns the state and runs translate, update and
//! execute. [`app_runner::AppRunner`] feeds it terminal events and renders.

pub mod app_runner;
pub mod runtime;
