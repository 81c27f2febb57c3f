//! Domain logic
//!
//! Pure, UI-independent code behind the three labs:
//! - Toy compressors (rank coding, windowed matching, run length)
//! - LLM API cost model
//! - Rate limit simulation
//! - Text helpers for rendering

pub mod compression;
pub mod pricing;
pub mod rate_limit;
pub mod text;
