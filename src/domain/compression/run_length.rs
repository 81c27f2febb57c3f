use std::{fmt, iter};

/// Bytes charged per run: one for the symbol, one for the count
pub const RUN_BYTES: usize = 2;

/// A maximal run of one repeated symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RleRun {
    pub symbol: char,
    pub count: usize,
}

impl RleRun {
    pub fn new(symbol: char, count: usize) -> Self {
        Self { symbol, count }
    }
}

impl fmt::Display for RleRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.symbol)
    }
}

/// Group consecutive identical chars into runs
///
/// Text without repeats produces one run per char, which is larger than the
/// input under the two-bytes-per-run size model.
pub fn run_length_encode(text: &str) -> Vec<RleRun> {
    let mut runs: Vec<RleRun> = Vec::new();

    for symbol in text.chars() {
        match runs.last_mut() {
            Some(run) if run.symbol == symbol => run.count += 1,
            _ => runs.push(RleRun::new(symbol, 1)),
        }
    }

    runs
}

pub fn run_length_decode(runs: &[RleRun]) -> String {
    runs.iter()
        .flat_map(|run| iter::repeat_n(run.symbol, run.count))
        .collect()
}
