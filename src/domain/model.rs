use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Inputs of the π series. `i * param1 ± param2` must fit in `i32` for every
/// `i` up to `iterations`; `SeriesParams::validate` checks this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesParams {
    pub iterations: i32,
    pub param1: i32,
    pub param2: i32,
    pub scale: f64,
}

impl Default for SeriesParams {
    fn default() -> Self {
        Self {
            iterations: 100_000_000,
            param1: 4,
            param2: 1,
            scale: 4.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubarrayParams {
    pub n: usize,
    pub initial_seed: u64,
    pub min_val: i64,
    pub max_val: i64,
    pub runs: usize,
}

impl Default for SubarrayParams {
    fn default() -> Self {
        Self {
            n: 10_000,
            initial_seed: 42,
            min_val: -10,
            max_val: 10,
            runs: 20,
        }
    }
}

/// A workload result together with the wall-clock time it took.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Measurement<T> {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
