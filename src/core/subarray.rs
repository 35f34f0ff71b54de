use crate::domain::model::{Measurement, SubarrayParams};
use crate::domain::ports::Workload;
use crate::utils::error::Result;
use std::io::Write;

const LCG_A: u64 = 1_664_525;
const LCG_C: u64 = 1_013_904_223;
const LCG_M: u64 = 1 << 32;

/// Linear congruential generator over `2^32`. The seed itself is never
/// yielded; the first item is the first step.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % LCG_M,
        }
    }
}

impl Iterator for Lcg {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.state = (LCG_A * self.state + LCG_C) % LCG_M;
        Some(self.state)
    }
}

/// `n` values in `min_val..=max_val` drawn from an LCG seeded with `seed`.
pub fn random_values(n: usize, seed: u64, min_val: i64, max_val: i64) -> Vec<i64> {
    let span = max_val.abs_diff(min_val).saturating_add(1);
    Lcg::new(seed)
        .take(n)
        .map(|v| (v % span) as i64 + min_val)
        .collect()
}

/// Largest sum over all non-empty contiguous runs, `None` for an empty slice.
/// Sums saturate at the `i64` bounds.
pub fn max_subarray_sum(values: &[i64]) -> Option<i64> {
    let (&first, rest) = values.split_first()?;
    let mut best = first;
    let mut current = first;
    for &v in rest {
        current = v.max(current.saturating_add(v));
        best = best.max(current);
    }
    Some(best)
}

/// Sum of the maximum subarray sums of `runs` sequences, each seeded by the
/// next value of an LCG started at `params.initial_seed`. Saturates like
/// `max_subarray_sum`.
pub fn total_max_subarray_sum(params: &SubarrayParams) -> Option<i64> {
    Lcg::new(params.initial_seed)
        .take(params.runs)
        .try_fold(0i64, |total, seed| {
            let values = random_values(params.n, seed, params.min_val, params.max_val);
            max_subarray_sum(&values).map(|sum| total.saturating_add(sum))
        })
}

#[derive(Debug, Clone, Default)]
pub struct SubarrayWorkload {
    params: SubarrayParams,
}

impl SubarrayWorkload {
    pub fn new(params: SubarrayParams) -> Self {
        Self { params }
    }
}

impl Workload for SubarrayWorkload {
    type Output = Option<i64>;

    fn name(&self) -> &str {
        "max-subarray"
    }

    fn execute(&self) -> Option<i64> {
        total_max_subarray_sum(&self.params)
    }

    fn report(&self, measurement: &Measurement<Option<i64>>, out: &mut dyn Write) -> Result<()> {
        match measurement.value {
            Some(total) => writeln!(
                out,
                "Total Maximum Subarray Sum ({} runs): {}",
                self.params.runs, total
            )?,
            None => writeln!(
                out,
                "Total Maximum Subarray Sum ({} runs): -Infinity",
                self.params.runs
            )?,
        }
        writeln!(out, "Execution Time: {:.6} seconds", measurement.elapsed_secs())?;
        Ok(())
    }
}
