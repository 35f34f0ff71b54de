use crate::domain::model::{Measurement, SeriesParams};
use crate::domain::ports::Workload;
use crate::utils::error::Result;
use std::io::Write;

/// Evaluates `1 - Σ 1/(i·param1 - param2) + Σ 1/(i·param1 + param2)` for
/// `i` in `1..=iterations`.
///
/// Denominators are formed in `i32` and converted to `f64` before dividing.
/// The caller guarantees `iterations * param1 ± param2` fits in `i32`; a zero
/// denominator is not trapped and propagates as an infinity or NaN.
pub fn calculate(iterations: i32, param1: i32, param2: i32) -> f64 {
    let mut result = 1.0;
    for i in 1..=iterations {
        let j = i * param1 - param2;
        result -= 1.0 / f64::from(j);
        let j = i * param1 + param2;
        result += 1.0 / f64::from(j);
    }
    result
}

/// The π benchmark: the series above scaled by `params.scale`.
#[derive(Debug, Clone, Default)]
pub struct SeriesWorkload {
    params: SeriesParams,
}

impl SeriesWorkload {
    pub fn new(params: SeriesParams) -> Self {
        Self { params }
    }
}

impl Workload for SeriesWorkload {
    type Output = f64;

    fn name(&self) -> &str {
        "pi-series"
    }

    fn execute(&self) -> f64 {
        let p = &self.params;
        calculate(p.iterations, p.param1, p.param2) * p.scale
    }

    fn report(&self, measurement: &Measurement<f64>, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Result: {:.12}", measurement.value)?;
        writeln!(out, "Execution Time: {:.12} seconds", measurement.elapsed_secs())?;
        Ok(())
    }
}
