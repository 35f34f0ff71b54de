#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::model::{SeriesParams, SubarrayParams};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_i32_linear_span, validate_ordered, validate_positive_number, Validate,
};

#[cfg(feature = "cli")]
pub use cli::CliConfig;

impl Validate for SeriesParams {
    fn validate(&self) -> Result<()> {
        validate_i32_linear_span("iterations", self.iterations, self.param1, self.param2)?;

        // Denominators i*param1 ± param2 hit zero when param2 is a multiple of param1.
        if self.iterations > 0 {
            let (p1, p2) = (i64::from(self.param1), i64::from(self.param2));
            let zero_hit = if p1 == 0 {
                p2 == 0
            } else {
                p2 % p1 == 0 && (1..=i64::from(self.iterations)).contains(&(p2 / p1).abs())
            };
            if zero_hit {
                tracing::warn!(
                    "Series with param1={} param2={} divides by zero; result will not be finite",
                    self.param1,
                    self.param2
                );
            }
        }
        Ok(())
    }
}

impl Validate for SubarrayParams {
    fn validate(&self) -> Result<()> {
        validate_positive_number("n", self.n, 1)?;
        validate_positive_number("runs", self.runs, 1)?;
        validate_ordered("min_val", self.min_val, "max_val", self.max_val)?;
        Ok(())
    }
}
