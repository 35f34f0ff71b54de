use crate::domain::model::Measurement;
use crate::utils::error::Result;
use std::io::Write;

pub trait Workload {
    type Output;

    fn name(&self) -> &str;
    fn execute(&self) -> Self::Output;

    /// Writes the human-readable report for a finished run.
    fn report(&self, measurement: &Measurement<Self::Output>, out: &mut dyn Write) -> Result<()>;
}
