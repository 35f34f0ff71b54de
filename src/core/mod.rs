pub mod bench;
pub mod series;
pub mod subarray;

pub use crate::domain::model::{Measurement, SeriesParams, SubarrayParams};
pub use crate::domain::ports::Workload;
pub use crate::utils::error::Result;
