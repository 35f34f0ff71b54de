pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{bench::BenchEngine, series::SeriesWorkload, subarray::SubarrayWorkload};
pub use domain::model::{Measurement, SeriesParams, SubarrayParams};
pub use utils::error::{BenchError, Result};
