use crate::utils::error::{BenchError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(BenchError::InvalidParameterError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_ordered<T: PartialOrd + std::fmt::Display + Copy>(
    low_field: &str,
    low: T,
    high_field: &str,
    high: T,
) -> Result<()> {
    if low > high {
        return Err(BenchError::InvalidParameterError {
            field: low_field.to_string(),
            value: low.to_string(),
            reason: format!("Must not exceed {} ({})", high_field, high),
        });
    }
    Ok(())
}

/// Checks that `i * factor ± offset` stays inside `i32` for every `i` in `1..=count`.
pub fn validate_i32_linear_span(
    field_name: &str,
    count: i32,
    factor: i32,
    offset: i32,
) -> Result<()> {
    if count <= 0 {
        return Ok(());
    }

    let extremes = [i64::from(factor), i64::from(count) * i64::from(factor)];
    for base in extremes {
        for value in [base - i64::from(offset), base + i64::from(offset)] {
            if i32::try_from(value).is_err() {
                return Err(BenchError::InvalidParameterError {
                    field: field_name.to_string(),
                    value: count.to_string(),
                    reason: format!(
                        "Denominator {} overflows a 32-bit integer (factor {}, offset {})",
                        value, factor, offset
                    ),
                });
            }
        }
    }
    Ok(())
}
