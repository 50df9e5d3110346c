//! Semantic checks applied after parsing.

use std::ops::RangeInclusive;

use crate::error::{IsrcError, Result};

use super::Config;

pub const WIDTH_RANGE: RangeInclusive<u32> = 200..=4000;

/// # Errors
/// Returns [`IsrcError::Config`] naming the first offending key.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.scan.jobs == 0 {
        return Err(IsrcError::Config(
            "scan.jobs must be at least 1".to_string(),
        ));
    }

    for (key, value) in [
        ("report.year_chart", &config.report.year_chart),
        ("report.country_chart", &config.report.country_chart),
    ] {
        if value.trim().is_empty() {
            return Err(IsrcError::Config(format!("{key} must not be empty")));
        }
    }

    if config.report.year_chart == config.report.country_chart {
        return Err(IsrcError::Config(format!(
            "report.year_chart and report.country_chart are both '{}'",
            config.report.year_chart
        )));
    }

    if !WIDTH_RANGE.contains(&config.report.width) {
        return Err(IsrcError::Config(format!(
            "report.width must be between {} and {}, got {}",
            WIDTH_RANGE.start(),
            WIDTH_RANGE.end(),
            config.report.width
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
