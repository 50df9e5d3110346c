use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::report::{DEFAULT_COUNTRY_CHART, DEFAULT_YEAR_CHART};
use crate::scanner::{DEFAULT_INPUT_FILE, DEFAULT_INVALID_OUTPUT, DEFAULT_VALID_OUTPUT};

pub const DEFAULT_WIDTH: u32 = 600;

/// Contents of `.isrc-check.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// `[scan]`: where codes are read from and where the partitions go.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    #[serde(default = "default_input_file")]
    pub input_file: PathBuf,

    #[serde(default = "default_invalid_output")]
    pub invalid_output: PathBuf,

    #[serde(default = "default_valid_output")]
    pub valid_output: PathBuf,

    /// Worker threads used for validation.
    #[serde(default = "default_jobs")]
    pub jobs: usize,

    /// Exit with status 1 when invalid codes are found.
    #[serde(default)]
    pub strict: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            invalid_output: default_invalid_output(),
            valid_output: default_valid_output(),
            jobs: default_jobs(),
            strict: false,
        }
    }
}

/// `[report]`: chart generation after a scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_year_chart")]
    pub year_chart: String,

    #[serde(default = "default_country_chart")]
    pub country_chart: String,

    /// Chart width in SVG user units.
    #[serde(default = "default_width")]
    pub width: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output_dir: default_output_dir(),
            year_chart: default_year_chart(),
            country_chart: default_country_chart(),
            width: DEFAULT_WIDTH,
        }
    }
}

fn default_input_file() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_FILE)
}

fn default_invalid_output() -> PathBuf {
    PathBuf::from(DEFAULT_INVALID_OUTPUT)
}

fn default_valid_output() -> PathBuf {
    PathBuf::from(DEFAULT_VALID_OUTPUT)
}

const fn default_jobs() -> usize {
    1
}

const fn default_true() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_year_chart() -> String {
    DEFAULT_YEAR_CHART.to_string()
}

fn default_country_chart() -> String {
    DEFAULT_COUNTRY_CHART.to_string()
}

const fn default_width() -> u32 {
    DEFAULT_WIDTH
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
