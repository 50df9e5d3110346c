//! One plotted value.

use super::style::ChartColor;

#[derive(Debug, Clone)]
pub struct DataPoint {
    /// Axis label and tooltip prefix.
    pub label: String,
    pub value: f64,
    /// Replaces the chart's bar color for this point only.
    pub color: Option<ChartColor>,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    /// A point whose value is a number of codes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn count(label: impl Into<String>, count: usize) -> Self {
        Self::new(label, count as f64)
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = Some(color);
        self
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
