//! Horizontal bar chart for ranked categories.

use std::fmt::Write;

use super::data::DataPoint;
use super::element::{Bar, SvgElement};
use super::format::{empty_state, format_number, html_escape, svg_open};
use super::style::ChartColor;

/// Horizontal bar chart, one row per data point in the given order.
#[derive(Debug)]
pub struct HorizontalBarChart {
    pub title: String,
    pub data: Vec<DataPoint>,
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub bar_height: f64,
    pub bar_gap: f64,
    pub bar_color: ChartColor,
    pub show_values: bool,
    /// Shown instead of bars when `data` is empty.
    pub empty_message: String,
}

impl Default for HorizontalBarChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            data: Vec::new(),
            width: 400.0,
            height: 62.0, // padding_top + bar_height + bar_gap + padding_bottom
            padding_left: 100.0,
            padding_right: 60.0,
            padding_top: 20.0,
            padding_bottom: 10.0,
            bar_height: 24.0,
            bar_gap: 8.0,
            bar_color: ChartColor::css_var("chart-primary"),
            show_values: true,
            empty_message: "No data".to_string(),
        }
    }
}

impl HorizontalBarChart {
    #[must_use]
    pub fn new(title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        let mut chart = Self {
            title: title.into(),
            data,
            ..Self::default()
        };
        chart.height = chart.fitted_height();
        chart
    }

    #[allow(clippy::cast_precision_loss)]
    fn fitted_height(&self) -> f64 {
        let rows = self.data.len().max(1);
        (self.bar_height + self.bar_gap).mul_add(rows as f64, self.padding_top + self.padding_bottom)
    }

    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Room reserved on the left for row labels.
    #[must_use]
    pub const fn with_label_width(mut self, width: f64) -> Self {
        self.padding_left = width;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.bar_color = color;
        self
    }

    #[must_use]
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }
}

impl SvgElement for HorizontalBarChart {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn render(&self) -> String {
        let mut output = svg_open(self.width, self.height, &self.title);

        if self.data.is_empty() {
            output.push_str(&empty_state(self.width, self.height, &self.empty_message));
            output.push_str("</svg>");
            return output;
        }

        let chart_width = (self.width - self.padding_left - self.padding_right).max(0.0);
        let max_value = self
            .data
            .iter()
            .map(|d| d.value)
            .fold(0.0_f64, f64::max)
            .max(1.0);

        let label_color = ChartColor::css_var("text").to_css();
        let value_color = ChartColor::css_var("text-muted").to_css();

        for (i, point) in self.data.iter().enumerate() {
            let y = (self.bar_height + self.bar_gap).mul_add(i as f64, self.padding_top);
            let bar_width = (point.value / max_value) * chart_width;
            let middle = y + self.bar_height / 2.0;

            let bar = Bar {
                x: self.padding_left,
                y,
                width: bar_width,
                height: self.bar_height,
                color: point
                    .color
                    .clone()
                    .unwrap_or_else(|| self.bar_color.clone()),
                label: point.label.clone(),
                value: point.value,
            };
            let _ = writeln!(output, "    {}", bar.render());

            let _ = writeln!(
                output,
                r#"    <text x="{}" y="{middle}" text-anchor="end" fill="{label_color}" font-size="12" dominant-baseline="middle">{}</text>"#,
                self.padding_left - 8.0,
                html_escape(&point.label)
            );

            if self.show_values {
                let _ = writeln!(
                    output,
                    r#"    <text x="{}" y="{middle}" text-anchor="start" fill="{value_color}" font-size="11" dominant-baseline="middle">{}</text>"#,
                    self.padding_left + bar_width + 6.0,
                    format_number(point.value as i64)
                );
            }
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
