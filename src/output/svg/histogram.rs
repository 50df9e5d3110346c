//! Year-of-reference histogram.

use std::fmt::Write;

use super::data::DataPoint;
use super::element::{Axis, Bar, SvgElement, count_scale_top};
use super::format::{empty_state, format_number, html_escape, svg_open};
use super::style::ChartColor;
use crate::report::YearDistribution;

const Y_STEPS: usize = 4;
/// Beyond this many bars, per-bar count labels are dropped.
const MAX_VALUE_LABELS: usize = 20;
/// Upper bound on x-axis year labels; the rest are thinned out.
const MAX_YEAR_LABELS: usize = 15;

/// One bar per year, over a contiguous range of years.
#[derive(Debug)]
pub struct YearHistogram {
    pub title: String,
    pub data: Vec<DataPoint>,
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub bar_color: ChartColor,
    pub x_title: String,
    pub y_title: String,
    total: usize,
}

impl Default for YearHistogram {
    fn default() -> Self {
        Self {
            title: "ISRC year distribution".to_string(),
            data: Vec::new(),
            width: 600.0,
            height: 300.0,
            padding_left: 60.0,
            padding_right: 20.0,
            padding_top: 30.0,
            padding_bottom: 50.0,
            bar_color: ChartColor::css_var("chart-primary"),
            x_title: "Years".to_string(),
            y_title: "Numbers of ISRCs".to_string(),
            total: 0,
        }
    }
}

impl YearHistogram {
    #[must_use]
    pub fn from_distribution(dist: &YearDistribution) -> Self {
        let data = dist
            .contiguous()
            .into_iter()
            .map(|(year, count)| DataPoint::count(year.to_string(), count))
            .collect();
        Self {
            data,
            total: dist.total(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.bar_color = color;
        self
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Every n-th year gets an axis label.
    fn label_stride(&self) -> usize {
        self.data.len().div_ceil(MAX_YEAR_LABELS).max(1)
    }

    fn write_axes(&self, output: &mut String, max_count: usize, chart_width: f64, chart_height: f64) {
        let baseline = self.padding_top + chart_height;
        let y_axis = Axis::count_scale(self.padding_left, baseline, chart_height, max_count, Y_STEPS);
        output.push_str(&y_axis.render());

        let titles_color = ChartColor::css_var("text").to_css();
        let _ = writeln!(
            output,
            r#"    <text x="{}" y="{}" text-anchor="middle" fill="{titles_color}" font-size="11" font-weight="500">{}</text>"#,
            self.padding_left + chart_width / 2.0,
            self.height - 8.0,
            html_escape(&self.x_title)
        );
        let (yx, yy) = (14.0, self.padding_top + chart_height / 2.0);
        let _ = writeln!(
            output,
            r#"    <text x="{yx}" y="{yy}" text-anchor="middle" fill="{titles_color}" font-size="11" font-weight="500" transform="rotate(-90 {yx} {yy})">{}</text>"#,
            html_escape(&self.y_title)
        );
    }
}

impl SvgElement for YearHistogram {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn render(&self) -> String {
        let mut output = svg_open(self.width, self.height, &self.title);

        if self.total == 0 || self.data.is_empty() {
            output.push_str(&empty_state(self.width, self.height, "No ISRCs to display"));
            output.push_str("</svg>");
            return output;
        }

        let chart_width = (self.width - self.padding_left - self.padding_right).max(0.0);
        let chart_height = (self.height - self.padding_top - self.padding_bottom).max(0.0);
        let baseline = self.padding_top + chart_height;

        let max_count = self.data.iter().map(|d| d.value as usize).max().unwrap_or(0);
        let top = count_scale_top(max_count, Y_STEPS) as f64;

        let bar_count = self.data.len();
        let gap_ratio = 0.2;
        let total_gap = chart_width * gap_ratio;
        let bar_width = (chart_width - total_gap) / bar_count as f64;
        let gap = total_gap / (bar_count + 1) as f64;
        let base_offset = self.padding_left + gap;
        let stride = self.label_stride();

        let mut year_labels = Vec::new();
        let value_color = ChartColor::css_var("text").to_css();

        for (i, point) in self.data.iter().enumerate() {
            let x = (bar_width + gap).mul_add(i as f64, base_offset);
            let bar_height = (point.value / top) * chart_height;
            let y = baseline - bar_height;

            let bar = Bar {
                x,
                y,
                width: bar_width,
                height: bar_height,
                color: point
                    .color
                    .clone()
                    .unwrap_or_else(|| self.bar_color.clone()),
                label: point.label.clone(),
                value: point.value,
            };
            let _ = writeln!(output, "    {}", bar.render());

            if bar_count <= MAX_VALUE_LABELS && point.value > 0.0 {
                let _ = writeln!(
                    output,
                    r#"    <text x="{}" y="{}" text-anchor="middle" fill="{value_color}" font-size="10">{}</text>"#,
                    x + bar_width / 2.0,
                    y - 4.0,
                    format_number(point.value as i64)
                );
            }

            if i % stride == 0 {
                let center = x + bar_width / 2.0 - self.padding_left;
                year_labels.push((center / chart_width, point.label.clone()));
            }
        }

        let x_axis = Axis::horizontal(self.padding_left, baseline, chart_width).with_labels(year_labels);
        output.push_str(&x_axis.render());
        self.write_axes(&mut output, max_count, chart_width, chart_height);

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "histogram_tests.rs"]
mod tests;
