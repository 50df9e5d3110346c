//! Primitive SVG elements: axes and bars.

use std::fmt::Write;

use super::format::{format_number, html_escape};
use super::style::{ChartColor, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Axis line with tick marks.
///
/// Label positions are fractions of `length` in `0.0..=1.0`, measured from
/// `(x, y)`: rightwards for horizontal axes, upwards for vertical ones.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
}

impl Axis {
    fn new(orientation: AxisOrientation, x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation,
            x,
            y,
            length,
            labels: Vec::new(),
            color: ChartColor::css_var("text-muted"),
            tick_length: 5.0,
            font_size: 10.0,
        }
    }

    #[must_use]
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Horizontal, x, y, length)
    }

    #[must_use]
    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Vertical, x, y, length)
    }

    /// Vertical axis labelled with whole counts from 0 to `max_count`.
    ///
    /// At most `steps + 1` ticks are produced; the step is rounded up to a
    /// whole number so small counts don't get fractional labels.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap
    )]
    pub fn count_scale(x: f64, y: f64, length: f64, max_count: usize, steps: usize) -> Self {
        let steps = steps.max(1);
        let top = count_scale_top(max_count, steps);
        let step = top / steps;

        let labels = (0..=steps)
            .map(|i| {
                let count = step * i;
                (count as f64 / top as f64, format_number(count as i64))
            })
            .collect();

        Self::vertical(x, y, length).with_labels(labels)
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    fn end_point(&self) -> (f64, f64) {
        match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y - self.length),
        }
    }

    /// Tick segment `(x1, y1, x2, y2)` plus label anchor point for a position.
    fn tick_at(&self, pos: f64) -> ((f64, f64, f64, f64), (f64, f64), TextAnchor) {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tx = pos.mul_add(self.length, self.x);
                let label_y = self.y + self.tick_length + self.font_size + 2.0;
                (
                    (tx, self.y, tx, self.y + self.tick_length),
                    (tx, label_y),
                    TextAnchor::Middle,
                )
            }
            AxisOrientation::Vertical => {
                let ty = pos.mul_add(-self.length, self.y);
                let label_x = self.x - self.tick_length - 4.0;
                (
                    (self.x, ty, self.x - self.tick_length, ty),
                    (label_x, ty + self.font_size / 3.0),
                    TextAnchor::End,
                )
            }
        }
    }
}

/// Value at the top of a [`Axis::count_scale`] axis with the same arguments.
#[must_use]
pub fn count_scale_top(max_count: usize, steps: usize) -> usize {
    let steps = steps.max(1);
    max_count.max(1).div_ceil(steps) * steps
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();
        let (end_x, end_y) = self.end_point();

        let _ = writeln!(
            output,
            r#"<line x1="{}" y1="{}" x2="{end_x}" y2="{end_y}" stroke="{color}" stroke-width="1"/>"#,
            self.x, self.y
        );

        for (pos, label) in &self.labels {
            let ((x1, y1, x2, y2), (lx, ly), anchor) = self.tick_at(*pos);
            let _ = writeln!(
                output,
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-width="1"/>"#
            );
            let _ = writeln!(
                output,
                r#"<text x="{lx}" y="{ly}" text-anchor="{anchor}" fill="{color}" font-size="{}">{}</text>"#,
                self.font_size,
                html_escape(label)
            );
        }

        output
    }
}

/// A single bar; `value` is the count it represents.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub label: String,
    pub value: f64,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let escaped_label = html_escape(&self.label);
        // <title> doubles as hover tooltip
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}" rx="2">
    <title>{escaped_label}: {}</title>
</rect>"#,
            self.x, self.y, self.width, self.height, self.value
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
