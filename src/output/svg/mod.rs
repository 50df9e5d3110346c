//! SVG chart rendering for the corpus report.
//!
//! Charts are self-contained documents: colors are CSS variables with
//! hex fallbacks, and every bar carries a `<title>` tooltip.

mod chart;
mod country_chart;
mod data;
mod element;
mod format;
mod histogram;
mod style;

pub use chart::HorizontalBarChart;
pub use country_chart::{CountryChart, DEFAULT_MAX_COUNTRIES};
pub use data::DataPoint;
pub use element::{Axis, AxisOrientation, Bar, SvgElement, count_scale_top};
pub use format::{format_number, html_escape};
pub use histogram::YearHistogram;
pub use style::{ChartColor, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
