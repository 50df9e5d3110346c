//! Ranked bar chart of ISRCs per issuing country.

use super::chart::HorizontalBarChart;
use super::data::DataPoint;
use super::element::SvgElement;
use super::style::ChartColor;
use crate::report::CountryDistribution;

/// Countries past this rank are folded into a single "Other" row.
pub const DEFAULT_MAX_COUNTRIES: usize = 20;
const MAX_LABEL_CHARS: usize = 24;
const LABEL_WIDTH: f64 = 180.0;

#[derive(Debug)]
pub struct CountryChart {
    inner: HorizontalBarChart,
}

impl CountryChart {
    #[must_use]
    pub fn from_distribution(dist: &CountryDistribution) -> Self {
        Self::with_max_countries(dist, DEFAULT_MAX_COUNTRIES)
    }

    /// Keep the `max_countries` largest countries; the rest become "Other".
    #[must_use]
    pub fn with_max_countries(dist: &CountryDistribution, max_countries: usize) -> Self {
        let ranked = dist.ranked();
        let shown = ranked.len().min(max_countries.max(1));

        let mut data: Vec<DataPoint> = ranked[..shown]
            .iter()
            .map(|entry| DataPoint::count(short_label(entry.country.name), entry.count))
            .collect();

        let rest = &ranked[shown..];
        if !rest.is_empty() {
            let count: usize = rest.iter().map(|entry| entry.count).sum();
            data.push(
                DataPoint::count(format!("Other ({} countries)", rest.len()), count)
                    .with_color(ChartColor::css_var("chart-secondary")),
            );
        }

        let inner = HorizontalBarChart::new("ISRC country repartition", data)
            .with_width(600.0)
            .with_label_width(LABEL_WIDTH)
            .with_empty_message("No ISRCs to display");
        Self { inner }
    }

    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.inner.width = width;
        self
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.inner.data
    }
}

impl SvgElement for CountryChart {
    fn render(&self) -> String {
        self.inner.render()
    }
}

/// Long official names are cut to fit the label column.
fn short_label(name: &str) -> String {
    if name.chars().count() <= MAX_LABEL_CHARS {
        return name.to_string();
    }
    let mut label: String = name.chars().take(MAX_LABEL_CHARS - 1).collect();
    label.push('…');
    label
}

#[cfg(test)]
#[path = "country_chart_tests.rs"]
mod tests;
