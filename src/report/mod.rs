//! Year and country summaries of a corpus of valid ISRCs.
//!
//! Reads the valid-output file written by the scanner (one code per line)
//! and renders two SVG charts: a histogram of reference years and a ranked
//! bar chart of issuing countries.

pub mod countries;
mod country;
mod year;

pub use country::{CountryCount, CountryDistribution};
pub use year::YearDistribution;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde::Serialize;

use crate::error::{IsrcError, Result};
use crate::isrc::Isrc;
use crate::output::Logger;
use crate::output::svg::{CountryChart, SvgElement, YearHistogram};

pub const DEFAULT_YEAR_CHART: &str = "ISRC_year_distribution.svg";
pub const DEFAULT_COUNTRY_CHART: &str = "ISRC_country_repartition.svg";
pub const DEFAULT_CHART_WIDTH: f64 = 600.0;

/// The current calendar year in local time.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Codes read back from a valid-output file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pub codes: Vec<Isrc>,
    /// Non-empty lines that did not parse as an ISRC.
    pub skipped: usize,
}

impl Corpus {
    /// Parse each line as an ISRC. Blank lines are ignored.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corpus = Self::default();
        for line in lines {
            let line = line.as_ref().trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                continue;
            }
            match Isrc::parse(line) {
                Ok(isrc) => corpus.codes.push(isrc),
                Err(_) => corpus.skipped += 1,
            }
        }
        corpus
    }

    /// Read a valid-output file.
    ///
    /// # Errors
    /// Returns [`IsrcError::FileRead`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| IsrcError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_lines(content.lines()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub output_dir: PathBuf,
    pub year_chart: String,
    pub country_chart: String,
    pub width: f64,
    /// Year used to decide the `19YY`/`20YY` rollback.
    pub current_year: i32,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            year_chart: DEFAULT_YEAR_CHART.to_string(),
            country_chart: DEFAULT_COUNTRY_CHART.to_string(),
            width: DEFAULT_CHART_WIDTH,
            current_year: current_year(),
        }
    }
}

/// What a report run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub codes: usize,
    pub skipped: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub countries: usize,
    pub unmatched: usize,
    pub year_chart: PathBuf,
    pub country_chart: PathBuf,
}

pub struct ReportGenerator {
    options: ReportOptions,
}

impl ReportGenerator {
    #[must_use]
    pub const fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &ReportOptions {
        &self.options
    }

    #[must_use]
    pub fn year_chart_path(&self) -> PathBuf {
        self.options.output_dir.join(&self.options.year_chart)
    }

    #[must_use]
    pub fn country_chart_path(&self) -> PathBuf {
        self.options.output_dir.join(&self.options.country_chart)
    }

    #[must_use]
    pub fn render_year_chart(&self, dist: &YearDistribution) -> String {
        YearHistogram::from_distribution(dist)
            .with_width(self.options.width)
            .render()
    }

    #[must_use]
    pub fn render_country_chart(&self, dist: &CountryDistribution) -> String {
        CountryChart::from_distribution(dist)
            .with_width(self.options.width)
            .render()
    }

    /// Read `valid_path` and write both charts.
    ///
    /// # Errors
    /// Returns an error if the valid file cannot be read or a chart cannot be written.
    pub fn generate(&self, valid_path: &Path, logger: &dyn Logger) -> Result<ReportSummary> {
        let corpus = Corpus::load(valid_path)?;
        if corpus.skipped > 0 {
            logger.warning(&format!(
                "{} line(s) in {} are not valid ISRCs and were skipped",
                corpus.skipped,
                valid_path.display()
            ));
        }
        self.generate_from_corpus(&corpus, logger)
    }

    /// Write both charts for an already-loaded corpus.
    ///
    /// # Errors
    /// Returns an error if the output directory or a chart cannot be written.
    pub fn generate_from_corpus(
        &self,
        corpus: &Corpus,
        logger: &dyn Logger,
    ) -> Result<ReportSummary> {
        let years = YearDistribution::from_codes(&corpus.codes, self.options.current_year);
        let countries = CountryDistribution::from_codes(&corpus.codes);

        for (prefix, count) in countries.unmatched() {
            logger.info(&format!("No country found for prefix {prefix} ({count} ISRCs)"));
        }

        fs::create_dir_all(&self.options.output_dir).map_err(|source| IsrcError::FileWrite {
            path: self.options.output_dir.clone(),
            source,
        })?;

        let year_chart = self.year_chart_path();
        write_chart(&year_chart, &self.render_year_chart(&years))?;
        logger.success(&format!(
            "ISRC year distribution image saved: {}",
            year_chart.display()
        ));

        let country_chart = self.country_chart_path();
        write_chart(&country_chart, &self.render_country_chart(&countries))?;
        logger.success(&format!(
            "ISRC country repartition image saved: {}",
            country_chart.display()
        ));

        let range = years.range();
        Ok(ReportSummary {
            codes: corpus.codes.len(),
            skipped: corpus.skipped,
            first_year: range.map(|(first, _)| first),
            last_year: range.map(|(_, last)| last),
            countries: countries.ranked().len(),
            unmatched: countries.unmatched_total(),
            year_chart,
            country_chart,
        })
    }
}

fn write_chart(path: &Path, svg: &str) -> Result<()> {
    fs::write(path, svg).map_err(|source| IsrcError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
