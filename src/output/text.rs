use std::fmt::Write;

use crate::error::Result;
use crate::report::ReportSummary;
use crate::scanner::ScanReport;

use super::{ColorMode, OutputFormatter, RunSummary, ansi};

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.for_stdout(),
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_scan(&self, scan: &ScanReport, output: &mut String) {
        let valid = self.colorize(&scan.valid.to_string(), ansi::GREEN);
        let invalid_color = if scan.invalid > 0 { ansi::RED } else { ansi::GREEN };
        let invalid = self.colorize(&scan.invalid.to_string(), invalid_color);

        let _ = writeln!(
            output,
            "Summary: {} codes checked, {valid} valid, {invalid} invalid",
            scan.total
        );
        let _ = writeln!(output, "   Valid codes:   {}", scan.valid_output.display());
        if let Some(path) = &scan.invalid_output {
            let note = if scan.invalid_output_overwritten {
                " (overwritten)"
            } else {
                ""
            };
            let _ = writeln!(output, "   Invalid codes: {}{note}", path.display());
        }
    }

    fn format_report(&self, report: &ReportSummary, output: &mut String) {
        let years = match (report.first_year, report.last_year) {
            (Some(first), Some(last)) if first == last => format!("year {first}"),
            (Some(first), Some(last)) => format!("years {first}-{last}"),
            _ => "no years".to_string(),
        };
        let _ = write!(
            output,
            "Report: {} codes, {years}, {} countries",
            report.codes, report.countries
        );
        if report.unmatched > 0 {
            let unmatched = self.colorize(&report.unmatched.to_string(), ansi::YELLOW);
            let _ = write!(output, ", {unmatched} without a known country");
        }
        if report.skipped > 0 {
            let skipped = self.colorize(&report.skipped.to_string(), ansi::YELLOW);
            let _ = write!(output, ", {skipped} skipped");
        }
        output.push('\n');
        let _ = writeln!(output, "   {}", report.year_chart.display());
        let _ = writeln!(output, "   {}", report.country_chart.display());
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &RunSummary) -> Result<String> {
        let mut output = String::new();
        if let Some(scan) = &summary.scan {
            self.format_scan(scan, &mut output);
        }
        if let Some(report) = &summary.report {
            self.format_report(report, &mut output);
        }
        Ok(output)
    }
}

#[cfg(test)]
impl TextFormatter {
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
