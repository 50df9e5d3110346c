use std::path::PathBuf;

use super::*;
use crate::report::ReportSummary;
use crate::scanner::ScanReport;

fn scan() -> ScanReport {
    ScanReport {
        total: 3,
        valid: 2,
        invalid: 1,
        valid_output: PathBuf::from("ISRC_valid.txt"),
        invalid_output: Some(PathBuf::from("ISRC_invalid.txt")),
        invalid_output_overwritten: true,
    }
}

#[test]
fn scan_only_omits_report() {
    let summary = RunSummary {
        scan: Some(scan()),
        report: None,
    };
    let output = JsonFormatter.format(&summary).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["scan"]["total"], 3);
    assert_eq!(parsed["scan"]["invalid"], 1);
    assert_eq!(parsed["scan"]["invalid_output"], "ISRC_invalid.txt");
    assert_eq!(parsed["scan"]["invalid_output_overwritten"], true);
    assert!(parsed.get("report").is_none());
}

#[test]
fn report_fields_are_serialized() {
    let summary = RunSummary {
        scan: None,
        report: Some(ReportSummary {
            codes: 2,
            skipped: 1,
            first_year: Some(2015),
            last_year: None,
            countries: 1,
            unmatched: 0,
            year_chart: PathBuf::from("years.svg"),
            country_chart: PathBuf::from("countries.svg"),
        }),
    };
    let output = JsonFormatter.format(&summary).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["report"]["codes"], 2);
    assert_eq!(parsed["report"]["first_year"], 2015);
    assert!(parsed["report"]["last_year"].is_null());
    assert_eq!(parsed["report"]["year_chart"], "years.svg");
    assert!(parsed.get("scan").is_none());
}

#[test]
fn output_is_pretty_printed() {
    let summary = RunSummary {
        scan: Some(scan()),
        report: None,
    };
    let output = JsonFormatter.format(&summary).unwrap();
    assert!(output.contains("\n  \"scan\": {"));
}
