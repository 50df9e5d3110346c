use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::error::IsrcError;
use crate::output::{MemoryLogger, Severity};

fn parse(extra: &[&str]) -> (ReportArgs, Cli) {
    let mut argv = vec!["isrc-check", "report", "--no-config"];
    argv.extend_from_slice(extra);

    let mut cli = Cli::parse_from(argv);
    match cli.command.take() {
        Some(Commands::Report(args)) => (args, cli),
        _ => panic!("Expected Report command"),
    }
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn report_charts_an_existing_valid_file() {
    let dir = TempDir::new().unwrap();
    let valid = dir.path().join("ISRC_valid.txt");
    fs::write(&valid, "USRC17607839\nUSRC17607840\nFRXYZ1234567\n").unwrap();
    let (args, cli) = parse(&[
        "--valid_output",
        path_arg(&valid),
        "--out-dir",
        path_arg(dir.path()),
        "--year",
        "2024",
    ]);
    let logger = MemoryLogger::new();

    let outcome = run_report_impl(&args, &cli, &logger).unwrap();

    assert_eq!(outcome.exit_code, EXIT_SUCCESS);
    assert!(outcome.summary.scan.is_none());
    let report = outcome.summary.report.unwrap();
    assert_eq!(report.codes, 3);
    assert_eq!(report.countries, 2);
    assert_eq!(report.first_year, Some(1976));
    assert_eq!(report.last_year, Some(2012));
    assert!(report.year_chart.is_file());
    assert!(report.country_chart.is_file());
    assert!(logger.contains(Severity::Success, "ISRC year distribution image saved"));
}

#[test]
fn report_year_override_changes_rollback() {
    let dir = TempDir::new().unwrap();
    let valid = dir.path().join("ISRC_valid.txt");
    fs::write(&valid, "USRC12007839\n").unwrap();
    let (args, cli) = parse(&[
        "--valid_output",
        path_arg(&valid),
        "--out-dir",
        path_arg(dir.path()),
        "--year",
        "2019",
    ]);

    let report = run_report_impl(&args, &cli, &MemoryLogger::new())
        .unwrap()
        .summary
        .report
        .unwrap();
    assert_eq!(report.first_year, Some(1920));
}

#[test]
fn missing_valid_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let (args, cli) = parse(&[
        "--valid_output",
        path_arg(&dir.path().join("absent.txt")),
        "--out-dir",
        path_arg(dir.path()),
    ]);

    let err = run_report_impl(&args, &cli, &MemoryLogger::new()).unwrap_err();
    assert!(matches!(err, IsrcError::FileRead { .. }));
}
