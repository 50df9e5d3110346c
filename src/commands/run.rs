use crate::cli::Cli;
use crate::error::Result;
use crate::output::{ColorMode, Logger, RunSummary};
use crate::report::ReportGenerator;
use crate::EXIT_FATAL;

use super::context::{Outcome, ScanSettings, console_for, load_config, report_options};
use super::validate::execute_scan;

/// Entry point when no subcommand is given: validate, then report.
#[must_use]
pub fn run_default(cli: &Cli) -> i32 {
    let format = cli.run.format;
    let console = console_for(cli, format);
    let outcome = run_default_impl(cli, &console)
        .and_then(|outcome| outcome.emit(format, ColorMode::from(cli.color)));
    match outcome {
        Ok(exit_code) => exit_code,
        Err(e) => {
            console.print_error(&e);
            EXIT_FATAL
        }
    }
}

/// Scan, then chart the valid file the scan just wrote.
///
/// Charts are skipped with `--no-report` or `report.enabled = false`.
/// Chart options are checked before scanning so a bad `--width` writes nothing.
///
/// # Errors
/// Returns the first scan or report error.
pub(crate) fn run_default_impl(cli: &Cli, logger: &dyn Logger) -> Result<Outcome> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?.config;
    let settings = ScanSettings::resolve(&cli.run.scan, &config);
    let generator = if cli.run.no_report || !config.report.enabled {
        None
    } else {
        Some(ReportGenerator::new(report_options(&cli.run.chart, &config)?))
    };

    let scan = execute_scan(&settings, logger, cli.quiet)?;
    let exit_code = settings.exit_code(&scan);

    let report = generator
        .map(|generator| generator.generate(&scan.valid_output, logger))
        .transpose()?;

    Ok(Outcome {
        summary: RunSummary {
            scan: Some(scan),
            report,
        },
        exit_code,
    })
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
