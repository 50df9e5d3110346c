use crate::cli::{Cli, ReportArgs};
use crate::error::Result;
use crate::output::{ColorMode, Logger, RunSummary};
use crate::report::ReportGenerator;
use crate::{EXIT_FATAL, EXIT_SUCCESS};

use super::context::{Outcome, console_for, load_config, report_options};

#[must_use]
pub fn run_report(args: &ReportArgs, cli: &Cli) -> i32 {
    let console = console_for(cli, args.format);
    let outcome = run_report_impl(args, cli, &console)
        .and_then(|outcome| outcome.emit(args.format, ColorMode::from(cli.color)));
    match outcome {
        Ok(exit_code) => exit_code,
        Err(e) => {
            console.print_error(&e);
            EXIT_FATAL
        }
    }
}

/// Chart an existing valid-output file.
///
/// Runs even when `report.enabled = false` in the config: asking for the
/// subcommand is explicit.
///
/// # Errors
/// Returns an error if the config is invalid, the valid file cannot be read,
/// or a chart cannot be written.
pub(crate) fn run_report_impl(
    args: &ReportArgs,
    cli: &Cli,
    logger: &dyn Logger,
) -> Result<Outcome> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?.config;
    let valid_path = args
        .valid_output
        .clone()
        .unwrap_or_else(|| config.scan.valid_output.clone());

    let generator = ReportGenerator::new(report_options(&args.chart, &config)?);
    let report = generator.generate(&valid_path, logger)?;

    Ok(Outcome {
        summary: RunSummary {
            scan: None,
            report: Some(report),
        },
        exit_code: EXIT_SUCCESS,
    })
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
