use crate::cli::{Cli, ValidateArgs};
use crate::error::Result;
use crate::output::{ColorMode, Logger, RunSummary, ScanProgress};
use crate::scanner::{CorpusScanner, ScanReport};
use crate::EXIT_FATAL;

use super::context::{Outcome, ScanSettings, console_for, load_config};

#[must_use]
pub fn run_validate(args: &ValidateArgs, cli: &Cli) -> i32 {
    let console = console_for(cli, args.format);
    let outcome = run_validate_impl(args, cli, &console)
        .and_then(|outcome| outcome.emit(args.format, ColorMode::from(cli.color)));
    match outcome {
        Ok(exit_code) => exit_code,
        Err(e) => {
            console.print_error(&e);
            EXIT_FATAL
        }
    }
}

/// Scan only: write the valid and invalid files, no charts.
///
/// # Errors
/// Returns an error if the config is invalid, the input is missing, or an
/// output file cannot be written.
pub(crate) fn run_validate_impl(
    args: &ValidateArgs,
    cli: &Cli,
    logger: &dyn Logger,
) -> Result<Outcome> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?.config;
    let settings = ScanSettings::resolve(&args.scan, &config);
    let scan = execute_scan(&settings, logger, cli.quiet)?;

    Ok(Outcome {
        exit_code: settings.exit_code(&scan),
        summary: RunSummary {
            scan: Some(scan),
            report: None,
        },
    })
}

/// Run the scanner with the resolved settings.
///
/// # Errors
/// Propagates [`CorpusScanner::scan`] errors.
pub(crate) fn execute_scan(
    settings: &ScanSettings,
    logger: &dyn Logger,
    quiet: bool,
) -> Result<ScanReport> {
    let progress = ScanProgress::new(0, quiet);
    CorpusScanner::new(logger)
        .with_jobs(settings.jobs)
        .with_progress(progress)
        .scan(
            &settings.source,
            &settings.valid_output,
            &settings.invalid_output,
        )
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
