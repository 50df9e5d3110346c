use std::path::{Path, PathBuf};

use crate::cli::{ChartArgs, Cli, ScanArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult, WIDTH_RANGE};
use crate::error::{IsrcError, Result};
use crate::output::{ColorMode, Console, OutputFormat, RunSummary};
use crate::report::{ReportOptions, current_year};
use crate::scanner::{InputSource, ScanReport};
use crate::{EXIT_INVALID_FOUND, EXIT_SUCCESS};

/// Load configuration from the filesystem, or defaults with `--no-config`.
///
/// # Errors
/// Returns an error if the config file cannot be read, parsed or validated.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Console for a command. JSON summaries own stdout, so informational
/// messages are dropped in that mode.
#[must_use]
pub(crate) fn console_for(cli: &Cli, format: OutputFormat) -> Console {
    Console::new(
        ColorMode::from(cli.color),
        cli.quiet || format == OutputFormat::Json,
    )
}

/// Scan inputs and outputs after CLI overrides are applied to the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    pub source: InputSource,
    pub valid_output: PathBuf,
    pub invalid_output: PathBuf,
    pub jobs: usize,
    pub strict: bool,
}

impl ScanSettings {
    /// CLI flag > config file > built-in default. A directory input wins
    /// over any input file.
    #[must_use]
    pub fn resolve(args: &ScanArgs, config: &Config) -> Self {
        let source = args.dir_input.as_ref().map_or_else(
            || {
                InputSource::File(
                    args.input_file
                        .clone()
                        .unwrap_or_else(|| config.scan.input_file.clone()),
                )
            },
            |dir| InputSource::Directory(dir.clone()),
        );

        Self {
            source,
            valid_output: args
                .valid_output
                .clone()
                .unwrap_or_else(|| config.scan.valid_output.clone()),
            invalid_output: args
                .output_file
                .clone()
                .unwrap_or_else(|| config.scan.invalid_output.clone()),
            jobs: args.jobs.unwrap_or(config.scan.jobs),
            strict: args.strict || config.scan.strict,
        }
    }

    #[must_use]
    pub const fn exit_code(&self, report: &ScanReport) -> i32 {
        if self.strict && report.has_invalid() {
            EXIT_INVALID_FOUND
        } else {
            EXIT_SUCCESS
        }
    }
}

/// Chart options after CLI overrides are applied to the config.
///
/// # Errors
/// Returns [`IsrcError::Config`] if `--width` is out of range.
pub fn report_options(args: &ChartArgs, config: &Config) -> Result<ReportOptions> {
    let width = args.width.unwrap_or(config.report.width);
    if !WIDTH_RANGE.contains(&width) {
        return Err(IsrcError::Config(format!(
            "--width must be between {} and {}, got {width}",
            WIDTH_RANGE.start(),
            WIDTH_RANGE.end()
        )));
    }

    Ok(ReportOptions {
        output_dir: args
            .out_dir
            .clone()
            .unwrap_or_else(|| config.report.output_dir.clone()),
        year_chart: config.report.year_chart.clone(),
        country_chart: config.report.country_chart.clone(),
        width: f64::from(width),
        current_year: args.year.unwrap_or_else(current_year),
    })
}

/// What a command produced, before it is printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub summary: RunSummary,
    pub exit_code: i32,
}

impl Outcome {
    /// Print the summary to stdout and hand back the exit code.
    ///
    /// # Errors
    /// Returns an error if the summary cannot be serialized.
    pub fn emit(self, format: OutputFormat, color: ColorMode) -> Result<i32> {
        let output = format.formatter(color).format(&self.summary)?;
        print!("{output}");
        Ok(self.exit_code)
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
