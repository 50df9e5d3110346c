use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
use crate::error::{IsrcError, Result};
use crate::output::{ColorMode, Console, Logger, OutputFormat};
use crate::{EXIT_FATAL, EXIT_SUCCESS};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let console = Console::new(ColorMode::from(cli.color), cli.quiet);
    let result = match &args.action {
        ConfigAction::Validate => {
            run_config_validate_impl(cli.config.as_deref(), &FileConfigLoader::new()).map(
                |path| {
                    console.success(&format!("Configuration is valid: {}", path.display()));
                },
            )
        }
        ConfigAction::Show { format } => {
            run_config_show_impl(cli.config.as_deref(), cli.no_config, *format).map(|output| {
                print!("{output}");
            })
        }
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            console.print_error(&e);
            EXIT_FATAL
        }
    }
}

/// Validates a configuration file: the given one, or the discovered one.
///
/// Returns the path that was checked.
///
/// # Errors
/// Returns an error if no file is found, or the file cannot be read, parsed
/// or validated.
pub(crate) fn run_config_validate_impl(
    config_path: Option<&Path>,
    loader: &dyn ConfigLoader,
) -> Result<PathBuf> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => loader.discover().ok_or_else(|| {
            IsrcError::Config(format!(
                "No configuration file found. Create one with `isrc-check init` ({LOCAL_CONFIG_NAME})"
            ))
        })?,
    };

    loader.load_from_path(&path)?;
    Ok(path)
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    no_config: bool,
    format: OutputFormat,
) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;
    format_loaded(&loaded, format)
}

pub(crate) fn format_loaded(loaded: &LoadResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(format_config_text(&loaded.config, loaded.source.as_deref())),
    }
}

pub(crate) fn format_config_text(config: &Config, source: Option<&Path>) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n");
    match source {
        Some(path) => {
            let _ = writeln!(output, "# source: {}", path.display());
        }
        None => output.push_str("# source: built-in defaults\n"),
    }

    output.push_str("\n[scan]\n");
    let _ = writeln!(output, "  input_file = {:?}", config.scan.input_file.display().to_string());
    let _ = writeln!(
        output,
        "  invalid_output = {:?}",
        config.scan.invalid_output.display().to_string()
    );
    let _ = writeln!(
        output,
        "  valid_output = {:?}",
        config.scan.valid_output.display().to_string()
    );
    let _ = writeln!(output, "  jobs = {}", config.scan.jobs);
    let _ = writeln!(output, "  strict = {}", config.scan.strict);

    output.push_str("\n[report]\n");
    let _ = writeln!(output, "  enabled = {}", config.report.enabled);
    let _ = writeln!(
        output,
        "  output_dir = {:?}",
        config.report.output_dir.display().to_string()
    );
    let _ = writeln!(output, "  year_chart = {:?}", config.report.year_chart);
    let _ = writeln!(output, "  country_chart = {:?}", config.report.country_chart);
    let _ = writeln!(output, "  width = {}", config.report.width);

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
