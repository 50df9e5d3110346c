use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::error::{IsrcError, Result};
use crate::output::{ColorMode, Console, Logger};
use crate::{EXIT_FATAL, EXIT_SUCCESS};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    let console = Console::new(ColorMode::from(cli.color), cli.quiet);
    match run_init_impl(args, &console) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            console.print_error(&e);
            EXIT_FATAL
        }
    }
}

/// Writes a configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub(crate) fn run_init_impl(args: &InitArgs, logger: &dyn Logger) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(IsrcError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        IsrcError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })?;

    logger.success(&format!(
        "Created configuration file: {}",
        output_path.display()
    ));
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# isrc-check configuration file
# Command-line flags override every value below.

[scan]
# File with one ISRC per line (ignored when -d/--dir_input is given)
input_file = "isrc.txt"

# Invalid codes, written only when at least one is found
invalid_output = "ISRC_invalid.txt"

# Valid codes, always written
valid_output = "ISRC_valid.txt"

# Worker threads used for validation (default: 1)
jobs = 1

# Exit with status 1 when invalid codes are found (default: false)
# strict = true

[report]
# Generate the year and country charts after validation (default: true)
enabled = true

# Directory for the chart files
output_dir = "."

year_chart = "ISRC_year_distribution.svg"
country_chart = "ISRC_country_repartition.svg"

# Chart width, between 200 and 4000 (default: 600)
width = 600
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
