use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "isrc-check")]
#[command(author, version, about = "Validate ISRC codes and chart their years and countries")]
#[command(long_about = "Validates a list of ISRC codes (one per line, or the entry names of a \
    directory), writes valid and invalid codes to separate files, then charts the valid \
    codes by reference year and by country.\n\n\
    Running without a subcommand validates and then reports.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Invalid codes found (with --strict)\n  \
    2 - Invalid input, I/O or configuration error")]
pub struct Cli {
    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parses the process arguments, exiting with a usage error on failure.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::try_parse_args_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parses `args`, rejecting default-run options placed before a subcommand.
    ///
    /// Global flags may appear on either side of the subcommand name.
    ///
    /// # Errors
    /// Returns a clap usage error for unknown or conflicting arguments.
    pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Self::try_parse_from(args)?;
        if cli.command.is_some() && cli.run.is_set() {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                "options of the default run cannot be used with a subcommand; \
                 pass them after the subcommand name",
            ));
        }
        Ok(cli)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate codes and write the valid/invalid files, without charts
    Validate(ValidateArgs),

    /// Chart an existing file of valid codes
    Report(ReportArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Where codes come from and where the partitions go.
#[derive(Args, Debug, Default, Clone)]
pub struct ScanArgs {
    /// Input file with one ISRC per line [default: isrc.txt]
    #[arg(short = 'i', long = "input_file", visible_alias = "input-file")]
    pub input_file: Option<PathBuf>,

    /// Output file for invalid ISRCs, written only if any are found [default: ISRC_invalid.txt]
    #[arg(short = 'o', long = "output_file", visible_alias = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Directory whose entry names are the ISRCs to check (overrides --input_file)
    #[arg(short = 'd', long = "dir_input", visible_alias = "dir-input")]
    pub dir_input: Option<PathBuf>,

    /// Output file for valid ISRCs [default: ISRC_valid.txt]
    #[arg(long = "valid_output", visible_alias = "valid-output")]
    pub valid_output: Option<PathBuf>,

    /// Worker threads for validation [default: 1]
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub jobs: Option<usize>,

    /// Exit with code 1 when invalid ISRCs are found
    #[arg(long)]
    pub strict: bool,
}

/// Chart output options.
#[derive(Args, Debug, Default, Clone)]
pub struct ChartArgs {
    /// Directory for the chart files [default: .]
    #[arg(long = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// Year used for the 19YY/20YY rollback [default: current year]
    #[arg(long)]
    pub year: Option<i32>,

    /// Chart width [default: 600]
    #[arg(long)]
    pub width: Option<u32>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(flatten)]
    pub chart: ChartArgs,

    /// Skip chart generation
    #[arg(long)]
    pub no_report: bool,

    /// Summary format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

impl RunArgs {
    /// Whether any option differs from its default.
    fn is_set(&self) -> bool {
        let scan = &self.scan;
        let chart = &self.chart;
        scan.input_file.is_some()
            || scan.output_file.is_some()
            || scan.dir_input.is_some()
            || scan.valid_output.is_some()
            || scan.jobs.is_some()
            || scan.strict
            || chart.out_dir.is_some()
            || chart.year.is_some()
            || chart.width.is_some()
            || self.no_report
            || self.format != OutputFormat::default()
    }
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Summary format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// File of valid ISRCs to chart [default: ISRC_valid.txt]
    #[arg(long = "valid_output", visible_alias = "valid-output")]
    pub valid_output: Option<PathBuf>,

    #[command(flatten)]
    pub chart: ChartArgs,

    /// Summary format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".isrc-check.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Check that the configuration file parses and its values are in range
    Validate,

    /// Display the effective configuration
    Show {
        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
