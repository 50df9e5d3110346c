use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

// ============================================================================
// Default run
// ============================================================================

#[test]
fn no_arguments_runs_with_defaults() {
    let cli = Cli::parse_from(["isrc-check"]);

    assert!(cli.command.is_none());
    assert!(!cli.quiet);
    assert!(!cli.no_config);
    assert!(matches!(cli.color, ColorChoice::Auto));
    assert_eq!(cli.run.scan.input_file, None);
    assert_eq!(cli.run.scan.output_file, None);
    assert_eq!(cli.run.scan.dir_input, None);
    assert_eq!(cli.run.scan.jobs, None);
    assert!(!cli.run.no_report);
    assert_eq!(cli.run.format, OutputFormat::Text);
}

#[test]
fn short_flags_match_legacy_names() {
    let cli = Cli::parse_from([
        "isrc-check",
        "-i",
        "codes.txt",
        "-o",
        "bad.txt",
        "-d",
        "corpus",
    ]);

    assert_eq!(cli.run.scan.input_file, Some(PathBuf::from("codes.txt")));
    assert_eq!(cli.run.scan.output_file, Some(PathBuf::from("bad.txt")));
    assert_eq!(cli.run.scan.dir_input, Some(PathBuf::from("corpus")));
}

#[test]
fn long_flags_accept_underscore_and_kebab_spellings() {
    let underscore = Cli::parse_from([
        "isrc-check",
        "--input_file",
        "a.txt",
        "--output_file",
        "b.txt",
        "--dir_input",
        "dir",
        "--valid_output",
        "ok.txt",
    ]);
    let kebab = Cli::parse_from([
        "isrc-check",
        "--input-file",
        "a.txt",
        "--output-file",
        "b.txt",
        "--dir-input",
        "dir",
        "--valid-output",
        "ok.txt",
    ]);

    for cli in [underscore, kebab] {
        assert_eq!(cli.run.scan.input_file, Some(PathBuf::from("a.txt")));
        assert_eq!(cli.run.scan.output_file, Some(PathBuf::from("b.txt")));
        assert_eq!(cli.run.scan.dir_input, Some(PathBuf::from("dir")));
        assert_eq!(cli.run.scan.valid_output, Some(PathBuf::from("ok.txt")));
    }
}

#[test]
fn run_accepts_chart_and_output_options() {
    let cli = Cli::parse_from([
        "isrc-check",
        "--out-dir",
        "charts",
        "--year",
        "2030",
        "--width",
        "800",
        "--format",
        "json",
        "--strict",
        "--no-report",
        "-j",
        "4",
    ]);

    assert_eq!(cli.run.chart.out_dir, Some(PathBuf::from("charts")));
    assert_eq!(cli.run.chart.year, Some(2030));
    assert_eq!(cli.run.chart.width, Some(800));
    assert_eq!(cli.run.format, OutputFormat::Json);
    assert!(cli.run.scan.strict);
    assert!(cli.run.no_report);
    assert_eq!(cli.run.scan.jobs, Some(4));
}

#[test]
fn zero_jobs_is_rejected() {
    assert!(Cli::try_parse_from(["isrc-check", "--jobs", "0"]).is_err());
}

#[test]
fn unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["isrc-check", "--format", "xml"]).is_err());
}

// ============================================================================
// Global flags
// ============================================================================

#[test]
fn global_flags_parse() {
    let cli = Cli::parse_from([
        "isrc-check",
        "--quiet",
        "--color",
        "never",
        "--no-config",
        "-c",
        "custom.toml",
    ]);

    assert!(cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Never));
    assert!(cli.no_config);
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn global_flags_work_after_subcommand() {
    let cli = Cli::parse_from(["isrc-check", "validate", "-q", "--color", "always"]);

    assert!(cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Always));
}

#[test]
fn global_flags_work_before_subcommand() {
    let cli = Cli::try_parse_args_from(["isrc-check", "-q", "--no-config", "validate"]).unwrap();

    assert!(cli.quiet);
    assert!(cli.no_config);
    assert!(matches!(cli.command, Some(Commands::Validate(_))));
}

#[test]
fn config_path_before_subcommand_is_global() {
    let cli =
        Cli::try_parse_args_from(["isrc-check", "-c", "mine.toml", "--color", "never", "report"])
            .unwrap();

    assert_eq!(cli.config, Some(PathBuf::from("mine.toml")));
    assert!(matches!(cli.color, ColorChoice::Never));
    assert!(matches!(cli.command, Some(Commands::Report(_))));
}

#[test]
fn color_choice_maps_to_color_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
}

// ============================================================================
// Subcommands
// ============================================================================

#[test]
fn validate_command_parses_scan_args() {
    let cli = Cli::parse_from(["isrc-check", "validate", "-d", "corpus", "--strict"]);

    match cli.command {
        Some(Commands::Validate(args)) => {
            assert_eq!(args.scan.dir_input, Some(PathBuf::from("corpus")));
            assert!(args.scan.strict);
            assert_eq!(args.format, OutputFormat::Text);
        }
        _ => panic!("Expected Validate command"),
    }
}

#[test]
fn report_command_parses_chart_args() {
    let cli = Cli::parse_from([
        "isrc-check",
        "report",
        "--valid_output",
        "ok.txt",
        "--out-dir",
        "charts",
        "--year",
        "1999",
    ]);

    match cli.command {
        Some(Commands::Report(args)) => {
            assert_eq!(args.valid_output, Some(PathBuf::from("ok.txt")));
            assert_eq!(args.chart.out_dir, Some(PathBuf::from("charts")));
            assert_eq!(args.chart.year, Some(1999));
        }
        _ => panic!("Expected Report command"),
    }
}

#[test]
fn init_command_defaults() {
    let cli = Cli::parse_from(["isrc-check", "init"]);

    match cli.command {
        Some(Commands::Init(args)) => {
            assert_eq!(args.output, PathBuf::from(".isrc-check.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn init_command_with_output_and_force() {
    let cli = Cli::parse_from(["isrc-check", "init", "-o", "custom.toml", "--force"]);

    match cli.command {
        Some(Commands::Init(args)) => {
            assert_eq!(args.output, PathBuf::from("custom.toml"));
            assert!(args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn config_validate_uses_global_config_path() {
    let cli = Cli::parse_from(["isrc-check", "config", "validate", "-c", "mine.toml"]);

    assert_eq!(cli.config, Some(PathBuf::from("mine.toml")));
    match cli.command {
        Some(Commands::Config(args)) => assert!(matches!(args.action, ConfigAction::Validate)),
        _ => panic!("Expected Config command"),
    }
}

#[test]
fn config_show_format() {
    let cli = Cli::parse_from(["isrc-check", "config", "show", "--format", "json"]);

    match cli.command {
        Some(Commands::Config(ConfigArgs {
            action: ConfigAction::Show { format },
        })) => assert_eq!(format, OutputFormat::Json),
        _ => panic!("Expected Config Show command"),
    }
}

#[test]
fn run_args_conflict_with_subcommands() {
    let err = Cli::try_parse_args_from(["isrc-check", "-i", "codes.txt", "init"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

    for argv in [
        ["isrc-check", "--strict", "validate"],
        ["isrc-check", "--no-report", "report"],
        ["isrc-check", "--format=json", "validate"],
    ] {
        assert!(Cli::try_parse_args_from(argv).is_err(), "{argv:?}");
    }
}

#[test]
fn run_args_after_subcommand_belong_to_it() {
    let cli = Cli::try_parse_args_from(["isrc-check", "validate", "-i", "codes.txt"]).unwrap();

    assert_eq!(cli.run.scan.input_file, None);
    match cli.command {
        Some(Commands::Validate(args)) => {
            assert_eq!(args.scan.input_file, Some(PathBuf::from("codes.txt")));
        }
        _ => panic!("Expected Validate command"),
    }
}

#[test]
fn default_run_without_subcommand_passes_the_check() {
    let cli = Cli::try_parse_args_from(["isrc-check", "-q", "--strict", "-i", "codes.txt"]).unwrap();

    assert!(cli.command.is_none());
    assert!(cli.run.scan.strict);
}
