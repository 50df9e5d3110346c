use isrc_check::cli::{Cli, Commands};
use isrc_check::commands::{run_config, run_default, run_init, run_report, run_validate};

fn main() {
    let cli = Cli::parse_args();

    let exit_code = match &cli.command {
        None => run_default(&cli),
        Some(Commands::Validate(args)) => run_validate(args, &cli),
        Some(Commands::Report(args)) => run_report(args, &cli),
        Some(Commands::Init(args)) => run_init(args, &cli),
        Some(Commands::Config(args)) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
