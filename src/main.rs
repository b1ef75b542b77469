use clap::Parser;

use flowdir::cli::{Cli, Commands};
use flowdir::commands::{log_level, run_group, run_init, run_scan};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose, cli.quiet))
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let exit_code = match &cli.command {
        Commands::Scan(args) => run_scan(args, &cli),
        Commands::Group(args) => run_group(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
