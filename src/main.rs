use clap::Parser;

use segment_bar::cli::{Cli, Commands};
use segment_bar::commands::{run_config, run_init, run_render};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
