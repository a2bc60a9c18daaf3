use clap::Parser;
use std::process::ExitCode;

use itembank::Config;
use itembank::cli::{Cli, Commands};
use itembank::commands::{
    App, cmd_clear, cmd_explore, cmd_filters, cmd_health, cmd_list, cmd_show,
};
use itembank::logging::init_logging;

async fn run(cli: Cli) -> itembank::Result<()> {
    let config = Config::load()?.with_api_url(cli.api_url);
    config.validate()?;

    if let Commands::Clear = cli.command {
        return cmd_clear(&config);
    }

    let app = App::new(config)?;
    match cli.command {
        Commands::List(args) => cmd_list(&app, &args).await,
        Commands::Show { id, json } => cmd_show(&app, id, json).await,
        Commands::Filters { json } => cmd_filters(&app, json).await,
        Commands::Health => cmd_health(&app).await,
        Commands::Explore => cmd_explore(&app).await,
        Commands::Clear => Ok(()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("failed to initialize logging: {e}");
    }

    match run(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
