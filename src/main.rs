use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = services::config::load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Check => commands::check::handle_check_command(&config),
        Commands::Doctor => {
            commands::doctor::handle_doctor_command(&config, cli.config.as_deref())
        }
    }
}
