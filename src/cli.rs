use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "netsmoke", version, about = "LAN connectivity smoke tester")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Config file overriding the built-in probe targets and helper paths"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Check,
    Doctor,
}
