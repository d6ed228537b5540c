use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cf")]
#[command(about = "Crowdfunding marketplace client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use in-memory adapters instead of the hosted backend
    #[arg(long, global = true)]
    pub offline: bool,

    /// Config directory (defaults to CF_CONFIG_DIR, then ./.cf)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}
