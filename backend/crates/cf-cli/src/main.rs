//! cf - crowdfunding marketplace client
//!
//! # Examples
//!
//! ```bash
//! # Try everything against in-memory adapters
//! cf --offline shell
//!
//! # Sign in to the hosted backend
//! cf sign-in admin2@projet.ch Secret123 --role project
//! ```

use cf_cli::{
    App, CliResult, Shell,
    cli::Cli,
    commands::Commands,
    logger,
    output::{project_line, session_line},
};
use cf_config::Config;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };
    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    // Relative log file paths live next to config.toml
    let log_file = config.logging.file.as_ref().map(|file| config_dir.join(file));
    logger::initialize(
        config.logging.level,
        log_file.as_deref(),
        config.logging.colored,
    )?;
    config.log_summary();

    let app = App::build(&config, cli.offline)?;
    if let Err(e) = app.store.restore_session().await {
        warn!("Session restore failed: {e}");
    }

    let result = dispatch(&app, cli.command).await;

    for report in app.store.settle().await {
        if report.created() > 0 {
            info!("Backfill created {} project(s)", report.created());
        }
    }

    result
}

async fn dispatch(app: &App, command: Commands) -> CliResult<()> {
    let mut stdout = std::io::stdout();

    match command {
        Commands::SignUp {
            email,
            password,
            role,
        } => {
            let session = app.store.sign_up(&email, &password, role.into()).await?;
            writeln!(stdout, "signed up {}", session_line(&session))?;
            writeln!(stdout, "at {}", session.role.dashboard_path())?;
        }
        Commands::SignIn {
            email,
            password,
            role,
        } => {
            let session = app.store.sign_in(&email, &password, role.into()).await?;
            writeln!(stdout, "signed in {}", session_line(&session))?;
            writeln!(stdout, "at {}", session.role.dashboard_path())?;
        }
        Commands::Projects => {
            for project in app.workspace.list_projects().await? {
                writeln!(stdout, "{}", project_line(&project))?;
            }
        }
        Commands::Shell => {
            let mut shell = Shell::new(app);
            shell
                .run(BufReader::new(tokio::io::stdin()), &mut stdout)
                .await?;
        }
    }

    Ok(())
}
