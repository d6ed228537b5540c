//! cf-cli library
//!
//! Exposes the application wiring and the interactive shell for tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod output;
pub mod role_arg;
pub mod shell;
pub mod shell_command;


pub use app::{App, Mode};
pub use error::{CliError, Result as CliResult};
pub use shell::{Flow, Shell};
pub use shell_command::ShellCommand;
