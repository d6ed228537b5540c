use crate::{CliError, CliResult};

use std::path::Path;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Install the global fern logger.
///
/// Lines go to stderr, leaving stdout to command output, or are appended to
/// `log_file`. Colors apply to stderr only.
pub fn initialize(
    log_level: cf_config::LogLevel,
    log_file: Option<&Path>,
    colored: bool,
) -> CliResult<()> {
    let dispatch = match log_file {
        Some(path) => {
            let file = fern::log_file(path).map_err(|e| {
                CliError::logger(format!("Failed to open log file {}: {e}", path.display()))
            })?;
            formatted(None).chain(file)
        }
        None => formatted(colored.then(level_colors)).chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(*log_level)
        .chain(dispatch)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(path) => info!("Logging at {} to {}", *log_level, path.display()),
        None => info!("Logging at {} to stderr", *log_level),
    }
    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// `[{date} - {level}] {message} [{file}:{line}]`
fn formatted(colors: Option<ColoredLevelConfig>) -> Dispatch {
    Dispatch::new().format(move |out, message, record| {
        let level = match &colors {
            Some(colors) => colors.color(record.level()).to_string(),
            None => record.level().to_string(),
        };
        out.finish(format_args!(
            "[{date} - {level}] {message} [{file}:{line}]",
            date = humantime::format_rfc3339(SystemTime::now()),
            file = record.file().unwrap_or("unknown"),
            line = record.line().unwrap_or(0),
        ))
    })
}
