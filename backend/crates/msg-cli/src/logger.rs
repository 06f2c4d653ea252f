use crate::{CliError, Result as CliErrorResult};

use msg_config::LogLevel;

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Initialize logging.
///
/// Logs go to stderr so stdout carries only command output. With `log_file`
/// set they are appended to that file instead and `colored` is ignored.
#[track_caller]
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliErrorResult<()> {
    let level_filter = log_level.0;

    let output = match log_file {
        Some(ref path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    CliError::logger(format!("Failed to create {}: {e}", dir.display()))
                })?;
            }
            let file = fern::log_file(path).map_err(|e| {
                CliError::logger(format!("Failed to open log file {}: {e}", path.display()))
            })?;

            plain_format().chain(file)
        }
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{date} - {level}] {message} [{target}]",
                        date = humantime::format_rfc3339(SystemTime::now()),
                        level = colors.color(record.level()),
                        target = record.target(),
                    ))
                })
                .chain(std::io::stderr())
        }
        None => plain_format().chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(output)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => info!("Logger initialized: level={level_filter:?}, file={}", path.display()),
        None => info!("Logger initialized: level={level_filter:?}, stderr"),
    }

    Ok(())
}

fn plain_format() -> Dispatch {
    Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "[{date} - {level}] {message} [{target}]",
            date = humantime::format_rfc3339(SystemTime::now()),
            level = record.level(),
            target = record.target(),
        ))
    })
}
