//! msg-cli library
//!
//! Exposes argument parsing and command execution so both can be tested
//! without spawning the binary.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;


pub use cli::Cli;
pub use commands::{Commands, execute};
pub use error::{CliError, Result};

use msg_auth::AccountReconciler;
use msg_config::Config;
use msg_store::build_user_store;

use log::debug;

/// Load config, start logging, run one command and render its JSON.
pub async fn run(cli: Cli) -> Result<String> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let store = build_user_store(&config.store)?;
    let reconciler = AccountReconciler::new(store, config.retry.clone());
    debug!("Running {:?}", cli.command);

    let value = execute(&cli.command, &reconciler).await?;
    render(&value, cli.pretty)
}

#[track_caller]
pub(crate) fn render(value: &serde_json::Value, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(CliError::from_json)
}
