//! messenger - user record maintenance CLI
//!
//! # Examples
//!
//! ```bash
//! # Store key for an email
//! messenger key jane.doe@example.com
//!
//! # Inspect the record behind an email
//! messenger lookup jane.doe@example.com --pretty
//!
//! # Make sure a record exists
//! messenger reconcile --email jane@example.com --first-name Jane --last-name Doe
//! ```

use msg_cli::{Cli, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
