use crate::{CliError, Result as CliErrorResult};

use msg_auth::{AccountReconciler, ReconcileOutcome};
use msg_core::UserIdentity;
use msg_store::RecordLookup;

use clap::Subcommand;
use log::info;
use serde_json::{Value, json};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the store key derived from an email
    Key {
        /// Email address, used exactly as given
        email: String,
    },

    /// Show the record stored for an email
    Lookup { email: String },

    /// Check whether a well-formed record exists for an email
    Exists { email: String },

    /// Create the record for an identity unless one already exists
    Reconcile {
        #[arg(long)]
        email: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,
    },
}

/// Run one command against the reconciler.
pub async fn execute(command: &Commands, reconciler: &AccountReconciler) -> CliErrorResult<Value> {
    match command {
        Commands::Key { email } => {
            let key = AccountReconciler::normalize_key(email);
            Ok(json!({ "email": email, "key": key }))
        }

        Commands::Lookup { email } => {
            let key = AccountReconciler::normalize_key(email);
            let lookup = reconciler.lookup(&key).await?;

            Ok(match lookup {
                RecordLookup::Found(record) => {
                    json!({ "key": key, "status": "found", "record": record })
                }
                RecordLookup::NotFound => json!({ "key": key, "status": "not_found" }),
                RecordLookup::Malformed { reason } => {
                    json!({ "key": key, "status": "malformed", "reason": reason })
                }
            })
        }

        // Read failures exit non-zero here instead of reading as "absent".
        Commands::Exists { email } => {
            let key = AccountReconciler::normalize_key(email);
            let exists = reconciler.lookup(&key).await?.is_found();
            Ok(json!({ "key": key, "exists": exists }))
        }

        Commands::Reconcile {
            email,
            first_name,
            last_name,
        } => {
            let identity = UserIdentity::new(email, first_name, last_name);

            match reconciler.reconcile(&identity).await {
                ReconcileOutcome::WriteFailed { error, .. } => Err(CliError::from(error)),
                outcome => {
                    info!("Reconciled '{}': {}", outcome.key(), outcome.as_str());
                    Ok(json!({ "key": outcome.key(), "outcome": outcome.as_str() }))
                }
            }
        }
    }
}
