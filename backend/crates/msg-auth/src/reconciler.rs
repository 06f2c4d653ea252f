//! Guarantees exactly one canonical record per normalized email key.
//!
//! Read-then-write with no transaction: two concurrent first sign-ins for
//! the same key may both write, and the last write wins. Both writes carry
//! the same identity, so the stored record is the same either way.

use crate::{ProfileError, with_retry};

use msg_config::RetryConfig;
use msg_core::{RecordBody, UserIdentity, UserKey};
use msg_store::{RecordLookup, Result as StoreResult, StoreError, UserStore};

use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::task::JoinHandle;

/// Result of one reconcile call. Never escalated to the user.
#[derive(Debug)]
pub enum ReconcileOutcome {
    /// No record existed; one was written.
    Created(UserKey),
    /// A record already existed and was left untouched.
    AlreadyExists(UserKey),
    /// No record existed and every write attempt failed.
    WriteFailed { key: UserKey, error: StoreError },
}

impl ReconcileOutcome {
    pub fn key(&self) -> &UserKey {
        match self {
            Self::Created(key) | Self::AlreadyExists(key) | Self::WriteFailed { key, .. } => key,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::AlreadyExists(_) => "already_exists",
            Self::WriteFailed { .. } => "write_failed",
        }
    }
}

/// What the detached reconciliation step of a sign-in ended up doing.
#[derive(Debug)]
pub enum Reconciliation {
    Completed(ReconcileOutcome),
    /// Password login only checks for the record; it has no names to write.
    Checked { key: UserKey, exists: bool },
    /// Provider profile was unusable; no write attempted.
    Skipped(ProfileError),
    /// The background task panicked or was cancelled.
    Aborted { message: String },
}

/// Handle to a detached reconciliation. Dropping it does not cancel the work.
#[derive(Debug)]
pub struct ReconcileTicket {
    handle: JoinHandle<Reconciliation>,
}

impl ReconcileTicket {
    pub(crate) fn spawn<F>(work: F) -> Self
    where
        F: Future<Output = Reconciliation> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(work),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the background step to finish.
    pub async fn wait(self) -> Reconciliation {
        match self.handle.await {
            Ok(reconciliation) => reconciliation,
            Err(e) => {
                error!("Reconciliation task did not complete: {e}");
                Reconciliation::Aborted {
                    message: e.to_string(),
                }
            }
        }
    }
}

pub struct AccountReconciler {
    store: Arc<dyn UserStore>,
    retry: RetryConfig,
}

impl AccountReconciler {
    pub fn new(store: Arc<dyn UserStore>, retry: RetryConfig) -> Self {
        Self { store, retry }
    }

    /// Store key for an email. Case is preserved.
    pub fn normalize_key(email: &str) -> UserKey {
        UserKey::from_email(email)
    }

    /// Typed read of the record under `key`. Store failures are surfaced.
    pub async fn lookup(&self, key: &UserKey) -> StoreResult<RecordLookup> {
        let raw = self.store.get(key).await?;
        let lookup = RecordLookup::decode(key, raw);

        if let RecordLookup::Malformed { reason } = &lookup {
            warn!("Record '{key}' is malformed: {reason}");
        }

        Ok(lookup)
    }

    /// True only when a well-formed record exists under `key`.
    ///
    /// Read failures and malformed records both answer `false`.
    pub async fn exists(&self, key: &UserKey) -> bool {
        match self.lookup(key).await {
            Ok(lookup) => {
                debug!("Lookup for '{key}': {}", lookup.as_str());
                lookup.is_found()
            }
            Err(e) => {
                warn!("Lookup for '{key}' failed, treating as absent: {e}");
                false
            }
        }
    }

    /// Ensure a record exists for `identity`. Existing records are never
    /// overwritten, even when the names differ.
    pub async fn reconcile(&self, identity: &UserIdentity) -> ReconcileOutcome {
        let key = identity.key();

        if self.exists(&key).await {
            debug!("Record '{key}' already exists, leaving it untouched");
            return ReconcileOutcome::AlreadyExists(key);
        }

        let body = RecordBody::from(identity);
        let operation_name = format!("write record '{key}'");
        let written = with_retry(&self.retry, &operation_name, || {
            self.store.put(&key, &body)
        })
        .await;

        match written {
            Ok(()) => {
                info!("Created record '{key}'");
                ReconcileOutcome::Created(key)
            }
            Err(error) => {
                warn!("Failed to create record '{key}': {error}");
                ReconcileOutcome::WriteFailed { key, error }
            }
        }
    }

    /// Run [`Self::reconcile`] on a background task.
    pub fn spawn_reconcile(self: &Arc<Self>, identity: UserIdentity) -> ReconcileTicket {
        let reconciler = Arc::clone(self);
        ReconcileTicket::spawn(async move {
            Reconciliation::Completed(reconciler.reconcile(&identity).await)
        })
    }
}
