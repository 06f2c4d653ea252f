use crate::Result as StoreResult;

use msg_core::{RecordBody, UserKey};

use async_trait::async_trait;
use serde_json::Value;

/// Key-value capability the account flow depends on.
///
/// Implementations must treat `put` as a single atomic replace of the
/// value at `key`. No schema is enforced by the store: `get` returns
/// whatever raw value is present so callers decide what counts as a
/// record (see [`crate::RecordLookup`]).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Raw value at `key`, or None if nothing is stored there.
    async fn get(&self, key: &UserKey) -> StoreResult<Option<Value>>;

    /// Replace the value at `key`.
    async fn put(&self, key: &UserKey, body: &RecordBody) -> StoreResult<()>;
}
