use crate::IdentityProvider;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated session handed back by an identity provider.
///
/// Opaque to account reconciliation; only its presence matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub uid: String,
    pub provider: IdentityProvider,
    pub established_at: DateTime<Utc>,
}

impl Session {
    pub fn new(uid: impl Into<String>, provider: IdentityProvider) -> Self {
        Self {
            uid: uid.into(),
            provider,
            established_at: Utc::now(),
        }
    }
}
