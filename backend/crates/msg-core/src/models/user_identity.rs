use crate::UserKey;

use serde::{Deserialize, Serialize};

/// Verified identity attributes produced by one sign-in attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserIdentity {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn key(&self) -> UserKey {
        UserKey::from_email(&self.email)
    }
}
