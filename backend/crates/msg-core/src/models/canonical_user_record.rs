use crate::{UserIdentity, UserKey};

use serde::{Deserialize, Serialize};

/// Value stored at a user key.
///
/// Field names match what the mobile clients already write into the
/// realtime database, so existing records keep decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordBody {
    #[serde(rename = "first_Name")]
    pub first_name: String,
    #[serde(rename = "last_Name")]
    pub last_name: String,
}

impl From<&UserIdentity> for RecordBody {
    fn from(identity: &UserIdentity) -> Self {
        Self {
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
        }
    }
}

/// One persisted account. Created once per key, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalUserRecord {
    pub key: UserKey,
    pub first_name: String,
    pub last_name: String,
}

impl CanonicalUserRecord {
    pub fn from_body(key: UserKey, body: RecordBody) -> Self {
        Self {
            key,
            first_name: body.first_name,
            last_name: body.last_name,
        }
    }

    pub fn body(&self) -> RecordBody {
        RecordBody {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}
