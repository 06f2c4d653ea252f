use msg_core::{CanonicalUserRecord, RecordBody, UserKey};

use serde_json::Value;

/// Typed result of decoding the raw value at a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordLookup {
    Found(CanonicalUserRecord),
    /// Nothing stored, or an explicit JSON null
    NotFound,
    /// Something is stored but it is not a record body
    Malformed { reason: String },
}

impl RecordLookup {
    pub fn decode(key: &UserKey, raw: Option<Value>) -> Self {
        match raw {
            None | Some(Value::Null) => Self::NotFound,
            Some(value) => match serde_json::from_value::<RecordBody>(value) {
                Ok(body) => Self::Found(CanonicalUserRecord::from_body(key.clone(), body)),
                Err(e) => Self::Malformed {
                    reason: e.to_string(),
                },
            },
        }
    }

    /// Only a decodable record counts as an existing account.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::NotFound => "not_found",
            Self::Malformed { .. } => "malformed",
        }
    }
}
