//! Store keys derived from email addresses.
//!
//! The realtime store forbids `.` in path segments, so every `.` and `@`
//! in the email becomes `-`. The mapping does NOT fold case:
//! `Jane.Doe@Example.com` and `jane.doe@example.com` are two different
//! keys and therefore two different accounts. Providers are not
//! guaranteed to report emails in a consistent case.

use serde::{Deserialize, Serialize};

const REPLACED_CHARS: [char; 2] = ['.', '@'];
const REPLACEMENT: char = '-';

/// Derive the store key for an email. No syntax validation is performed.
pub fn normalize_key(email: &str) -> String {
    email
        .chars()
        .map(|c| {
            if REPLACED_CHARS.contains(&c) {
                REPLACEMENT
            } else {
                c
            }
        })
        .collect()
}

/// Normalized key addressing one canonical user record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserKey(String);

impl UserKey {
    pub fn from_email(email: &str) -> Self {
        Self(normalize_key(email))
    }

    /// Wrap an already-normalized key (e.g. one read back from the store).
    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
