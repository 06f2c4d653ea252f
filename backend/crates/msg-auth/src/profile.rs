//! Social provider profile payloads and their mapping to a [`UserIdentity`].
//!
//! Facebook reports a single display name which must split into exactly two
//! space-separated tokens. Google reports given and family names separately.
//! Anything that does not map cleanly is a [`ProfileError`]; the caller skips
//! the record write but keeps the session.

use crate::{ProfileError, ProfileResult};

use msg_core::{IdentityProvider, UserIdentity};

use serde::Deserialize;
use serde_json::Value;

/// Graph API `me?fields=email,name` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FacebookProfile {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Google account profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GoogleProfile {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderProfile {
    Facebook(FacebookProfile),
    Google(GoogleProfile),
}

impl ProviderProfile {
    /// Decode a raw provider payload. Non-string fields count as absent.
    #[track_caller]
    pub fn from_json(provider: IdentityProvider, payload: &Value) -> ProfileResult<Self> {
        let Some(object) = payload.as_object() else {
            return Err(ProfileError::malformed(
                provider,
                format!("expected a JSON object, got {payload}"),
            ));
        };
        let text = |field: &str| object.get(field).and_then(Value::as_str).map(str::to_owned);

        match provider {
            IdentityProvider::Facebook => Ok(Self::Facebook(FacebookProfile {
                email: text("email"),
                name: text("name"),
            })),
            IdentityProvider::Google => Ok(Self::Google(GoogleProfile {
                email: text("email"),
                given_name: text("given_name"),
                family_name: text("family_name"),
            })),
            IdentityProvider::Password => Err(ProfileError::malformed(
                provider,
                "password accounts have no provider profile",
            )),
        }
    }

    pub fn provider(&self) -> IdentityProvider {
        match self {
            Self::Facebook(_) => IdentityProvider::Facebook,
            Self::Google(_) => IdentityProvider::Google,
        }
    }

    pub fn into_identity(self) -> ProfileResult<UserIdentity> {
        match self {
            Self::Facebook(profile) => profile.into_identity(),
            Self::Google(profile) => profile.into_identity(),
        }
    }
}

impl FacebookProfile {
    pub fn into_identity(self) -> ProfileResult<UserIdentity> {
        let provider = IdentityProvider::Facebook;
        let email = required(self.email).ok_or_else(|| ProfileError::missing_email(provider))?;
        let name = required(self.name).ok_or_else(|| ProfileError::missing_name(provider, "name"))?;
        let (first_name, last_name) = split_full_name(&name)?;

        Ok(UserIdentity::new(email, first_name, last_name))
    }
}

impl GoogleProfile {
    pub fn into_identity(self) -> ProfileResult<UserIdentity> {
        let provider = IdentityProvider::Google;
        let email = required(self.email).ok_or_else(|| ProfileError::missing_email(provider))?;
        let first_name = required(self.given_name)
            .ok_or_else(|| ProfileError::missing_name(provider, "given_name"))?;
        let last_name = required(self.family_name)
            .ok_or_else(|| ProfileError::missing_name(provider, "family_name"))?;

        Ok(UserIdentity::new(email, first_name, last_name))
    }
}

/// Split a display name on single spaces into `(first, last)`.
///
/// Exactly two non-empty tokens are accepted. `"Madonna"` and
/// `"Anna Maria Smith"` are both rejected.
#[track_caller]
pub fn split_full_name(full_name: &str) -> ProfileResult<(String, String)> {
    let tokens: Vec<&str> = full_name.split(' ').collect();

    match tokens.as_slice() {
        [first, last] if !first.is_empty() && !last.is_empty() => {
            Ok(((*first).to_owned(), (*last).to_owned()))
        }
        _ => Err(ProfileError::unsplittable_name(full_name, tokens.len())),
    }
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
