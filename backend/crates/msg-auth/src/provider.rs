//! Seams to the external identity providers.
//!
//! Everything the sign-in flow needs from outside the process goes through
//! these traits, so tests substitute in-memory fakes.

use crate::{ProfileResult, ProviderProfile, Result as AuthErrorResult};

use msg_core::{IdentityProvider, PasswordCredentials, Session};

use async_trait::async_trait;

/// Access token issued by a social provider's SDK.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderToken(String);

impl ProviderToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ProviderToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ProviderToken(<redacted>)")
    }
}

/// Email/password identity provider
#[async_trait]
pub trait PasswordAuthenticator: Send + Sync {
    async fn authenticate_with_password(
        &self,
        credentials: &PasswordCredentials,
    ) -> AuthErrorResult<Session>;

    async fn create_account(&self, credentials: &PasswordCredentials) -> AuthErrorResult<Session>;
}

/// Exchanges a social provider token for a session
#[async_trait]
pub trait FederatedAuthenticator: Send + Sync {
    async fn authenticate_with_provider(
        &self,
        provider: IdentityProvider,
        token: &ProviderToken,
    ) -> AuthErrorResult<Session>;
}

/// Reads the signed-in user's profile from a social provider
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(
        &self,
        provider: IdentityProvider,
        token: &ProviderToken,
    ) -> ProfileResult<ProviderProfile>;
}
