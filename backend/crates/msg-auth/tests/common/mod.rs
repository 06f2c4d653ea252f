#![allow(dead_code)]

use msg_auth::{
    AccountReconciler, AuthError, FederatedAuthenticator, PasswordAuthenticator, ProfileError,
    ProfileResult, ProfileSource, ProviderProfile, ProviderToken, SessionState, SignInFlow,
};
use msg_config::{AuthConfig, RetryConfig};
use msg_core::{IdentityProvider, PasswordCredentials, RecordBody, Session, UserKey};
use msg_store::{InMemoryUserStore, Result as StoreResult, StoreError, UserStore};

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use async_trait::async_trait;
use serde_json::Value;

/// Retry settings that keep tests fast.
pub fn fast_retry(max_attempts: u32) -> RetryConfig {
    RetryConfig {
        max_attempts,
        initial_delay_ms: 1,
        max_delay_secs: 1,
        backoff_multiplier: 2.0,
        jitter: false,
    }
}

/// In-memory store that can be told to fail reads or the next N writes.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: InMemoryUserStore,
    failing_writes: AtomicU32,
    failing_reads: AtomicBool,
    put_attempts: AtomicU32,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_writes(&self, count: u32) {
        self.failing_writes.store(count, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.failing_reads.store(fail, Ordering::SeqCst);
    }

    pub fn put_attempts(&self) -> u32 {
        self.put_attempts.load(Ordering::SeqCst)
    }

    pub async fn raw(&self, key: &str) -> Option<Value> {
        self.inner
            .get(&UserKey::from_raw(key))
            .await
            .expect("in-memory get")
    }
}

#[async_trait]
impl UserStore for FlakyStore {
    async fn get(&self, key: &UserKey) -> StoreResult<Option<Value>> {
        if self.failing_reads.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("read failure injected"));
        }
        self.inner.get(key).await
    }

    async fn put(&self, key: &UserKey, body: &RecordBody) -> StoreResult<()> {
        self.put_attempts.fetch_add(1, Ordering::SeqCst);
        let remaining = self.failing_writes.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failing_writes.store(remaining - 1, Ordering::SeqCst);
            return Err(StoreError::unavailable("write failure injected"));
        }
        self.inner.put(key, body).await
    }
}

#[derive(Default)]
pub struct StubPasswords {
    pub reject: AtomicBool,
    pub calls: AtomicU32,
}

#[async_trait]
impl PasswordAuthenticator for StubPasswords {
    async fn authenticate_with_password(
        &self,
        credentials: &PasswordCredentials,
    ) -> Result<Session, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.reject.load(Ordering::SeqCst) {
            return Err(AuthError::invalid_credentials(IdentityProvider::Password));
        }
        Ok(Session::new(
            format!("uid-{}", credentials.email),
            IdentityProvider::Password,
        ))
    }

    async fn create_account(&self, credentials: &PasswordCredentials) -> Result<Session, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.reject.load(Ordering::SeqCst) {
            return Err(AuthError::provider_rejected(
                IdentityProvider::Password,
                "weak password",
            ));
        }
        Ok(Session::new(
            format!("uid-{}", credentials.email),
            IdentityProvider::Password,
        ))
    }
}

#[derive(Default)]
pub struct StubFederated {
    pub reject: AtomicBool,
}

#[async_trait]
impl FederatedAuthenticator for StubFederated {
    async fn authenticate_with_provider(
        &self,
        provider: IdentityProvider,
        token: &ProviderToken,
    ) -> Result<Session, AuthError> {
        if self.reject.load(Ordering::SeqCst) {
            return Err(AuthError::provider_rejected(provider, "token revoked"));
        }
        Ok(Session::new(format!("{provider}-{}", token.as_str()), provider))
    }
}

/// Hands out one queued profile (or failure) per fetch.
#[derive(Default)]
pub struct StubProfiles {
    next: Mutex<Option<std::result::Result<ProviderProfile, String>>>,
    pub fetches: AtomicU32,
}

impl StubProfiles {
    pub fn returning(&self, profile: ProviderProfile) {
        *self.next.lock().expect("profile lock") = Some(Ok(profile));
    }

    pub fn failing(&self, message: &str) {
        *self.next.lock().expect("profile lock") = Some(Err(message.to_owned()));
    }
}

#[async_trait]
impl ProfileSource for StubProfiles {
    async fn fetch_profile(
        &self,
        provider: IdentityProvider,
        _token: &ProviderToken,
    ) -> ProfileResult<ProviderProfile> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.next.lock().expect("profile lock").take() {
            Some(Ok(profile)) => Ok(profile),
            Some(Err(message)) => Err(ProfileError::fetch(provider, message)),
            None => Err(ProfileError::fetch(provider, "no profile queued")),
        }
    }
}

/// A sign-in flow wired to fakes, with handles to each of them.
pub struct Harness {
    pub store: Arc<FlakyStore>,
    pub passwords: Arc<StubPasswords>,
    pub federated: Arc<StubFederated>,
    pub profiles: Arc<StubProfiles>,
    pub session: SessionState,
    pub flow: SignInFlow,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_retry(RetryConfig::no_retry())
    }

    pub fn with_retry(retry: RetryConfig) -> Self {
        let store = Arc::new(FlakyStore::new());
        let passwords = Arc::new(StubPasswords::default());
        let federated = Arc::new(StubFederated::default());
        let profiles = Arc::new(StubProfiles::default());
        let session = SessionState::new();

        let reconciler = Arc::new(AccountReconciler::new(store.clone(), retry));
        let flow = SignInFlow::new(
            reconciler,
            session.clone(),
            passwords.clone(),
            federated.clone(),
            profiles.clone(),
            &AuthConfig::default(),
        );

        Self {
            store,
            passwords,
            federated,
            profiles,
            session,
            flow,
        }
    }
}
