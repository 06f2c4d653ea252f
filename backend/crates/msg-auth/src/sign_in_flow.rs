//! The three sign-in paths and account registration.
//!
//! Every path walks the same [`SignInState`] machine. Authentication failures
//! are returned to the caller; anything that goes wrong after authentication
//! succeeded is logged by the detached reconciliation and never blocks the
//! session.

use crate::{
    AccountReconciler, AuthError, FederatedAuthenticator, PasswordAuthenticator, ProfileError,
    ProfileSource, ProviderToken, ReconcileTicket, Reconciliation, Result as AuthErrorResult,
    SessionState,
};

use msg_config::AuthConfig;
use msg_core::{IdentityProvider, PasswordCredentials, Registration, Session, SignInState};

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::watch;

/// A successful sign-in. The session is already active when this is returned.
#[derive(Debug)]
pub struct SignInOutcome {
    pub session: Session,
    pub reconciliation: ReconcileTicket,
}

pub struct SignInFlow {
    reconciler: Arc<AccountReconciler>,
    session: SessionState,
    passwords: Arc<dyn PasswordAuthenticator>,
    federated: Arc<dyn FederatedAuthenticator>,
    profiles: Arc<dyn ProfileSource>,
    min_password_length: usize,
    state: watch::Sender<SignInState>,
}

impl SignInFlow {
    pub fn new(
        reconciler: Arc<AccountReconciler>,
        session: SessionState,
        passwords: Arc<dyn PasswordAuthenticator>,
        federated: Arc<dyn FederatedAuthenticator>,
        profiles: Arc<dyn ProfileSource>,
        config: &AuthConfig,
    ) -> Self {
        let (state, _rx) = watch::channel(SignInState::Idle);
        Self {
            reconciler,
            session,
            passwords,
            federated,
            profiles,
            min_password_length: config.min_password_length,
            state,
        }
    }

    pub fn state(&self) -> SignInState {
        *self.state.borrow()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<SignInState> {
        self.state.subscribe()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Email/password login. Only checks that a record exists; a login
    /// carries no names to write.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<SignInOutcome> {
        let credentials = PasswordCredentials::new(email, password, self.min_password_length)?;

        self.begin();
        let session = self
            .authenticated(self.passwords.authenticate_with_password(&credentials).await)?;

        let reconciler = Arc::clone(&self.reconciler);
        let key = AccountReconciler::normalize_key(&credentials.email);
        let reconciliation = ReconcileTicket::spawn(async move {
            let exists = reconciler.exists(&key).await;
            if !exists {
                warn!("Signed in with password but no record exists for '{key}'");
            }
            Reconciliation::Checked { key, exists }
        });

        Ok(self.activate(session, reconciliation))
    }

    /// Create a password account, then write its record.
    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<SignInOutcome> {
        let registration = Registration::new(
            first_name,
            last_name,
            email,
            password,
            self.min_password_length,
        )?;

        let key = AccountReconciler::normalize_key(&registration.credentials.email);
        if self.reconciler.exists(&key).await {
            info!("Registration refused, record '{key}' already exists");
            return Err(AuthError::account_exists(registration.credentials.email));
        }

        self.begin();
        let session =
            self.authenticated(self.passwords.create_account(&registration.credentials).await)?;

        let reconciliation = self.reconciler.spawn_reconcile(registration.identity());

        Ok(self.activate(session, reconciliation))
    }

    pub async fn sign_in_with_facebook(
        &self,
        token: ProviderToken,
    ) -> AuthErrorResult<SignInOutcome> {
        self.sign_in_with_provider(IdentityProvider::Facebook, token)
            .await
    }

    pub async fn sign_in_with_google(&self, token: ProviderToken) -> AuthErrorResult<SignInOutcome> {
        self.sign_in_with_provider(IdentityProvider::Google, token)
            .await
    }

    /// Clear the session and return to idle.
    pub fn sign_out(&self) {
        self.session.clear();
        if self.state() == SignInState::SessionActive {
            self.advance(SignInState::Idle);
        }
    }

    async fn sign_in_with_provider(
        &self,
        provider: IdentityProvider,
        token: ProviderToken,
    ) -> AuthErrorResult<SignInOutcome> {
        self.begin();
        let session = self.authenticated(
            self.federated
                .authenticate_with_provider(provider, &token)
                .await,
        )?;

        let reconciler = Arc::clone(&self.reconciler);
        let profiles = Arc::clone(&self.profiles);
        let reconciliation = ReconcileTicket::spawn(async move {
            let identity = match profiles.fetch_profile(provider, &token).await {
                Ok(profile) if profile.provider() != provider => Err(ProfileError::malformed(
                    provider,
                    format!("received a {} profile", profile.provider()),
                )),
                Ok(profile) => profile.into_identity(),
                Err(e) => Err(e),
            };

            match identity {
                Ok(identity) => Reconciliation::Completed(reconciler.reconcile(&identity).await),
                Err(e) => {
                    warn!("Skipping record write for {provider} sign-in: {e}");
                    Reconciliation::Skipped(e)
                }
            }
        });

        Ok(self.activate(session, reconciliation))
    }

    /// A new attempt replaces whoever was signed in, even if it fails.
    fn begin(&self) {
        if self.session.is_active() {
            info!("New sign-in started, ending the current session");
            self.session.clear();
        }

        let current = self.state();
        match current {
            SignInState::Idle => {}
            SignInState::SessionActive | SignInState::AuthFailed => {
                self.advance(SignInState::Idle);
            }
            in_flight => {
                debug!("Starting a sign-in while another is {in_flight}");
                self.state.send_replace(SignInState::Idle);
            }
        }
        self.advance(SignInState::Authenticating);
    }

    fn authenticated(&self, result: AuthErrorResult<Session>) -> AuthErrorResult<Session> {
        match result {
            Ok(session) => {
                self.advance(SignInState::AuthSucceeded);
                Ok(session)
            }
            Err(e) => {
                warn!("Authentication failed: {e}");
                self.advance(SignInState::AuthFailed);
                self.advance(SignInState::Idle);
                Err(e)
            }
        }
    }

    fn activate(&self, session: Session, reconciliation: ReconcileTicket) -> SignInOutcome {
        self.advance(SignInState::Reconciling);
        self.session.activate(session.clone());
        self.advance(SignInState::SessionActive);

        SignInOutcome {
            session,
            reconciliation,
        }
    }

    // Overlapping attempts are not serialized, so the latest step wins.
    fn advance(&self, next: SignInState) {
        self.state.send_modify(|state| match state.transition(next) {
            Ok(next) => *state = next,
            Err(e) => {
                debug!("{e}");
                *state = next;
            }
        });
    }
}
