pub mod error;
pub mod profile;
pub mod provider;
pub mod reconciler;
pub mod retry;
pub mod session_state;
pub mod sign_in_flow;

pub use error::{AuthError, AuthForm, ProfileError, ProfileResult, Result};
pub use profile::{FacebookProfile, GoogleProfile, ProviderProfile, split_full_name};
pub use provider::{FederatedAuthenticator, PasswordAuthenticator, ProfileSource, ProviderToken};
pub use reconciler::{AccountReconciler, ReconcileOutcome, ReconcileTicket, Reconciliation};
pub use retry::{IsRetryable, with_retry};
pub use session_state::{ConversationGate, GateDecision, SessionState};
pub use sign_in_flow::{SignInFlow, SignInOutcome};
