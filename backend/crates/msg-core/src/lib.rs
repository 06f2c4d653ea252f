pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::canonical_user_record::{CanonicalUserRecord, RecordBody};
pub use models::credentials::{DEFAULT_MIN_PASSWORD_LENGTH, PasswordCredentials, Registration};
pub use models::identity_provider::IdentityProvider;
pub use models::session::Session;
pub use models::sign_in_state::SignInState;
pub use models::user_identity::UserIdentity;
pub use models::user_key::{UserKey, normalize_key};

#[cfg(test)]
mod tests;
