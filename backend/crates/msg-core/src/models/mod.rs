pub mod canonical_user_record;
pub mod credentials;
pub mod identity_provider;
pub mod session;
pub mod sign_in_state;
pub mod user_identity;
pub mod user_key;
