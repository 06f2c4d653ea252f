mod canonical_user_record;
mod credentials;
mod identity_provider;
mod sign_in_state;
mod user_key;
