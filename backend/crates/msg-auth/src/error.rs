use msg_core::{CoreError, IdentityProvider};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

const LOGIN_INCOMPLETE_MESSAGE: &str = "You need to enter all info to log in";
const REGISTER_INCOMPLETE_MESSAGE: &str = "You need to enter all info to create new account";
const ACCOUNT_EXISTS_MESSAGE: &str =
    "Looks like user's account for this email address already exists";
const SIGN_IN_FAILED_MESSAGE: &str = "We couldn't sign you in. Please try again";

/// Which form an alert is presented on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthForm {
    Login,
    Register,
}

/// Authentication failures. These are the only errors a user ever sees.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Form validation failed: {source} {location}")]
    Validation {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Invalid credentials for {provider} sign-in {location}")]
    InvalidCredentials {
        provider: IdentityProvider,
        location: ErrorLocation,
    },

    #[error("{provider} rejected the sign-in: {message} {location}")]
    ProviderRejected {
        provider: IdentityProvider,
        message: String,
        location: ErrorLocation,
    },

    #[error("Network failure talking to {provider}: {message} {location}")]
    Network {
        provider: IdentityProvider,
        message: String,
        location: ErrorLocation,
    },

    #[error("An account already exists for {email} {location}")]
    AccountExists {
        email: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Creates InvalidCredentials error at caller location.
    #[track_caller]
    pub fn invalid_credentials(provider: IdentityProvider) -> Self {
        Self::InvalidCredentials {
            provider,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates ProviderRejected error at caller location.
    #[track_caller]
    pub fn provider_rejected(provider: IdentityProvider, message: impl Into<String>) -> Self {
        Self::ProviderRejected {
            provider,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Network error at caller location.
    #[track_caller]
    pub fn network(provider: IdentityProvider, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AccountExists error at caller location.
    #[track_caller]
    pub fn account_exists(email: impl Into<String>) -> Self {
        Self::AccountExists {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text for the dismissable alert. Provider failures share one message.
    pub fn alert_message(&self, form: AuthForm) -> &'static str {
        match (self, form) {
            (Self::Validation { .. }, AuthForm::Login) => LOGIN_INCOMPLETE_MESSAGE,
            (Self::Validation { .. }, AuthForm::Register) => REGISTER_INCOMPLETE_MESSAGE,
            (Self::AccountExists { .. }, _) => ACCOUNT_EXISTS_MESSAGE,
            _ => SIGN_IN_FAILED_MESSAGE,
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Unusable social profile payloads. Logged, never shown to the user.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Fetching the {provider} profile failed: {message} {location}")]
    Fetch {
        provider: IdentityProvider,
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed {provider} profile payload: {message} {location}")]
    Malformed {
        provider: IdentityProvider,
        message: String,
        location: ErrorLocation,
    },

    #[error("{provider} profile has no email {location}")]
    MissingEmail {
        provider: IdentityProvider,
        location: ErrorLocation,
    },

    #[error("{provider} profile has no {field} {location}")]
    MissingName {
        provider: IdentityProvider,
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Full name '{full_name}' splits into {token_count} tokens, expected 2 {location}")]
    UnsplittableName {
        full_name: String,
        token_count: usize,
        location: ErrorLocation,
    },
}

impl ProfileError {
    /// Creates Fetch error at caller location.
    #[track_caller]
    pub fn fetch(provider: IdentityProvider, message: impl Into<String>) -> Self {
        Self::Fetch {
            provider,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Malformed error at caller location.
    #[track_caller]
    pub fn malformed(provider: IdentityProvider, message: impl Into<String>) -> Self {
        Self::Malformed {
            provider,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates MissingEmail error at caller location.
    #[track_caller]
    pub fn missing_email(provider: IdentityProvider) -> Self {
        Self::MissingEmail {
            provider,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates MissingName error at caller location.
    #[track_caller]
    pub fn missing_name(provider: IdentityProvider, field: &'static str) -> Self {
        Self::MissingName {
            provider,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates UnsplittableName error at caller location.
    #[track_caller]
    pub fn unsplittable_name(full_name: impl Into<String>, token_count: usize) -> Self {
        Self::UnsplittableName {
            full_name: full_name.into(),
            token_count,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
pub type ProfileResult<T> = std::result::Result<T, ProfileError>;
