//! Form input for the password paths.
//!
//! Emails are kept exactly as typed; only the store key is normalized.

use crate::{CoreError, Result as CoreErrorResult, UserIdentity};

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Login form input
#[derive(Clone)]
pub struct PasswordCredentials {
    pub email: String,
    pub password: String,
}

impl PasswordCredentials {
    #[track_caller]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        min_password_length: usize,
    ) -> CoreErrorResult<Self> {
        let email = email.into();
        let password = password.into();

        if email.is_empty() {
            return Err(CoreError::validation("email", "email cannot be empty"));
        }
        validate_password(&password, min_password_length)?;

        Ok(Self { email, password })
    }
}

impl std::fmt::Debug for PasswordCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account creation form input
#[derive(Clone)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub credentials: PasswordCredentials,
}

impl Registration {
    #[track_caller]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        min_password_length: usize,
    ) -> CoreErrorResult<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        if first_name.is_empty() {
            return Err(CoreError::validation(
                "first_name",
                "first name cannot be empty",
            ));
        }
        if last_name.is_empty() {
            return Err(CoreError::validation(
                "last_name",
                "last name cannot be empty",
            ));
        }

        let credentials = PasswordCredentials::new(email, password, min_password_length)?;

        Ok(Self {
            first_name,
            last_name,
            credentials,
        })
    }

    /// Identity written to the store once the account exists.
    pub fn identity(&self) -> UserIdentity {
        UserIdentity::new(
            self.credentials.email.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
        )
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("credentials", &self.credentials)
            .finish()
    }
}

#[track_caller]
fn validate_password(password: &str, min_length: usize) -> CoreErrorResult<()> {
    if password.is_empty() {
        return Err(CoreError::validation("password", "password cannot be empty"));
    }
    let length = password.chars().count();
    if length < min_length {
        return Err(CoreError::validation(
            "password",
            format!("password must be at least {min_length} characters, got {length}"),
        ));
    }
    Ok(())
}
