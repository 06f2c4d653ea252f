use crate::{CoreError, DEFAULT_MIN_PASSWORD_LENGTH, PasswordCredentials, Registration};

use googletest::prelude::*;

#[test]
fn given_complete_login_form_when_validated_then_ok() {
    let result =
        PasswordCredentials::new("Jane.Doe@Example.com", "secret1", DEFAULT_MIN_PASSWORD_LENGTH);

    assert_that!(result, ok(anything()));
    // Email is kept verbatim
    assert_that!(result.unwrap().email, eq("Jane.Doe@Example.com"));
}

#[test]
fn given_empty_email_when_validated_then_email_field_error() {
    let err = PasswordCredentials::new("", "secret1", DEFAULT_MIN_PASSWORD_LENGTH).unwrap_err();

    assert_eq!(err.field(), Some("email"));
}

#[test]
fn given_short_password_when_validated_then_password_field_error() {
    let err = PasswordCredentials::new("a@b.c", "12345", DEFAULT_MIN_PASSWORD_LENGTH).unwrap_err();

    assert!(matches!(err, CoreError::Validation { field: "password", .. }));
}

#[test]
fn given_password_at_minimum_length_when_validated_then_ok() {
    let result = PasswordCredentials::new("a@b.c", "123456", DEFAULT_MIN_PASSWORD_LENGTH);

    assert_that!(result, ok(anything()));
}

#[test]
fn given_multibyte_password_when_validated_then_counts_characters() {
    // 6 characters, 12 bytes
    let result = PasswordCredentials::new("a@b.c", "ééééé", DEFAULT_MIN_PASSWORD_LENGTH);
    assert_that!(result, err(anything()));

    let result = PasswordCredentials::new("a@b.c", "éééééé", DEFAULT_MIN_PASSWORD_LENGTH);
    assert_that!(result, ok(anything()));
}

#[test]
fn given_credentials_when_debug_formatted_then_password_redacted() {
    let creds = PasswordCredentials::new("a@b.c", "hunter22", DEFAULT_MIN_PASSWORD_LENGTH).unwrap();

    let debug = format!("{creds:?}");

    assert_that!(debug, not(contains_substring("hunter22")));
    assert_that!(debug, contains_substring("<redacted>"));
}

#[test]
fn given_missing_last_name_when_registering_then_last_name_error() {
    let err = Registration::new("Jane", "", "jane@example.com", "secret1", 6).unwrap_err();

    assert_eq!(err.field(), Some("last_name"));
}

#[test]
fn given_missing_first_name_when_registering_then_first_name_error() {
    let err = Registration::new("", "Doe", "jane@example.com", "secret1", 6).unwrap_err();

    assert_eq!(err.field(), Some("first_name"));
}

#[test]
fn given_valid_registration_when_identity_requested_then_uses_email_not_password() {
    let registration =
        Registration::new("Jane", "Doe", "jane@example.com", "secret1", 6).unwrap();

    let identity = registration.identity();

    assert_that!(identity.email, eq("jane@example.com"));
    assert_that!(identity.first_name, eq("Jane"));
    assert_that!(identity.last_name, eq("Doe"));
}
