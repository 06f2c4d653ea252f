use crate::IdentityProvider;

use std::str::FromStr;

#[test]
fn test_identity_provider_as_str() {
    assert_eq!(IdentityProvider::Password.as_str(), "password");
    assert_eq!(IdentityProvider::Facebook.as_str(), "facebook");
    assert_eq!(IdentityProvider::Google.as_str(), "google");
}

#[test]
fn test_identity_provider_from_str() {
    assert_eq!(
        IdentityProvider::from_str("google").unwrap(),
        IdentityProvider::Google
    );
    assert_eq!(
        IdentityProvider::from_str("facebook").unwrap(),
        IdentityProvider::Facebook
    );
    assert!(IdentityProvider::from_str("Google").is_err());
    assert!(IdentityProvider::from_str("twitter").is_err());
}

#[test]
fn test_identity_provider_is_social() {
    assert!(!IdentityProvider::Password.is_social());
    assert!(IdentityProvider::Facebook.is_social());
    assert!(IdentityProvider::Google.is_social());
}
