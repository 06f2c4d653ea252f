use crate::{UserIdentity, UserKey, normalize_key};

use googletest::prelude::*;
use proptest::prelude::*;

#[test]
fn given_plain_email_when_normalized_then_dots_and_at_replaced() {
    assert_that!(
        normalize_key("jane.doe@example.com"),
        eq("jane-doe-example-com")
    );
}

#[test]
fn given_mixed_case_emails_when_normalized_then_keys_differ() {
    let upper = normalize_key("Jane.Doe@Example.com");
    let lower = normalize_key("jane.doe@example.com");

    assert_that!(upper, eq("Jane-Doe-Example-com"));
    assert_that!(lower, eq("jane-doe-example-com"));
    assert_ne!(upper, lower);
}

#[test]
fn given_input_without_separators_when_normalized_then_unchanged() {
    assert_that!(normalize_key("not an email"), eq("not an email"));
    assert_that!(normalize_key(""), eq(""));
}

#[test]
fn given_identity_when_key_requested_then_matches_normalize_key() {
    let identity = UserIdentity::new("a.b@c.d", "A", "B");

    assert_that!(identity.key(), eq(&UserKey::from_email("a.b@c.d")));
    assert_that!(identity.key().as_str(), eq("a-b-c-d"));
}

proptest! {
    #[test]
    fn given_any_email_when_normalized_then_no_dot_or_at(email in ".*") {
        let key = normalize_key(&email);
        prop_assert!(!key.contains('.'));
        prop_assert!(!key.contains('@'));
    }

    #[test]
    fn given_any_email_when_normalized_twice_then_same_key(email in "[A-Za-z0-9._%+@-]{0,64}") {
        prop_assert_eq!(normalize_key(&email), normalize_key(&email));
    }

    #[test]
    fn given_any_email_when_normalized_then_char_count_preserved(email in ".{0,64}") {
        prop_assert_eq!(normalize_key(&email).chars().count(), email.chars().count());
    }
}
