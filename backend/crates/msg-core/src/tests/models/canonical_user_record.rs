use crate::{CanonicalUserRecord, RecordBody, UserIdentity, UserKey};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_record_body_when_serialized_then_uses_stored_field_names() {
    let body = RecordBody {
        first_name: "Jane".into(),
        last_name: "Doe".into(),
    };

    let value = serde_json::to_value(&body).unwrap();

    assert_that!(value, eq(&json!({"first_Name": "Jane", "last_Name": "Doe"})));
}

#[test]
fn given_snake_case_fields_when_deserialized_then_rejected() {
    let result = serde_json::from_value::<RecordBody>(json!({
        "first_name": "Jane",
        "last_name": "Doe"
    }));

    assert_that!(result, err(anything()));
}

#[test]
fn given_identity_when_converted_to_body_then_email_not_stored() {
    let identity = UserIdentity::new("jane@example.com", "Jane", "Doe");

    let value = serde_json::to_value(RecordBody::from(&identity)).unwrap();

    assert_that!(value.get("email"), none());
    assert_that!(value["first_Name"], eq(&json!("Jane")));
}

#[test]
fn given_body_and_key_when_record_built_then_body_round_trips() {
    let body = RecordBody {
        first_name: "Jane".into(),
        last_name: "Doe".into(),
    };

    let record = CanonicalUserRecord::from_body(UserKey::from_raw("jane-example-com"), body.clone());

    assert_that!(record.key.as_str(), eq("jane-example-com"));
    assert_that!(record.body(), eq(&body));
}
