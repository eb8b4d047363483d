use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_full_payload() {
    let user: User = serde_json::from_value(serde_json::json!({
        "full_name": "Jane Doe",
        "email": "jane@example.com",
        "email_verified": true,
        "plan": "pro",
        "remaining_scans": 7,
        "used_scans": 3.0,
        "subscription_status": "active",
        "created_at": "2024-03-05T10:00:00Z",
        "id": 42
    }))
    .expect("user should decode");
    assert_eq!(user.full_name, "Jane Doe");
    assert!(user.email_verified);
    assert_eq!(user.remaining_scans, 7);
    assert_eq!(user.used_scans, 3);
    assert_eq!(user.subscription_status.as_deref(), Some("active"));
}

#[test]
fn user_defaults_optional_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "full_name": "A",
        "email": "a@b.c",
        "remaining_scans": null
    }))
    .expect("user should decode");
    assert!(!user.email_verified);
    assert_eq!(user.plan, "");
    assert_eq!(user.remaining_scans, 0);
    assert_eq!(user.created_at, None);
}

#[test]
fn user_rejects_fractional_counter() {
    let result = serde_json::from_value::<User>(serde_json::json!({
        "full_name": "A",
        "email": "a@b.c",
        "used_scans": 1.5
    }));
    assert!(result.is_err());
}

// =============================================================
// Scans and comparison
// =============================================================

#[test]
fn scans_response_accepts_numeric_ids() {
    let body: ScansResponse = serde_json::from_value(serde_json::json!({
        "scans": [
            { "id": 12, "listing_url": "https://airbnb.com/rooms/1" },
            {
                "id": "abc",
                "listing_url": "https://vrbo.com/2",
                "listing_title": "Cabin",
                "location": "Tahoe"
            }
        ]
    }))
    .expect("scans should decode");
    assert_eq!(body.scans.len(), 2);
    assert_eq!(body.scans[0].id, "12");
    assert_eq!(body.scans[1].listing_title.as_deref(), Some("Cabin"));
}

#[test]
fn scans_response_tolerates_missing_list() {
    let body: ScansResponse = serde_json::from_str("{}").expect("empty body should decode");
    assert!(body.scans.is_empty());
}

#[test]
fn compare_request_serializes_null_question() {
    let req = CompareRequest {
        scan_id_1: "1".to_owned(),
        scan_id_2: "2".to_owned(),
        question: None,
    };
    assert_eq!(
        serde_json::to_value(&req).expect("serialize"),
        serde_json::json!({ "scan_id_1": "1", "scan_id_2": "2", "question": null })
    );
}

#[test]
fn compare_response_accepts_numeric_chat_id() {
    let body: CompareResponse =
        serde_json::from_value(serde_json::json!({ "comparison": "text", "chat_id": 9 }))
            .expect("decode");
    assert_eq!(body.chat_id, "9");
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_message_returns_string_detail() {
    let body: ErrorBody =
        serde_json::from_value(serde_json::json!({ "detail": "Incorrect current password" }))
            .expect("decode");
    assert_eq!(body.message().as_deref(), Some("Incorrect current password"));
}

#[test]
fn error_body_message_ignores_structured_or_blank_detail() {
    let list: ErrorBody =
        serde_json::from_value(serde_json::json!({ "detail": [{ "msg": "field required" }] }))
            .expect("decode");
    assert_eq!(list.message(), None);
    let blank: ErrorBody =
        serde_json::from_value(serde_json::json!({ "detail": "  " })).expect("decode");
    assert_eq!(blank.message(), None);
}
