use super::*;

#[test]
fn session_deserializes_from_backend_payload() {
    let json = r#"{
        "access_token": "tok-abc123",
        "profile": { "name": "R. Osei", "occupation": "Attending", "contact": "pager 4411" }
    }"#;
    let session: Session = serde_json::from_str(json).expect("valid session payload");
    assert_eq!(session.access_token, "tok-abc123");
    assert_eq!(session.profile.name, "R. Osei");
    assert_eq!(session.profile.occupation.as_deref(), Some("Attending"));
    assert_eq!(session.profile.contact.as_deref(), Some("pager 4411"));
}

#[test]
fn profile_tolerates_missing_optional_fields() {
    let json = r#"{ "access_token": "tok-1", "profile": { "name": "J. Ng" } }"#;
    let session: Session = serde_json::from_str(json).expect("sparse profile");
    assert_eq!(session.profile.occupation, None);
    assert_eq!(session.profile.contact, None);
}

#[test]
fn auth_events_use_wire_names() {
    let event: AuthEvent = serde_json::from_str(r#""SIGNED_IN""#).expect("wire name");
    assert_eq!(event, AuthEvent::SignedIn);
    assert_eq!(
        serde_json::to_string(&AuthEvent::SignedOut).expect("serialize"),
        r#""SIGNED_OUT""#
    );
    assert_eq!(AuthEvent::TokenRefreshed.as_str(), "TOKEN_REFRESHED");
}

#[test]
fn unknown_auth_event_is_rejected() {
    assert!(serde_json::from_str::<AuthEvent>(r#""PASSWORD_RECOVERY""#).is_err());
}
