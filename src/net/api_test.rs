use super::*;

#[test]
fn endpoints_are_stable() {
    assert_eq!(SESSION_ENDPOINT, "/api/auth/session");
    assert_eq!(SIGNIN_ENDPOINT, "/api/auth/signin");
    assert_eq!(SIGNOUT_ENDPOINT, "/api/auth/signout");
    assert_eq!(PATIENTS_ENDPOINT, "/api/patients");
}

#[test]
fn signin_failed_message_includes_status() {
    assert_eq!(signin_failed_message(503), "sign-in failed: 503");
}

#[test]
fn invalid_credentials_message_is_user_facing() {
    assert_eq!(INVALID_CREDENTIALS_MESSAGE, "Invalid email or password.");
}
