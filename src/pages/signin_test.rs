use super::*;

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(
        validate_credentials("  rn@ward.example  ", "hunter2"),
        Ok(("rn@ward.example".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_email() {
    assert_eq!(
        validate_credentials("   ", "hunter2"),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_credentials_requires_password() {
    assert_eq!(
        validate_credentials("rn@ward.example", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_credentials_preserves_password_verbatim() {
    assert_eq!(
        validate_credentials("rn@ward.example", "  spaced  "),
        Ok(("rn@ward.example".to_owned(), "  spaced  ".to_owned()))
    );
}
