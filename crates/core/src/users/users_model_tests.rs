use crate::users::{NewUser, UserRole};

fn sample_user() -> NewUser {
    NewUser {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password_hash: "$argon2id$fake".to_string(),
        role: UserRole::User,
    }
}

#[test]
fn new_user_valid() {
    assert!(sample_user().validate().is_ok());
}

#[test]
fn new_user_rejects_short_name() {
    let mut user = sample_user();
    user.name = "A".to_string();
    assert!(user.validate().is_err());
}

#[test]
fn new_user_rejects_bad_email() {
    for bad in ["", "no-at-sign", "@leading", "trailing@"] {
        let mut user = sample_user();
        user.email = bad.to_string();
        assert!(user.validate().is_err(), "expected rejection for {bad:?}");
    }
}

#[test]
fn role_serialization() {
    assert_eq!(serde_json::to_string(&UserRole::User).unwrap(), "\"USER\"");
    assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"ADMIN\"");
    assert!(UserRole::Admin.is_admin());
    assert!(!UserRole::User.is_admin());
}
