use crate::{Session, User};

#[test]
fn test_user_round_trips_is_anonymous_as_camel_case() {
    let user = User {
        id: String::from("u-1"),
        username: String::from("amina"),
        email: String::from("amina@example.com"),
        is_anonymous: true,
    };

    let json = serde_json::to_string(&user).unwrap();
    assert!(json.contains("\"isAnonymous\":true"));

    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn test_session_wire_shape() {
    let json = r#"{
        "token": "jwt-abc",
        "user": {
            "id": "u-1",
            "username": "amina",
            "email": "amina@example.com",
            "isAnonymous": false
        }
    }"#;

    let session: Session = serde_json::from_str(json).unwrap();
    assert_eq!(session.token, "jwt-abc");
    assert_eq!(session.user.username, "amina");
    assert!(!session.user.is_anonymous);
}
