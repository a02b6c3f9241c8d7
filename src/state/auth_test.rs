use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_is_loading() {
    assert!(AuthState::default().loading);
}

#[test]
fn user_id_reads_session() {
    let state = AuthState {
        session: Some(Session { user_id: "abc".to_owned(), name: "A".to_owned(), email: "a@a.com".to_owned() }),
        loading: false,
    };
    assert_eq!(state.user_id().as_deref(), Some("abc"));
}

// =============================================================
// Session record
// =============================================================

#[test]
fn session_serializes_with_camel_case_user_id() {
    let session = Session { user_id: "abc".to_owned(), name: "A".to_owned(), email: "a@a.com".to_owned() };
    let raw = serde_json::to_string(&session).unwrap();
    assert_eq!(raw, r#"{"userId":"abc","name":"A","email":"a@a.com"}"#);
}

#[test]
fn blank_user_id_is_invalid() {
    let session: Session = serde_json::from_str(r#"{"userId":"  "}"#).unwrap();
    assert!(!session.is_valid());
}

#[test]
fn profile_update_merges_only_given_fields() {
    let mut session = Session { user_id: "abc".to_owned(), name: "A".to_owned(), email: "a@a.com".to_owned() };
    ProfileUpdate { name: Some("B".to_owned()), email: None }.apply(&mut session);
    assert_eq!(session.name, "B");
    assert_eq!(session.email, "a@a.com");
    assert_eq!(session.user_id, "abc");
}
