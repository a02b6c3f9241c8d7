use super::*;
use crate::state::auth::Session;

fn loaded(session: Option<Session>) -> AuthState {
    AuthState { session, loading: false }
}

fn tester() -> Session {
    Session { user_id: "tester01".to_owned(), name: "홍길동".to_owned(), email: "t@example.com".to_owned() }
}

#[test]
fn loading_is_distinct_for_both_guards() {
    let state = AuthState::default();
    assert_eq!(guard_decision(&state, GuardKind::Protected), GuardDecision::Loading);
    assert_eq!(guard_decision(&state, GuardKind::PublicOnly), GuardDecision::Loading);
}

#[test]
fn loading_wins_even_with_session() {
    let state = AuthState { session: Some(tester()), loading: true };
    assert_eq!(guard_decision(&state, GuardKind::PublicOnly), GuardDecision::Loading);
}

#[test]
fn anonymous_visitor() {
    let state = loaded(None);
    assert_eq!(guard_decision(&state, GuardKind::Protected), GuardDecision::Redirect("/login"));
    assert_eq!(guard_decision(&state, GuardKind::PublicOnly), GuardDecision::Render);
}

#[test]
fn signed_in_user() {
    let state = loaded(Some(tester()));
    assert_eq!(guard_decision(&state, GuardKind::Protected), GuardDecision::Render);
    assert_eq!(guard_decision(&state, GuardKind::PublicOnly), GuardDecision::Redirect("/"));
}
