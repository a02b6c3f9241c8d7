use std::sync::Arc;
use std::sync::atomic::AtomicUsize;

use futures::executor::block_on;

use super::*;
use crate::util::storage::{MemoryStorage, SessionStorage, StorageError};

// =============================================================
// Helpers
// =============================================================

struct StubGateway(Result<LoginResponse, ApiError>);

impl AuthGateway for StubGateway {
    async fn login(&self, _user_id: &str, _password: &str) -> Result<LoginResponse, ApiError> {
        self.0.clone()
    }
}

fn session(user_id: &str) -> Session {
    Session { user_id: user_id.to_owned(), name: "A".to_owned(), email: "a@a.com".to_owned() }
}

fn persisted_store(record: &str) -> (Arc<MemoryStorage>, SessionStore<Arc<MemoryStorage>>) {
    let storage = Arc::new(MemoryStorage::with_item(SESSION_KEY, record));
    let store = SessionStore::new(storage.clone());
    (storage, store)
}

fn empty_store() -> (Arc<MemoryStorage>, SessionStore<Arc<MemoryStorage>>) {
    let storage = Arc::new(MemoryStorage::new());
    let store = SessionStore::new(storage.clone());
    (storage, store)
}

fn ok_login(user_id: &str) -> StubGateway {
    StubGateway(Ok(LoginResponse {
        success: Some(true),
        message: Some("로그인 성공".to_owned()),
        token: Some("token".to_owned()),
        user_id: Some(user_id.to_owned()),
        name: Some("Kim".to_owned()),
        email: Some("kim@example.com".to_owned()),
    }))
}

// =============================================================
// initialize
// =============================================================

#[test]
fn store_starts_loading() {
    let (_, store) = empty_store();
    assert!(store.snapshot().loading);
}

#[test]
fn initialize_restores_persisted_session() {
    let (_, store) = persisted_store(r#"{"userId":"abc","name":"A","email":"a@a.com"}"#);
    store.initialize();
    let state = store.snapshot();
    assert!(!state.loading);
    assert_eq!(state.session, Some(session("abc")));
}

#[test]
fn initialize_without_record_is_anonymous() {
    let (_, store) = empty_store();
    store.initialize();
    assert_eq!(store.snapshot(), AuthState { session: None, loading: false });
}

#[test]
fn initialize_ignores_record_without_user_id() {
    let (_, store) = persisted_store(r#"{"name":"A","email":"a@a.com"}"#);
    store.initialize();
    assert!(store.session().is_none());
}

#[test]
fn initialize_ignores_corrupt_record() {
    let (_, store) = persisted_store("not json");
    store.initialize();
    assert!(store.session().is_none());
    assert!(!store.snapshot().loading);
}

#[test]
fn initialize_reads_storage_only_once() {
    let (storage, store) = empty_store();
    store.initialize();
    storage.save(SESSION_KEY, r#"{"userId":"late"}"#).unwrap();
    store.initialize();
    assert!(store.session().is_none());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_builds_and_persists_session() {
    let (storage, store) = empty_store();
    store.initialize();
    let outcome = block_on(store.login(&ok_login("abc"), "abc", "Abcdef1!"));
    assert_eq!(outcome, LoginOutcome { success: true, message: None });

    let expected = Session { user_id: "abc".to_owned(), name: "Kim".to_owned(), email: "kim@example.com".to_owned() };
    assert_eq!(store.session(), Some(expected.clone()));
    let raw = storage.load(SESSION_KEY).unwrap();
    assert_eq!(serde_json::from_str::<Session>(&raw).unwrap(), expected);
}

#[test]
fn login_without_success_flag_counts_as_success() {
    let (_, store) = empty_store();
    store.initialize();
    let gateway = StubGateway(Ok(LoginResponse { user_id: None, name: Some("Kim".to_owned()), ..Default::default() }));
    let outcome = block_on(store.login(&gateway, "typed-id", "pw"));
    assert!(outcome.success);
    assert_eq!(store.session().map(|s| s.user_id).as_deref(), Some("typed-id"));
}

#[test]
fn login_business_failure_keeps_session_and_surfaces_message() {
    let (storage, store) = persisted_store(r#"{"userId":"abc","name":"A","email":"a@a.com"}"#);
    store.initialize();
    let gateway = StubGateway(Ok(LoginResponse {
        success: Some(false),
        message: Some("X".to_owned()),
        ..Default::default()
    }));

    let outcome = block_on(store.login(&gateway, "u1", "bad-pass"));

    assert_eq!(outcome, LoginOutcome { success: false, message: Some("X".to_owned()) });
    assert_eq!(store.session(), Some(session("abc")));
    assert!(storage.load(SESSION_KEY).unwrap().contains("abc"));
}

#[test]
fn login_failure_without_message_uses_generic_text() {
    let (_, store) = empty_store();
    store.initialize();
    let gateway = StubGateway(Ok(LoginResponse { success: Some(false), ..Default::default() }));
    let outcome = block_on(store.login(&gateway, "u1", "pw"));
    assert_eq!(outcome.message.as_deref(), Some(LOGIN_FAILED_MESSAGE));
}

#[test]
fn login_transport_failure_never_errors() {
    let (_, store) = empty_store();
    store.initialize();
    let gateway = StubGateway(Err(ApiError::Network("offline".to_owned())));
    let outcome = block_on(store.login(&gateway, "u1", "pw"));
    assert_eq!(outcome, LoginOutcome { success: false, message: Some("로그인에 실패했습니다.".to_owned()) });
    assert!(store.session().is_none());
}

// =============================================================
// logout / update_profile
// =============================================================

#[test]
fn logout_clears_memory_and_record() {
    let (storage, store) = persisted_store(r#"{"userId":"abc","name":"A","email":"a@a.com"}"#);
    store.initialize();
    store.logout();
    assert!(store.session().is_none());
    assert!(!store.snapshot().loading);
    assert_eq!(storage.load(SESSION_KEY), None);
}

/// Storage that refuses removals but accepts writes.
struct NoRemoveStorage(MemoryStorage);

impl SessionStorage for NoRemoveStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.0.load(key)
    }

    fn save(&self, key: &str, raw: &str) -> Result<(), StorageError> {
        self.0.save(key, raw)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected(key.to_owned()))
    }
}

#[test]
fn logout_with_refused_removal_does_not_come_back_on_reload() {
    let storage = Arc::new(NoRemoveStorage(MemoryStorage::with_item(
        SESSION_KEY,
        r#"{"userId":"abc","name":"A","email":"a@a.com"}"#,
    )));
    let store = SessionStore::new(storage.clone());
    store.initialize();
    store.logout();
    assert!(store.session().is_none());

    let reloaded = SessionStore::new(storage);
    reloaded.initialize();
    assert!(reloaded.session().is_none());
    assert!(!reloaded.snapshot().loading);
}

#[test]
fn update_profile_merges_and_persists() {
    let (storage, store) = persisted_store(r#"{"userId":"abc","name":"A","email":"a@a.com"}"#);
    store.initialize();
    store.update_profile(&ProfileUpdate { name: Some("B".to_owned()), email: Some("b@b.com".to_owned()) });

    let expected = Session { user_id: "abc".to_owned(), name: "B".to_owned(), email: "b@b.com".to_owned() };
    assert_eq!(store.session(), Some(expected.clone()));
    let raw = storage.load(SESSION_KEY).unwrap();
    assert_eq!(serde_json::from_str::<Session>(&raw).unwrap(), expected);
}

#[test]
fn update_profile_when_logged_out_is_noop() {
    let (storage, store) = empty_store();
    store.initialize();
    store.update_profile(&ProfileUpdate { name: Some("B".to_owned()), email: None });
    assert!(store.session().is_none());
    assert_eq!(storage.load(SESSION_KEY), None);
}

// =============================================================
// subscribe
// =============================================================

#[test]
fn subscribers_see_every_change() {
    let (_, store) = empty_store();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |state: &AuthState| sink.lock().unwrap().push(state.user_id()));

    store.initialize();
    block_on(store.login(&ok_login("abc"), "abc", "pw"));
    store.logout();

    assert_eq!(*seen.lock().unwrap(), vec![None, Some("abc".to_owned()), None]);
}

#[test]
fn unsubscribe_stops_notifications() {
    let (_, store) = empty_store();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let id = store.subscribe(move |_: &AuthState| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    store.initialize();
    store.unsubscribe(id);
    store.logout();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
