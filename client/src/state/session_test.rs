use futures::executor::block_on;

use super::*;
use crate::net::transport::Method;
use crate::test_support::{ScriptedTransport, client_with};

fn store(transport: &Arc<ScriptedTransport>) -> SessionStore {
    SessionStore::new(client_with(transport))
}

fn creds() -> Credentials {
    Credentials { email: "a@b.com".to_owned(), password: "x".to_owned() }
}

fn logged_in(store: &SessionStore, transport: &Arc<ScriptedTransport>) {
    transport.reply(Method::Post, "/auth/login", 200, r#"{"authenticated":true,"email":"a@b.com","userId":7}"#);
    block_on(store.login(&creds())).unwrap();
}

#[test]
fn new_store_is_loading() {
    let store = store(&ScriptedTransport::new());
    let state = store.snapshot();
    assert!(state.loading);
    assert_eq!(state.session, None);
    assert_eq!(state.phase(), SessionPhase::Unknown);
}

#[test]
fn probe_restores_authenticated_session() {
    let transport = ScriptedTransport::new();
    transport.reply(Method::Get, "/auth/session", 200, r#"{"authenticated":true,"email":"a@b.com"}"#);
    let store = store(&transport);

    block_on(store.start());

    let state = store.snapshot();
    assert!(!state.loading);
    assert_eq!(state.email(), Some("a@b.com"));
    assert_eq!(state.phase(), SessionPhase::Authenticated);
}

#[test]
fn negative_probe_leaves_no_session() {
    let transport = ScriptedTransport::new();
    transport.reply(Method::Get, "/auth/session", 200, r#"{"authenticated":false}"#);
    let store = store(&transport);

    block_on(store.start());

    let state = store.snapshot();
    assert!(!state.loading);
    assert_eq!(state.session, None);
    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
}

#[test]
fn failed_probe_is_swallowed() {
    let transport = ScriptedTransport::new();
    transport.fail(Method::Get, "/auth/session", "NetworkError");
    let store = store(&transport);

    block_on(store.start());

    assert_eq!(store.snapshot().phase(), SessionPhase::Unauthenticated);
}

#[test]
fn probe_runs_once() {
    let transport = ScriptedTransport::new();
    transport.reply(Method::Get, "/auth/session", 200, r#"{"authenticated":false}"#);
    let store = store(&transport);

    block_on(store.start());
    block_on(store.clone().start());

    assert_eq!(transport.call_count(Method::Get, "/auth/session"), 1);
}

#[test]
fn login_marks_session_authenticated() {
    let transport = ScriptedTransport::new();
    transport.reply(Method::Post, "/auth/login", 200, r#"{"email":"a@b.com"}"#);
    let store = store(&transport);

    let session = block_on(store.login(&creds())).unwrap();

    assert!(session.authenticated);
    assert!(store.snapshot().is_authenticated());
    assert_eq!(store.snapshot().email(), Some("a@b.com"));
}

#[test]
fn failed_login_keeps_previous_session() {
    let transport = ScriptedTransport::new();
    let store = store(&transport);
    logged_in(&store, &transport);
    transport.reply(Method::Post, "/auth/login", 401, r#"{"error":"invalid-credentials"}"#);

    let err = block_on(store.login(&creds())).unwrap_err();

    assert_eq!(err.message, "invalid-credentials");
    assert_eq!(store.snapshot().session.and_then(|s| s.user_id), Some(7));
}

#[test]
fn probe_after_login_reports_same_identity() {
    let transport = ScriptedTransport::new();
    let store = store(&transport);
    logged_in(&store, &transport);
    transport.reply(Method::Get, "/auth/session", 200, r#"{"authenticated":true,"email":"a@b.com","userId":7}"#);

    block_on(store.refresh()).unwrap();

    let state = store.snapshot();
    assert_eq!(state.email(), Some("a@b.com"));
    assert_eq!(state.session.and_then(|s| s.user_id()), Some(7));
}

#[test]
fn logout_clears_session() {
    let transport = ScriptedTransport::new();
    let store = store(&transport);
    logged_in(&store, &transport);
    transport.reply(Method::Post, "/auth/logout", 200, "");

    block_on(store.logout()).unwrap();

    assert_eq!(store.snapshot().session, None);
}

#[test]
fn failed_logout_keeps_session() {
    let transport = ScriptedTransport::new();
    let store = store(&transport);
    logged_in(&store, &transport);
    transport.reply(Method::Post, "/auth/logout", 500, r#"{"error":"logout-failed"}"#);

    let err = block_on(store.logout()).unwrap_err();

    assert_eq!(err.message, "logout-failed");
    assert!(store.snapshot().is_authenticated());
}

#[test]
fn negative_refresh_is_ignored() {
    let transport = ScriptedTransport::new();
    let store = store(&transport);
    logged_in(&store, &transport);
    transport.reply(Method::Get, "/auth/session", 200, r#"{"authenticated":false}"#);

    block_on(store.refresh()).unwrap();

    assert!(store.snapshot().is_authenticated());
}

#[test]
fn refresh_replaces_whole_record() {
    let transport = ScriptedTransport::new();
    let store = store(&transport);
    logged_in(&store, &transport);
    transport.reply(
        Method::Get,
        "/auth/session",
        200,
        r#"{"authenticated":true,"email":"a@b.com","subscriptionCode":"GOLD"}"#,
    );

    block_on(store.refresh()).unwrap();

    let state = store.snapshot();
    assert_eq!(state.subscription_code(), Some("GOLD"));
    assert_eq!(state.session.and_then(|s| s.user_id), None);
}
