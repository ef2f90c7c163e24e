use futures::executor::block_on;

use super::*;
use crate::net::transport::Method;
use crate::net::types::{Credentials, Session};
use crate::test_support::{ScriptedTransport, client_with};

fn authenticated() -> Session {
    Session { authenticated: true, email: Some("a@b.com".to_owned()), ..Session::default() }
}

#[test]
fn loading_wins_over_stale_session() {
    let state = SessionState { session: Some(authenticated()), loading: true };
    assert_eq!(decide(&state), GateDecision::Loading);
    assert_eq!(decide(&SessionState::default()), GateDecision::Loading);
}

#[test]
fn resolved_states_render_or_redirect() {
    let signed_in = SessionState { session: Some(authenticated()), loading: false };
    let anonymous = SessionState { session: None, loading: false };
    let flagged_out = SessionState { session: Some(Session::default()), loading: false };

    assert_eq!(decide(&signed_in), GateDecision::Render);
    assert_eq!(decide(&anonymous), GateDecision::RedirectToLogin);
    assert_eq!(decide(&flagged_out), GateDecision::RedirectToLogin);
}

#[test]
fn redirect_replaces_history() {
    assert!(replace_options().replace);
}

#[test]
fn login_lets_dashboard_render() {
    let transport = ScriptedTransport::new();
    transport.reply(Method::Get, "/auth/session", 200, r#"{"authenticated":false}"#);
    transport.reply(Method::Post, "/auth/login", 200, r#"{"authenticated":true,"email":"a@b.com"}"#);
    let store = SessionStore::new(client_with(&transport));

    block_on(store.start());
    assert_eq!(decide(&store.snapshot()), GateDecision::RedirectToLogin);

    let creds = Credentials { email: "a@b.com".to_owned(), password: "x".to_owned() };
    block_on(store.login(&creds)).unwrap();
    assert_eq!(decide(&store.snapshot()), GateDecision::Render);
}

#[test]
fn anonymous_startup_redirects_root() {
    let transport = ScriptedTransport::new();
    transport.reply(Method::Get, "/auth/session", 200, r#"{"authenticated":false}"#);
    let store = SessionStore::new(client_with(&transport));

    assert_eq!(decide(&store.snapshot()), GateDecision::Loading);
    block_on(store.start());
    assert_eq!(decide(&store.snapshot()), GateDecision::RedirectToLogin);
}

#[test]
fn logout_redirects_on_next_evaluation() {
    let transport = ScriptedTransport::new();
    transport.reply(Method::Get, "/auth/session", 200, r#"{"authenticated":true,"email":"a@b.com"}"#);
    transport.reply(Method::Post, "/auth/logout", 200, "");
    let store = SessionStore::new(client_with(&transport));

    block_on(store.start());
    assert_eq!(decide(&store.snapshot()), GateDecision::Render);

    block_on(store.logout()).unwrap();
    assert_eq!(decide(&store.snapshot()), GateDecision::RedirectToLogin);
}
