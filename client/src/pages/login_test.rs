use futures::executor::block_on;

use super::*;
use crate::net::transport::Method;
use crate::test_support::{ScriptedTransport, client_with};

fn creds() -> Credentials {
    Credentials { email: "a@b.com".to_owned(), password: "x".to_owned() }
}

#[test]
fn mode_text_switches_with_mode() {
    assert_eq!(LoginMode::SignIn.heading(), "Sign in to continue");
    assert_eq!(LoginMode::Register.submit_label(), "Register and Sign In");
    assert_eq!(LoginMode::SignIn.switch_prompt().1, "Create one");
    assert_eq!(LoginMode::SignIn.toggled(), LoginMode::Register);
    assert_eq!(LoginMode::Register.toggled(), LoginMode::SignIn);
}

#[test]
fn validate_credentials_trims_email_and_requires_both() {
    assert_eq!(validate_credentials(" a@b.com ", "x"), Ok(creds()));
    assert_eq!(validate_credentials("   ", "x"), Err("Enter both email and password."));
    assert_eq!(validate_credentials("a@b.com", ""), Err("Enter both email and password."));
}

#[test]
fn sign_in_only_calls_login() {
    let transport = ScriptedTransport::new();
    transport.reply(Method::Post, "/auth/login", 200, r#"{"authenticated":true,"email":"a@b.com"}"#);
    let store = SessionStore::new(client_with(&transport));

    block_on(authenticate(&store, LoginMode::SignIn, &creds())).unwrap();

    assert_eq!(transport.call_count(Method::Post, "/auth/register"), 0);
    assert!(store.snapshot().is_authenticated());
}

#[test]
fn register_mode_registers_then_logs_in() {
    let transport = ScriptedTransport::new();
    transport.reply(Method::Post, "/auth/register", 201, r#"{"status":"registered"}"#);
    transport.reply(Method::Post, "/auth/login", 200, r#"{"authenticated":true,"email":"a@b.com"}"#);
    let store = SessionStore::new(client_with(&transport));

    let session = block_on(authenticate(&store, LoginMode::Register, &creds())).unwrap();

    assert_eq!(session.email(), Some("a@b.com"));
    let urls: Vec<String> = transport.calls().into_iter().map(|c| c.url).collect();
    assert!(urls[0].ends_with("/auth/register"));
    assert!(urls[1].ends_with("/auth/login"));
}

#[test]
fn failed_registration_skips_login() {
    let transport = ScriptedTransport::new();
    transport.reply(Method::Post, "/auth/register", 400, r#"{"error":"registration-failed"}"#);
    let store = SessionStore::new(client_with(&transport));

    let err = block_on(authenticate(&store, LoginMode::Register, &creds())).unwrap_err();

    assert_eq!(err.message, "registration-failed");
    assert_eq!(transport.call_count(Method::Post, "/auth/login"), 0);
    assert_eq!(store.snapshot().session, None);
}
