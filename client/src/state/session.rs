//! Session store: the single owner of "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once in `app::App`, provided through Leptos context, and read
//! by the session gate, the navbar, and the login/subscribe pages. Only this
//! module writes the session record.
//!
//! DESIGN
//! ======
//! State lives in an `ArcRwSignal` so views can subscribe to it while tests
//! drive the store directly without a reactive owner. Every operation issues
//! exactly one request and replaces the whole record; nothing is merged.
//!
//! ERROR HANDLING
//! ==============
//! `login`, `logout` and `refresh` hand the normalized error back to the
//! calling form. The startup probe swallows its error: an anonymous visitor
//! is the expected case, not a failure.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, Session};

/// The three states the rest of the app cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup probe has not resolved yet.
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Current session record plus the startup loading flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Unknown
        } else if self.is_authenticated() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.authenticated)
    }

    pub fn email(&self) -> Option<&str> {
        self.session.as_ref().and_then(Session::email)
    }

    pub fn subscription_code(&self) -> Option<&str> {
        self.session.as_ref().and_then(Session::subscription_code)
    }
}

/// Shared handle to the session. Clones observe the same state.
#[derive(Clone)]
pub struct SessionStore {
    state: ArcRwSignal<SessionState>,
    api: ApiClient,
    probe_started: Arc<AtomicBool>,
}

impl SessionStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            state: ArcRwSignal::new(SessionState::default()),
            api,
            probe_started: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Reactive view of the state for components.
    pub fn state(&self) -> ArcRwSignal<SessionState> {
        self.state.clone()
    }

    /// Current state without subscribing.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Startup probe. Runs at most once per store; later calls return
    /// immediately. `loading` is cleared however the probe ends, including
    /// when the future is dropped before completing.
    pub async fn start(&self) {
        if self.probe_started.swap(true, Ordering::SeqCst) {
            return;
        }
        let _loaded = LoadingDone(&self.state);
        match self.api.session().await {
            Ok(session) if session.authenticated => {
                log::info!("session restored for {}", session.email().unwrap_or("unknown user"));
                self.state.update(|s| s.session = Some(session));
            }
            Ok(_) => log::debug!("no active session"),
            Err(err) => log::debug!("session probe failed: {err}"),
        }
    }

    /// Log in and replace the session with the backend's record, marked
    /// authenticated whether or not the backend said so.
    ///
    /// # Errors
    ///
    /// Propagates the request error; the session is left unchanged.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let mut session = self.api.login(credentials).await.inspect_err(|err| {
            log::warn!("login failed: {err}");
        })?;
        session.authenticated = true;
        log::info!("logged in as {}", session.email().unwrap_or("unknown user"));
        let stored = session.clone();
        self.state.update(|s| s.session = Some(stored));
        Ok(session)
    }

    /// Log out. Only a successful response clears the local session.
    ///
    /// # Errors
    ///
    /// Propagates the request error; the local session is left as it was.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.api.logout().await.inspect_err(|err| {
            log::warn!("logout failed: {err}");
        })?;
        log::info!("logged out");
        self.state.update(|s| s.session = None);
        Ok(())
    }

    /// Re-probe the session. An authenticated answer replaces the record;
    /// a negative one is ignored.
    ///
    /// # Errors
    ///
    /// Propagates the request error.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let session = self.api.session().await.inspect_err(|err| {
            log::warn!("session refresh failed: {err}");
        })?;
        if session.authenticated {
            self.state.update(|s| s.session = Some(session));
        }
        Ok(())
    }
}

/// Clears `loading` when the startup probe finishes or is abandoned.
struct LoadingDone<'a>(&'a ArcRwSignal<SessionState>);

impl Drop for LoadingDone<'_> {
    fn drop(&mut self) {
        self.0.update(|s| s.loading = false);
    }
}
