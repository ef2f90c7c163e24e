//! Route guard for views that need a logged-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected route in `app::App`. The decision is a pure function
//! of the session store's state, re-evaluated whenever that state changes;
//! the gate itself holds nothing.
//!
//! DESIGN
//! ======
//! Redirects replace the current history entry so "back" from the login view
//! never lands on the blocked route again.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading::Loading;
use crate::state::session::{SessionPhase, SessionState, SessionStore};

pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session not known yet; show the placeholder.
    Loading,
    Render,
    RedirectToLogin,
}

/// What a protected route should do for `state`. While loading this is
/// always [`GateDecision::Loading`], whatever session is still held.
pub fn decide(state: &SessionState) -> GateDecision {
    match state.phase() {
        SessionPhase::Unknown => GateDecision::Loading,
        SessionPhase::Authenticated => GateDecision::Render,
        SessionPhase::Unauthenticated => GateDecision::RedirectToLogin,
    }
}

/// Navigation options that replace the current history entry.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Render `children` only for an authenticated session.
#[component]
pub fn SessionGate(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let state = store.state();
    let decision = Memo::new(move |_| state.with(decide));
    let navigate = use_navigate();

    Effect::new(move || {
        if decision.get() == GateDecision::RedirectToLogin {
            log::debug!("no session, redirecting to {LOGIN_PATH}");
            navigate(LOGIN_PATH, replace_options());
        }
    });

    move || match decision.get() {
        GateDecision::Render => children().into_any(),
        GateDecision::Loading | GateDecision::RedirectToLogin => view! { <Loading /> }.into_any(),
    }
}
