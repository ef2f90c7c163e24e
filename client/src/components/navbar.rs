//! Top navigation bar: brand, route links, identity, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `layout::Layout` above every routed view except `/login`.
//! Logout goes through the session store; on success the resource caches are
//! cleared before navigating so the next user never sees this one's data.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::alert::{Alert, AlertKind};
use crate::state::resources::Resources;
use crate::state::session::{SessionState, SessionStore};
use crate::util::gate::{LOGIN_PATH, replace_options};

pub const BRAND: &str = "StockLive";

/// `(label, href)` for each primary link, in display order.
pub const NAV_LINKS: [(&str, &str); 7] = [
    ("Dashboard", "/"),
    ("My Portfolio", "/portfolio/me"),
    ("Master Portfolio", "/portfolio/master"),
    ("USA Portfolio", "/portfolio/usa"),
    ("Lessons", "/lessons"),
    ("Blog", "/blog"),
    ("Contact", "/contact"),
];

/// Email to show next to the logout button.
pub fn user_label(state: &SessionState) -> Option<String> {
    if !state.is_authenticated() {
        return None;
    }
    state.email().map(str::to_owned)
}

#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let resources = expect_context::<Resources>();
    let navigate = use_navigate();
    let session = store.state();
    let menu_open = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let logout_error = RwSignal::new(None::<String>);

    let label_state = session.clone();
    let label = move || label_state.with(user_label);
    let authed_state = session;
    let is_authenticated = move || authed_state.with(SessionState::is_authenticated);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        logout_error.set(None);
        let store = store.clone();
        let resources = resources.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match store.logout().await {
                Ok(()) => {
                    resources.clear();
                    navigate(LOGIN_PATH, replace_options());
                }
                Err(err) => logout_error.set(Some(err.message)),
            }
            busy.set(false);
        });
    };

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|(label, href)| {
                view! {
                    <A href=*href attr:class="navbar__link">
                        {*label}
                    </A>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <button
                    class="navbar__menu-toggle"
                    type="button"
                    aria-label="Open Menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <span class="navbar__brand">{BRAND}</span>
                <nav class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                    {links}
                </nav>
                <div class="navbar__account">
                    {move || label().map(|email| view! { <span class="navbar__email">{email}</span> })}
                    {move || {
                        if is_authenticated() {
                            view! {
                                <button class="btn btn--primary" type="button" disabled=move || busy.get() on:click=on_logout.clone()>
                                    "Logout"
                                </button>
                            }
                                .into_any()
                        } else {
                            view! { <A href=LOGIN_PATH attr:class="btn btn--outline">"Login"</A> }.into_any()
                        }
                    }}
                </div>
            </div>
            {move || {
                logout_error
                    .get()
                    .map(|message| {
                        view! {
                            <Alert
                                kind=AlertKind::Error
                                message=message
                                on_dismiss=Callback::new(move |()| logout_error.set(None))
                            />
                        }
                    })
            }}
        </header>
    }
}
