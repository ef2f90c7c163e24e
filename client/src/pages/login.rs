//! Login page with an inline switch to account registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only ungated route. A successful sign-in (or register + sign-in)
//! updates the session store and replaces the history entry with `/`, so
//! "back" does not return here.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::alert::BannerAlert;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, Session};
use crate::state::form::FormStatus;
use crate::state::session::SessionStore;
use crate::util::gate::replace_options;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    SignIn,
    Register,
}

impl LoginMode {
    pub fn heading(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in to continue",
            Self::Register => "Create an account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::Register => "Register and Sign In",
        }
    }

    /// Prompt and link text for switching to the other mode.
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            Self::SignIn => ("Don't have an account? ", "Create one"),
            Self::Register => ("Already have an account? ", "Sign in"),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::Register,
            Self::Register => Self::SignIn,
        }
    }
}

/// Trim the email and require both fields.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Register first when asked to, then log in through the session store.
///
/// # Errors
///
/// The first failing request's error; a failed registration skips login.
pub async fn authenticate(store: &SessionStore, mode: LoginMode, credentials: &Credentials) -> Result<Session, ApiError> {
    if mode == LoginMode::Register {
        store.api().register(credentials).await?;
        log::info!("registered {}", credentials.email);
    }
    store.login(credentials).await
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let mode = RwSignal::new(LoginMode::default());
    let form = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                form.update(|f| f.reject(message));
                return;
            }
        };
        if !form.try_update(FormStatus::begin).unwrap_or(false) {
            return;
        }
        let store = store.clone();
        let navigate = navigate.clone();
        let mode = mode.get_untracked();
        leptos::task::spawn_local(async move {
            let result = authenticate(&store, mode, &credentials).await;
            form.update(|f| f.finish_quiet(&result));
            if result.is_ok() {
                navigate("/", replace_options());
            }
        });
    };

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        mode.update(|m| *m = m.toggled());
        form.update(FormStatus::dismiss);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <form class="login-form" on:submit=on_submit>
                    <h1 class="login-card__heading">{move || mode.get().heading()}</h1>
                    <BannerAlert
                        banner=Signal::derive(move || form.get().banner)
                        on_dismiss=Callback::new(move |()| form.update(FormStatus::dismiss))
                    />
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            class="field__input"
                            type="email"
                            required
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="field__input"
                            type="password"
                            required
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || form.get().submitting>
                        {move || mode.get().submit_label()}
                    </button>
                    <p class="login-card__switch">
                        {move || mode.get().switch_prompt().0}
                        <a href="#" on:click=on_toggle>
                            {move || mode.get().switch_prompt().1}
                        </a>
                    </p>
                </form>
            </div>
        </div>
    }
}
