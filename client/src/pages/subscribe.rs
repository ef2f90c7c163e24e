//! Subscription code entry.
//!
//! Saving a code re-probes the session so the stored subscription code and
//! anything gated on it (the master portfolio) reflect the change.

#[cfg(test)]
#[path = "subscribe_test.rs"]
mod subscribe_test;

use leptos::prelude::*;

use crate::components::alert::BannerAlert;
use crate::net::error::ApiError;
use crate::net::types::PortfolioVariant;
use crate::state::form::FormStatus;
use crate::state::resources::Resources;
use crate::state::session::{SessionState, SessionStore};

pub const SUBSCRIBE_SUCCESS: &str = "Subscription updated successfully.";

/// Code to pre-fill from the current session.
pub fn initial_code(state: &SessionState) -> String {
    state.subscription_code().unwrap_or_default().to_owned()
}

/// Save `code`, drop the cached master portfolio, then refresh the session.
///
/// # Errors
///
/// The first failing request's error.
pub async fn save_code(store: &SessionStore, resources: &Resources, code: &str) -> Result<(), ApiError> {
    store.api().update_subscription(code.trim()).await?;
    resources.invalidate_portfolio(PortfolioVariant::Master);
    store.refresh().await
}

#[component]
pub fn SubscribePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let resources = expect_context::<Resources>();
    let code = RwSignal::new(store.state().with_untracked(initial_code));
    let form = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if code.with_untracked(|c| c.trim().is_empty()) {
            form.update(|f| f.reject("Subscription code is required."));
            return;
        }
        if !form.try_update(FormStatus::begin).unwrap_or(false) {
            return;
        }
        let store = store.clone();
        let resources = resources.clone();
        let value = code.get_untracked();
        leptos::task::spawn_local(async move {
            let result = save_code(&store, &resources, &value).await;
            form.update(|f| f.finish(&result, SUBSCRIBE_SUCCESS));
        });
    };

    view! {
        <form class="page page--narrow form" on:submit=on_submit>
            <h1 class="page__title">"Subscription"</h1>
            <p class="page__subtitle">
                "Enter your subscription code to unlock premium portfolios and exclusive research content."
            </p>
            <BannerAlert
                banner=Signal::derive(move || form.get().banner)
                on_dismiss=Callback::new(move |()| form.update(FormStatus::dismiss))
            />
            <label class="field">
                <span class="field__label">"Subscription code"</span>
                <input
                    class="field__input"
                    required
                    placeholder="Enter your code"
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || form.get().submitting>
                "Save code"
            </button>
        </form>
    }
}
