//! Dismissable inline alert banner.
//!
//! DESIGN
//! ======
//! Alerts never own their message; the page keeps it in its own state and
//! clears it from `on_dismiss`, so a dismissed alert stays gone until the
//! next outcome replaces it.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use leptos::prelude::*;

use crate::state::form::Banner;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "alert alert--success",
            Self::Error => "alert alert--error",
        }
    }
}

/// Kind and text to show for a form banner, if any.
pub fn banner_alert(banner: &Banner) -> Option<(AlertKind, String)> {
    match banner {
        Banner::None => None,
        Banner::Success(message) => Some((AlertKind::Success, message.clone())),
        Banner::Error(message) => Some((AlertKind::Error, message.clone())),
    }
}

#[component]
pub fn Alert(kind: AlertKind, message: String, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <div class=kind.class() role="alert">
            <span class="alert__message">{message}</span>
            <button class="alert__dismiss" type="button" aria-label="Dismiss" on:click=move |_| on_dismiss.run(())>
                "×"
            </button>
        </div>
    }
}

/// Render `banner` (when present) as an [`Alert`].
#[component]
pub fn BannerAlert(#[prop(into)] banner: Signal<Banner>, on_dismiss: Callback<()>) -> impl IntoView {
    move || {
        banner.with(banner_alert).map(|(kind, message)| {
            view! { <Alert kind=kind message=message on_dismiss=on_dismiss /> }
        })
    }
}
