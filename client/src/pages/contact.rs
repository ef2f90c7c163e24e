//! Contact form.
//!
//! A successful send clears every field and shows a success banner; a
//! failure keeps what was typed and shows the backend's message.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::components::alert::BannerAlert;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::ContactMessage;
use crate::state::form::FormStatus;

pub const CONTACT_SUCCESS: &str = "Message sent successfully.";

/// Field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Payload for `/contact`, or the first missing required field.
    pub fn validate(&self) -> Result<ContactMessage, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() {
            return Err("Name is required.");
        }
        if email.is_empty() {
            return Err("Email is required.");
        }
        if message.is_empty() {
            return Err("Message is required.");
        }
        Ok(ContactMessage { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
    }

    /// Clear the fields after a successful send; keep them otherwise.
    pub fn settle(&mut self, result: &Result<(), ApiError>) {
        if result.is_ok() {
            *self = Self::default();
        }
    }
}

/// Send `draft` and fold the outcome into the draft and form status.
pub async fn send(api: &ApiClient, draft: RwSignal<ContactDraft>, form: RwSignal<FormStatus>) {
    let payload = match draft.with_untracked(ContactDraft::validate) {
        Ok(payload) => payload,
        Err(message) => {
            form.update(|f| f.reject(message));
            return;
        }
    };
    if !form.try_update(FormStatus::begin).unwrap_or(false) {
        return;
    }
    let result = api.submit_contact(&payload).await;
    draft.update(|d| d.settle(&result));
    form.update(|f| f.finish(&result, CONTACT_SUCCESS));
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let draft = RwSignal::new(ContactDraft::default());
    let form = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        leptos::task::spawn_local(async move { send(&api, draft, form).await });
    };

    view! {
        <form class="page page--narrow form" on:submit=on_submit>
            <h1 class="page__title">"Contact us"</h1>
            <p class="page__subtitle">
                "Have a question? Send us a message and we will get back to you within 24 hours."
            </p>
            <BannerAlert
                banner=Signal::derive(move || form.get().banner)
                on_dismiss=Callback::new(move |()| form.update(FormStatus::dismiss))
            />
            <label class="field">
                <span class="field__label">"Name"</span>
                <input
                    class="field__input"
                    required
                    placeholder="Your full name"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Email"</span>
                <input
                    class="field__input"
                    type="email"
                    required
                    placeholder="you@example.com"
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Message"</span>
                <textarea
                    class="field__input field__input--tall"
                    required
                    placeholder="How can we help you?"
                    prop:value=move || draft.with(|d| d.message.clone())
                    on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                ></textarea>
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || form.get().submitting>
                "Send message"
            </button>
        </form>
    }
}
