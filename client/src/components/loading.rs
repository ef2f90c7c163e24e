//! Spinner shown while a route or resource is resolving.

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <div class="loading__spinner"></div>
        </div>
    }
}
