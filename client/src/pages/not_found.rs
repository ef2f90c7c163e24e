//! 404 view for unmatched routes and unknown portfolio variants.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page page--centered">
            <h1 class="page__code">"404"</h1>
            <p class="page__subtitle">"Oops, the page you are looking for does not exist."</p>
            <A href="/" attr:class="btn btn--primary">"Back to dashboard"</A>
        </section>
    }
}
