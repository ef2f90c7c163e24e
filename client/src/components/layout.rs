//! Page frame shared by every route except `/login`.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="layout__main">
                <Outlet />
            </main>
            <Footer />
        </div>
    }
}
