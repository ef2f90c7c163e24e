//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is what the host renders on the server; `App` is what hydrates.
//! `App` builds the one `ApiClient`, `SessionStore` and `Resources` for the
//! page lifetime and provides them as context. Every route except `/login`
//! sits inside `Layout` and behind `SessionGate`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment, WildcardSegment};

use crate::components::layout::Layout;
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::pages::blog::BlogPage;
use crate::pages::chat::ChatPage;
use crate::pages::contact::ContactPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::lessons::LessonsPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::portfolio::PortfolioPage;
use crate::pages::stock_search::StockSearchPage;
use crate::pages::subscribe::SubscribePage;
use crate::state::resources::Resources;
use crate::state::session::SessionStore;
use crate::util::gate::SessionGate;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = ApiClient::browser(ApiConfig::from_build_env());
    let store = SessionStore::new(api.clone());
    let resources = Resources::with_system_clock(api.clone());

    provide_context(api);
    provide_context(store.clone());
    provide_context(resources);

    // Single session probe per page load; `start` ignores repeat calls.
    Effect::new(move || {
        let store = store.clone();
        leptos::task::spawn_local(async move { store.start().await });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/stocklive.css"/>
        <Title text="StockLive"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=|| view! { <SessionGate><DashboardPage/></SessionGate> }/>
                    <Route
                        path=(StaticSegment("portfolio"), ParamSegment("variant"))
                        view=|| view! { <SessionGate><PortfolioPage/></SessionGate> }
                    />
                    <Route path=StaticSegment("lessons") view=|| view! { <SessionGate><LessonsPage/></SessionGate> }/>
                    <Route path=StaticSegment("blog") view=|| view! { <SessionGate><BlogPage/></SessionGate> }/>
                    <Route path=StaticSegment("contact") view=|| view! { <SessionGate><ContactPage/></SessionGate> }/>
                    <Route path=StaticSegment("subscribe") view=|| view! { <SessionGate><SubscribePage/></SessionGate> }/>
                    <Route path=StaticSegment("chat") view=|| view! { <SessionGate><ChatPage/></SessionGate> }/>
                    <Route
                        path=StaticSegment("stock-search")
                        view=|| view! { <SessionGate><StockSearchPage/></SessionGate> }
                    />
                    <Route path=WildcardSegment("any") view=NotFoundPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
