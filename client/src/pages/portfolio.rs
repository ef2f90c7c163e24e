//! Portfolio page for `/portfolio/:variant`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route parameter picks the variant; switching variants switches cache
//! slots through `use_portfolio`. An unknown variant renders the not-found
//! view and never reaches the backend.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::alert::{Alert, AlertKind};
use crate::components::holding_card::HoldingCard;
use crate::components::loading::Loading;
use crate::components::summary_cards::SummaryCards;
use crate::hooks::{FetchState, use_portfolio};
use crate::net::types::{Portfolio, PortfolioVariant, StockHolding};
use crate::pages::not_found::NotFoundPage;

pub const NO_HOLDINGS: &str = "No holdings found for this portfolio.";

/// Variant for the route segment; missing or unknown yields `None`.
pub fn resolve_variant(raw: Option<&str>) -> Option<PortfolioVariant> {
    raw.and_then(PortfolioVariant::parse)
}

/// Grid of holding cards.
#[component]
pub fn HoldingsGrid(holdings: Vec<StockHolding>) -> impl IntoView {
    view! {
        <div class="holdings-grid">
            {holdings.into_iter().map(|holding| view! { <HoldingCard holding=holding /> }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let params = use_params_map();
    let variant = Memo::new(move |_| params.with(|p| resolve_variant(p.get_str("variant"))));

    move || match variant.get() {
        Some(variant) => view! { <PortfolioView variant=variant /> }.into_any(),
        None => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
fn PortfolioView(variant: PortfolioVariant) -> impl IntoView {
    let portfolio = use_portfolio(Signal::stored(variant));

    view! {
        <section class="page">
            <h1 class="page__title">{variant.title()}</h1>
            {move || {
                portfolio
                    .with(|s| s.error.as_ref().map(|e| e.message.clone()))
                    .map(|message| {
                        view! {
                            <Alert
                                kind=AlertKind::Error
                                message=message
                                on_dismiss=Callback::new(move |()| portfolio.update(FetchState::dismiss_error))
                            />
                        }
                    })
            }}
            {move || portfolio_body(&portfolio.get())}
        </section>
    }
}

fn portfolio_body(state: &FetchState<PortfolioVariant, Portfolio>) -> AnyView {
    match (&state.data, state.is_loading) {
        (Some(portfolio), _) => view! {
            <SummaryCards summary=portfolio.summary.clone() />
            <HoldingsGrid holdings=portfolio.holdings.clone() />
        }
        .into_any(),
        (None, true) => view! { <Loading /> }.into_any(),
        (None, false) => view! { <p class="page__empty">{NO_HOLDINGS}</p> }.into_any(),
    }
}
