//! Dashboard: own portfolio, master highlights, and recommendations.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. It runs three independent hooks; each
//! section loads, fails and renders on its own.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::loading::Loading;
use crate::components::summary_cards::SummaryCards;
use crate::hooks::{FetchState, use_portfolio, use_recommendations};
use crate::net::error::ApiError;
use crate::net::types::{Portfolio, PortfolioSummary, PortfolioVariant, StockRecommendation};
use crate::pages::portfolio::HoldingsGrid;

pub const MASTER_LOCKED: &str = "Master portfolio is available for subscribers only.";
pub const NO_PORTFOLIO: &str = "No holdings available yet. Add stocks to see them here.";
pub const NO_RECOMMENDATIONS: &str = "No active recommendations right now.";

pub fn portfolio_warning(err: &ApiError) -> String {
    format!("We were unable to load your portfolio. {}", err.message)
}

/// What the master-portfolio section shows.
#[derive(Clone, Debug, PartialEq)]
pub enum MasterView {
    /// Any error, even with older data cached.
    Locked,
    Summary(PortfolioSummary),
    Loading,
    Empty,
}

pub fn master_view(state: &FetchState<PortfolioVariant, Portfolio>) -> MasterView {
    if state.error.is_some() {
        return MasterView::Locked;
    }
    match (&state.data, state.is_loading) {
        (Some(portfolio), _) => MasterView::Summary(portfolio.summary.clone()),
        (None, true) => MasterView::Loading,
        (None, false) => MasterView::Empty,
    }
}

/// Price and signal lines for a recommendation card.
pub fn recommendation_lines(idea: &StockRecommendation) -> (String, String) {
    (format!("${:.2}", idea.price), format!("Signal: {}", idea.recommendation))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let mine = use_portfolio(Signal::stored(PortfolioVariant::Me));
    let master = use_portfolio(Signal::stored(PortfolioVariant::Master));
    let ideas = use_recommendations();

    let my_section = move || {
        let state = mine.get();
        let warning = state.error.as_ref().map(|err| {
            view! {
                <Alert
                    kind=AlertKind::Error
                    message=portfolio_warning(err)
                    on_dismiss=Callback::new(move |()| mine.update(FetchState::dismiss_error))
                />
            }
        });
        let body = match (state.data, state.is_loading) {
            (Some(portfolio), _) => view! {
                <SummaryCards summary=portfolio.summary />
                <h2 class="page__section-title">"Your Holdings"</h2>
                <HoldingsGrid holdings=portfolio.holdings />
            }
            .into_any(),
            (None, true) => view! { <Loading /> }.into_any(),
            (None, false) => view! { <p class="notice">{NO_PORTFOLIO}</p> }.into_any(),
        };
        view! { {warning} {body} }
    };

    let master_section = move || {
        let body = match master.with(master_view) {
            MasterView::Locked => return view! { <p class="notice">{MASTER_LOCKED}</p> }.into_any(),
            MasterView::Summary(summary) => view! { <SummaryCards summary=summary /> }.into_any(),
            MasterView::Loading => view! { <Loading /> }.into_any(),
            MasterView::Empty => ().into_any(),
        };
        view! {
            <h2 class="page__section-title">"Master Portfolio Highlights"</h2>
            {body}
        }
        .into_any()
    };

    let ideas_section = move || {
        let state = ideas.get();
        match (state.data, state.is_loading) {
            (Some(list), _) if !list.is_empty() => view! {
                <div class="ideas-grid">
                    {list
                        .iter()
                        .map(|idea| {
                            let (price, signal) = recommendation_lines(idea);
                            view! {
                                <div class="idea-card">
                                    <h3 class="idea-card__name">{idea.name.clone()}</h3>
                                    <p class="idea-card__price">{price}</p>
                                    <p class="idea-card__signal">{signal}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any(),
            (None, true) => view! { <Loading /> }.into_any(),
            _ => view! { <p class="page__empty">{NO_RECOMMENDATIONS}</p> }.into_any(),
        }
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="page__title">"Welcome back"</h1>
                <p class="page__subtitle">"Track your portfolio performance and explore fresh ideas."</p>
            </header>
            <div class="page__section">{my_section}</div>
            <div class="page__section">{master_section}</div>
            <div class="page__section">
                <h2 class="page__section-title">"Stock Recommendations"</h2>
                {ideas_section}
            </div>
        </section>
    }
}
