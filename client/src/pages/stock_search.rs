//! Stock lookup by ticker symbol.
//!
//! DESIGN
//! ======
//! Input is normalized to an uppercase ticker of letters, digits, `.` and
//! `-`, so the symbol goes into the query string without escaping. Any
//! failure shows one fixed message; the backend's wording is only logged.

#[cfg(test)]
#[path = "stock_search_test.rs"]
mod stock_search_test;

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::loading::Loading;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::StockQuote;
use crate::util::format::{format_count, format_inr_compact, format_ratio, or_not_available};

pub const SEARCH_FAILURE: &str = "Failed to fetch stock data. Please check the symbol and try again.";

pub const POPULAR_SYMBOLS: [&str; 10] = [
    "TCS.NS",
    "RELIANCE.NS",
    "INFY.NS",
    "HDFCBANK.NS",
    "ICICIBANK.NS",
    "ITC.NS",
    "SBIN.NS",
    "BHARTIARTL.NS",
    "HINDUNILVR.NS",
    "LT.NS",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuoteTab {
    #[default]
    KeyMetrics,
    CompanyInfo,
    FinancialData,
}

impl QuoteTab {
    pub const ALL: [Self; 3] = [Self::KeyMetrics, Self::CompanyInfo, Self::FinancialData];

    pub fn label(self) -> &'static str {
        match self {
            Self::KeyMetrics => "Key Metrics",
            Self::CompanyInfo => "Company Info",
            Self::FinancialData => "Financial Data",
        }
    }
}

/// Uppercase and strip everything but ticker characters.
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Button text for a popular symbol (exchange suffix dropped).
pub fn popular_label(symbol: &str) -> &str {
    symbol.strip_suffix(".NS").unwrap_or(symbol)
}

/// Signed rupee change, e.g. `+₹12.50`.
pub fn signed_change(change: Option<f64>) -> String {
    match change {
        Some(c) if c >= 0.0 => format!("+{}", format_inr_compact(Some(c))),
        other => format_inr_compact(other),
    }
}

pub fn signed_percent(percent: Option<f64>) -> String {
    match percent {
        Some(p) if p >= 0.0 => format!("+{p:.2}%"),
        Some(p) => format!("{p:.2}%"),
        None => "N/A".to_owned(),
    }
}

pub fn is_gain(quote: &StockQuote) -> bool {
    quote.change.unwrap_or(0.0) >= 0.0
}

pub fn key_metrics(quote: &StockQuote) -> Vec<(&'static str, String)> {
    vec![
        ("Previous Close", format_inr_compact(quote.previous_close)),
        ("Volume", format_count(quote.volume)),
        ("Market Cap", format_inr_compact(quote.market_cap)),
        ("52 Week High", format_inr_compact(quote.high_52_week)),
        ("52 Week Low", format_inr_compact(quote.low_52_week)),
        ("P/E Ratio", format_ratio(quote.pe_ratio)),
    ]
}

pub fn company_info(quote: &StockQuote) -> Vec<(&'static str, String)> {
    let employees = match quote.employees {
        Some(e) if e > 0.0 => format_count(Some(e)),
        _ => "N/A".to_owned(),
    };
    vec![
        ("Website", or_not_available(quote.website.as_deref())),
        ("Headquarters", or_not_available(quote.headquarters.as_deref())),
        ("Employees", employees),
        ("Founded", or_not_available(quote.founded.as_deref())),
    ]
}

pub fn financial_rows(quote: &StockQuote) -> Vec<(&'static str, String)> {
    let dividend = match quote.dividend_yield {
        Some(d) if d > 0.0 => format!("{d:.2}%"),
        _ => "N/A".to_owned(),
    };
    vec![
        ("Current Price", format_inr_compact(quote.current_price)),
        ("Market Capitalization", format_inr_compact(quote.market_cap)),
        ("Price-to-Earnings Ratio", format_ratio(quote.pe_ratio)),
        ("Dividend Yield", dividend),
        ("Trading Volume", format_count(quote.volume)),
        (
            "52-Week Range",
            format!("{} - {}", format_inr_compact(quote.low_52_week), format_inr_compact(quote.high_52_week)),
        ),
    ]
}

/// Look up `raw`. `None` when nothing usable was typed.
pub async fn lookup(api: &ApiClient, raw: &str) -> Option<Result<StockQuote, ApiError>> {
    let symbol = normalize_symbol(raw);
    if symbol.is_empty() {
        return None;
    }
    Some(api.stock_quote(&symbol).await)
}

#[component]
pub fn StockSearchPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let symbol = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let quote = RwSignal::new(None::<StockQuote>);
    let error = RwSignal::new(None::<String>);
    let tab = RwSignal::new(QuoteTab::default());

    let search = move |raw: String| {
        if loading.get_untracked() || normalize_symbol(&raw).is_empty() {
            return;
        }
        loading.set(true);
        error.set(None);
        quote.set(None);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match lookup(&api, &raw).await {
                Some(Ok(found)) => {
                    tab.set(QuoteTab::default());
                    quote.set(Some(found));
                }
                Some(Err(err)) => {
                    log::warn!("stock search for {raw} failed: {err}");
                    error.set(Some(SEARCH_FAILURE.to_owned()));
                }
                None => {}
            }
            loading.set(false);
        });
    };

    let search_typed = search.clone();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            search_typed(symbol.get_untracked());
        }
    };
    let search_click = search.clone();

    let popular = POPULAR_SYMBOLS
        .iter()
        .map(|sym| {
            let search = search.clone();
            view! {
                <button
                    class="btn btn--outline btn--small"
                    type="button"
                    on:click=move |_| {
                        symbol.set((*sym).to_owned());
                        search((*sym).to_owned());
                    }
                >
                    {popular_label(sym)}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="page">
            <header class="page__header page__header--centered">
                <h1 class="page__title">"Stock Search & Analysis"</h1>
                <p class="page__subtitle">"Get comprehensive information about any stock symbol"</p>
            </header>

            <div class="search-bar">
                <input
                    class="field__input search-bar__input"
                    placeholder="Enter stock symbol (e.g., TCS.NS, RELIANCE.NS, INFY.NS)"
                    prop:value=move || symbol.get()
                    on:input=move |ev| symbol.set(normalize_symbol(&event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary"
                    type="button"
                    disabled=move || symbol.with(String::is_empty) || loading.get()
                    on:click=move |_| search_click(symbol.get_untracked())
                >
                    "Search"
                </button>
            </div>

            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <Alert
                                kind=AlertKind::Error
                                message=message
                                on_dismiss=Callback::new(move |()| error.set(None))
                            />
                        }
                    })
            }}
            {move || loading.get().then(|| view! { <Loading /> })}
            {move || quote.get().map(|q| view! { <QuoteCard quote=q tab=tab /> })}

            <div class="popular">
                <h2 class="page__section-title">"Popular Indian Stocks"</h2>
                <div class="popular__buttons">{popular}</div>
            </div>
        </section>
    }
}

fn rows_view(rows: Vec<(&'static str, String)>) -> impl IntoView {
    rows.into_iter()
        .map(|(label, value)| {
            view! {
                <div class="metric">
                    <span class="metric__label">{label}</span>
                    <span class="metric__value">{value}</span>
                </div>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
fn QuoteCard(quote: StockQuote, tab: RwSignal<QuoteTab>) -> impl IntoView {
    let gain = is_gain(&quote);
    let metrics = key_metrics(&quote);
    let company = company_info(&quote);
    let financials = financial_rows(&quote);
    let description = quote
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "No description available".to_owned());

    let tabs = QuoteTab::ALL
        .iter()
        .map(|t| {
            let t = *t;
            view! {
                <button
                    class="tabs__tab"
                    type="button"
                    class:tabs__tab--active=move || tab.get() == t
                    on:click=move |_| tab.set(t)
                >
                    {t.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let panel = move || match tab.get() {
        QuoteTab::KeyMetrics => view! { <div class="metrics-grid">{rows_view(metrics.clone())}</div> }.into_any(),
        QuoteTab::CompanyInfo => view! {
            <div class="company">
                <h3 class="company__heading">"Company Description"</h3>
                <p class="company__description">{description.clone()}</p>
                {rows_view(company.clone())}
            </div>
        }
        .into_any(),
        QuoteTab::FinancialData => view! { <div class="metrics-table">{rows_view(financials.clone())}</div> }.into_any(),
    };

    view! {
        <article class="quote-card">
            <header class="quote-card__header">
                <div>
                    <h2 class="quote-card__name">{or_not_available(quote.name.as_deref())}</h2>
                    <p class="quote-card__symbol">{quote.symbol.clone()}</p>
                    <div class="quote-card__badges">
                        {quote.sector.clone().map(|s| view! { <span class="badge badge--blue">{s}</span> })}
                        {quote.industry.clone().map(|i| view! { <span class="badge badge--green">{i}</span> })}
                    </div>
                </div>
                <div class="quote-card__price-block">
                    <p class="quote-card__price">{format_inr_compact(quote.current_price)}</p>
                    <p class="quote-card__change" class:quote-card__change--gain=gain class:quote-card__change--loss=!gain>
                        {signed_change(quote.change)}
                        " "
                        <span class="badge">{signed_percent(quote.change_percent)}</span>
                    </p>
                </div>
            </header>
            <nav class="tabs">{tabs}</nav>
            <div class="tabs__panel">{panel}</div>
        </article>
    }
}
