//! Four headline numbers for a portfolio.

#[cfg(test)]
#[path = "summary_cards_test.rs"]
mod summary_cards_test;

use leptos::prelude::*;

use crate::net::types::PortfolioSummary;
use crate::util::format::{format_currency, format_percent};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryStat {
    pub label: &'static str,
    pub value: String,
    pub help: Option<String>,
}

/// Invested, Current Value, Total Return (with percentage), Performance.
pub fn summary_stats(summary: &PortfolioSummary) -> [SummaryStat; 4] {
    let percent = format_percent(summary.percentage_up);
    [
        SummaryStat { label: "Invested", value: format_currency(summary.total_invested), help: None },
        SummaryStat { label: "Current Value", value: format_currency(summary.total_current_value), help: None },
        SummaryStat {
            label: "Total Return",
            value: format_currency(summary.total_return),
            help: Some(percent.clone()),
        },
        SummaryStat { label: "Performance", value: percent, help: None },
    ]
}

#[component]
pub fn SummaryCards(summary: PortfolioSummary) -> impl IntoView {
    let cards = summary_stats(&summary)
        .into_iter()
        .map(|stat| {
            view! {
                <div class="stat-card">
                    <div class="stat-card__label">{stat.label}</div>
                    <div class="stat-card__value">{stat.value}</div>
                    {stat.help.map(|help| view! { <div class="stat-card__help">{help}</div> })}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="summary-cards">{cards}</div> }
}
