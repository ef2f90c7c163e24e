//! One holding: identity, position numbers, and a close-price sparkline.

#[cfg(test)]
#[path = "holding_card_test.rs"]
mod holding_card_test;

use leptos::prelude::*;

use crate::net::types::{StockHistoryPoint, StockHolding};
use crate::util::format::format_price;

const SPARK_WIDTH: f64 = 300.0;
const SPARK_HEIGHT: f64 = 80.0;

/// SVG polyline points scaled into a `width` x `height` box. Fewer than two
/// points draw nothing; a flat series sits on the middle line.
#[allow(clippy::cast_precision_loss)]
pub fn sparkline_points(history: &[StockHistoryPoint], width: f64, height: f64) -> String {
    if history.len() < 2 {
        return String::new();
    }
    let (min, max) = history
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.close), hi.max(p.close)));
    let range = max - min;
    let step = width / (history.len() - 1) as f64;

    history
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let y = if range > 0.0 { height - (point.close - min) / range * height } else { height / 2.0 };
            format!("{:.1},{:.1}", i as f64 * step, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tag class for the backend's "Up"/"Down" performance label.
pub fn performance_class(performance: Option<&str>) -> &'static str {
    match performance {
        Some("Up") => "tag tag--up",
        _ => "tag tag--down",
    }
}

pub fn change_label(percentage_change: Option<f64>) -> String {
    percentage_change.map_or_else(|| "N/A".to_owned(), |p| format!("{p:.2}%"))
}

pub fn quantity_label(quantity: Option<f64>) -> String {
    quantity.map_or_else(|| "Qty: N/A".to_owned(), |q| format!("Qty: {q}"))
}

#[component]
pub fn HoldingCard(holding: StockHolding) -> impl IntoView {
    let points = sparkline_points(&holding.history, SPARK_WIDTH, SPARK_HEIGHT);
    let sector = holding.sector.clone().unwrap_or_else(|| "Unknown sector".to_owned());
    let performance = holding.performance.clone().unwrap_or_default();

    view! {
        <article class="holding-card">
            <div class="holding-card__header">
                <div class="holding-card__identity">
                    <h3 class="holding-card__ticker">
                        {holding.ticker.clone()}
                        {holding.long_name.clone().map(|name| view! { <span class="holding-card__name">" · " {name}</span> })}
                    </h3>
                    <p class="holding-card__sector">{sector}</p>
                    <div class="holding-card__tags">
                        <span class=performance_class(holding.performance.as_deref())>{performance}</span>
                        <span class="tag">{change_label(holding.percentage_change)}</span>
                        <span class="tag">{quantity_label(holding.total_quantity)}</span>
                    </div>
                </div>
                <div class="holding-card__prices">
                    <p class="holding-card__price">{format_price(holding.current_price)}</p>
                    <span class="badge badge--purple">"Avg " {format_price(holding.weighted_avg_price)}</span>
                    <span class="badge badge--blue">"Invested " {format_price(holding.invested)}</span>
                </div>
            </div>
            <svg
                class="holding-card__sparkline"
                viewBox=format!("0 0 {SPARK_WIDTH} {SPARK_HEIGHT}")
                preserveAspectRatio="none"
            >
                <polyline points=points fill="none" stroke="#3182ce" stroke-width="2" />
            </svg>
        </article>
    }
}
