//! Number and time formatting for display.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const NOT_AVAILABLE: &str = "N/A";

/// US dollars with thousands separators: `$1,234.56`, `-$50.00`.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&format!("{:.2}", value.abs())))
}

/// Two-decimal percentage: `5.00%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Two-decimal dollar price without grouping; missing → `N/A`.
pub fn format_price(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_owned(), |v| format!("${v:.2}"))
}

/// Compact rupee amount: `₹1.50T`, `₹2.00B`, `₹3.25Cr`, `₹4.00L`, `₹950.00`.
pub fn format_inr_compact(value: Option<f64>) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_owned();
    };
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    let body = if abs >= 1e12 {
        format!("{:.2}T", abs / 1e12)
    } else if abs >= 1e9 {
        format!("{:.2}B", abs / 1e9)
    } else if abs >= 1e7 {
        format!("{:.2}Cr", abs / 1e7)
    } else if abs >= 1e5 {
        format!("{:.2}L", abs / 1e5)
    } else {
        format!("{abs:.2}")
    };
    format!("{sign}₹{body}")
}

/// Compact count: `1.20B`, `3.40M`, `5.60K`, or the plain number.
pub fn format_count(value: Option<f64>) -> String {
    match value {
        None => NOT_AVAILABLE.to_owned(),
        Some(v) if v >= 1e9 => format!("{:.2}B", v / 1e9),
        Some(v) if v >= 1e6 => format!("{:.2}M", v / 1e6),
        Some(v) if v >= 1e3 => format!("{:.2}K", v / 1e3),
        Some(v) => v.to_string(),
    }
}

/// Optional two-decimal number; missing or zero → `N/A`.
pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) if v.abs() > f64::EPSILON => format!("{v:.2}"),
        _ => NOT_AVAILABLE.to_owned(),
    }
}

/// Text field or `N/A` when missing/blank.
pub fn or_not_available(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_owned()
}

/// `HH:MM` (UTC) for a millisecond timestamp.
pub fn format_clock(ms: u64) -> String {
    let minutes_of_day = (ms / 60_000) % (24 * 60);
    format!("{:02}:{:02}", minutes_of_day / 60, minutes_of_day % 60)
}

/// `YYYY-MM-DD` prefix of an ISO date, or `Recently` when absent.
pub fn format_post_date(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|d| !d.is_empty()) {
        Some(date) => date.split('T').next().unwrap_or(date).to_owned(),
        None => "Recently".to_owned(),
    }
}

fn group_thousands(fixed: &str) -> String {
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed, ""));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + frac.len() + 1);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !frac.is_empty() {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
