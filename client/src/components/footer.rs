//! Site footer with secondary links and the copyright line.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::state::query::{Clock, SystemClock};

pub const FOOTER_LINKS: [(&str, &str); 4] = [("Home", "/"), ("Lessons", "/lessons"), ("Blog", "/blog"), ("Contact", "/contact")];

/// Gregorian year (UTC) for a Unix millisecond timestamp.
#[allow(clippy::cast_possible_wrap)]
pub fn year_from_ms(ms: u64) -> i64 {
    let days = (ms / 86_400_000) as i64;
    // Civil-from-days over 400-year eras.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    yoe + era * 400 + i64::from(month <= 2)
}

pub fn copyright_line(year: i64) -> String {
    format!("© {year} StockLive. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = year_from_ms(SystemClock.now_ms());
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <nav class="footer__links">
                    {FOOTER_LINKS
                        .iter()
                        .map(|(label, href)| view! { <a class="footer__link" href=*href>{*label}</a> })
                        .collect::<Vec<_>>()}
                </nav>
                <p class="footer__copyright">{copyright_line(year)}</p>
            </div>
        </footer>
    }
}
