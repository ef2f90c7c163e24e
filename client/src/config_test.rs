use super::*;

#[test]
fn new_trims_trailing_slashes() {
    let config = ApiConfig::new("https://api.example.com/api//");
    assert_eq!(config.base_url(), "https://api.example.com/api");
}

#[test]
fn new_falls_back_to_default_when_blank() {
    assert_eq!(ApiConfig::new("   ").base_url(), DEFAULT_API_BASE_URL);
}

#[test]
fn url_joins_with_single_slash() {
    let config = ApiConfig::new("http://localhost:8000/api/");
    assert_eq!(config.url("/auth/login"), "http://localhost:8000/api/auth/login");
    assert_eq!(config.url("lessons"), "http://localhost:8000/api/lessons");
}

#[test]
fn portfolio_window_is_five_minutes() {
    assert_eq!(PORTFOLIO_STALE_MS, 300_000);
}
