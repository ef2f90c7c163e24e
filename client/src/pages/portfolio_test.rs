use super::*;

#[test]
fn known_segments_resolve() {
    assert_eq!(resolve_variant(Some("master")), Some(PortfolioVariant::Master));
    assert_eq!(resolve_variant(Some("usa")), Some(PortfolioVariant::Usa));
    assert_eq!(resolve_variant(Some("me")), Some(PortfolioVariant::Me));
}

#[test]
fn missing_segment_is_not_found() {
    assert_eq!(resolve_variant(None), None);
    assert_eq!(resolve_variant(Some("")), None);
}

#[test]
fn unknown_segment_is_rejected() {
    assert_eq!(resolve_variant(Some("europe")), None);
    assert_eq!(resolve_variant(Some("ME")), None);
}

#[test]
fn titles_follow_variant() {
    assert_eq!(PortfolioVariant::Me.title(), "My Portfolio");
    assert_eq!(PortfolioVariant::Master.title(), "Master Portfolio");
    assert_eq!(PortfolioVariant::Usa.title(), "USA Portfolio");
}
