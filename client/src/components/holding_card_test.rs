use super::*;

fn point(close: f64) -> StockHistoryPoint {
    StockHistoryPoint { date: "2024-01-01".to_owned(), close }
}

#[test]
fn sparkline_needs_two_points() {
    assert_eq!(sparkline_points(&[], 100.0, 10.0), "");
    assert_eq!(sparkline_points(&[point(5.0)], 100.0, 10.0), "");
}

#[test]
fn sparkline_scales_into_box() {
    let history = [point(10.0), point(20.0), point(15.0)];
    assert_eq!(sparkline_points(&history, 100.0, 10.0), "0.0,10.0 50.0,0.0 100.0,5.0");
}

#[test]
fn flat_sparkline_sits_mid_height() {
    let history = [point(7.0), point(7.0)];
    assert_eq!(sparkline_points(&history, 40.0, 20.0), "0.0,10.0 40.0,10.0");
}

#[test]
fn performance_tag_follows_direction() {
    assert_eq!(performance_class(Some("Up")), "tag tag--up");
    assert_eq!(performance_class(Some("Down")), "tag tag--down");
    assert_eq!(performance_class(None), "tag tag--down");
}

#[test]
fn labels_handle_missing_numbers() {
    assert_eq!(change_label(Some(3.14159)), "3.14%");
    assert_eq!(change_label(None), "N/A");
    assert_eq!(quantity_label(Some(12.0)), "Qty: 12");
    assert_eq!(quantity_label(None), "Qty: N/A");
}
