use gpui_plot::data_types::AxisRange;

#[test]
fn test_axis_range_span() {
    let range = AxisRange::new(100.0, 200.0);
    assert_eq!(range.span(), 100.0);
}

#[test]
fn test_axis_range_fit_adds_margin() {
    let mut range = AxisRange::new(0.0, 1.0);
    // Span is 100.0, 5% margin on each side.
    // New range should be [95.0, 205.0]
    range.fit(100.0, 200.0, 0.05);
    assert_eq!(range.min, 95.0);
    assert_eq!(range.max, 205.0);
}

#[test]
fn test_axis_range_fit_degenerate_span() {
    let mut range = AxisRange::new(0.0, 1.0);
    // All samples share one value; fall back to a unit window around it.
    range.fit(42.0, 42.0, 0.05);
    assert_eq!(range.min, 41.5);
    assert_eq!(range.max, 42.5);
}
