use gpui::{px, Bounds, Point, Size};
use gpui_plot::data_types::{PlotDataSource, VecDataSource};
use gpui_plot::scales::ChartScale;
use gpui_plot::{LinePlot, PlotPoint, PlotTransform};

fn pt(x: f64, y: f64) -> PlotPoint {
    PlotPoint::new(x, y)
}

/// 100x100 frame at the window origin.
fn transform(x_domain: (f64, f64), y_domain: (f64, f64)) -> PlotTransform {
    let bounds = Bounds::new(
        Point::new(px(0.0), px(0.0)),
        Size::new(px(100.0), px(100.0)),
    );
    PlotTransform::new(
        ChartScale::new_linear(x_domain, (0.0, 100.0)),
        ChartScale::new_linear(y_domain, (100.0, 0.0)),
        bounds,
    )
}

#[test]
fn test_contiguous_data_is_one_segment() {
    let plot = LinePlot::new(vec![pt(0.0, 0.2), pt(1.0, 0.4), pt(2.0, 0.5), pt(3.0, 0.6)]);
    let segments = plot.segments();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].len(), 4);
}

#[test]
fn test_nan_y_splits_the_line() {
    let plot = LinePlot::new(vec![
        pt(0.0, 0.2),
        pt(1.0, 0.4),
        pt(2.0, f64::NAN),
        pt(3.0, 0.5),
        pt(4.0, 0.6),
    ]);
    let segments = plot.segments();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0], vec![pt(0.0, 0.2), pt(1.0, 0.4)]);
    assert_eq!(segments[1], vec![pt(3.0, 0.5), pt(4.0, 0.6)]);
}

#[test]
fn test_nan_x_splits_the_line_too() {
    let plot = LinePlot::new(vec![
        pt(0.0, 0.2),
        pt(1.0, 0.4),
        pt(f64::NAN, 0.5),
        pt(3.0, 0.5),
        pt(4.0, 0.6),
    ]);
    assert_eq!(plot.segments().len(), 2);
}

#[test]
fn test_leading_and_trailing_gaps_produce_no_empty_segments() {
    let plot = LinePlot::new(vec![
        pt(f64::NAN, f64::NAN),
        pt(1.0, 0.4),
        pt(2.0, 0.5),
        pt(f64::NAN, f64::NAN),
    ]);
    let segments = plot.segments();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].len(), 2);
}

#[test]
fn test_all_gap_data_yields_nothing() {
    let plot = LinePlot::new(vec![pt(f64::NAN, 1.0), pt(2.0, f64::NAN)]);
    assert!(plot.segments().is_empty());
    assert!(plot.entities(&transform((0.0, 4.0), (0.0, 1.0))).is_empty());
    assert_eq!(
        plot.entity_nearest(&transform((0.0, 4.0), (0.0, 1.0)), Point::new(px(50.0), px(50.0))),
        None
    );
}

#[test]
fn test_entities_skip_gap_samples_but_keep_indices() {
    let plot = LinePlot::new(vec![
        pt(0.0, 0.2),
        pt(1.0, 0.4),
        pt(2.0, f64::NAN),
        pt(3.0, 0.5),
        pt(4.0, 0.6),
    ]);
    let entities = plot.entities(&transform((0.0, 4.0), (0.0, 1.0)));

    assert_eq!(entities.len(), 4);
    let indices: Vec<usize> = entities.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 1, 3, 4]);

    // Positions are projected through the transform.
    assert_eq!(entities[0].position, Point::new(px(0.0), px(80.0)));
    assert_eq!(entities[3].position, Point::new(px(100.0), px(40.0)));
}

#[test]
fn test_entity_nearest_picks_smallest_pixel_distance() {
    let plot = LinePlot::new(vec![
        pt(0.0, 0.0),
        pt(1.0, 1.0),
        pt(2.0, 2.0),
        pt(3.0, 3.0),
        pt(4.0, 4.0),
    ]);
    let t = transform((0.0, 4.0), (0.0, 4.0));

    // (1,1) projects to (25,75); the target sits 5px away from it.
    let nearest = plot.entity_nearest(&t, Point::new(px(30.0), px(70.0)));
    assert_eq!(nearest.map(|e| e.datum), Some(pt(1.0, 1.0)));
}

#[test]
fn test_entity_nearest_ignores_points_outside_the_domain() {
    let plot = LinePlot::new(vec![pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0)]);
    // Shrink the X domain so the first sample is out of view.
    let t = transform((1.0, 4.0), (0.0, 4.0));

    // Query right where the excluded sample would project.
    let target = t.data_to_screen(Point::new(0.0, 0.0));
    let nearest = plot.entity_nearest(&t, target);
    assert_eq!(nearest.map(|e| e.datum), Some(pt(1.0, 1.0)));
}

#[test]
fn test_entity_nearest_tie_keeps_the_earlier_sample() {
    let plot = LinePlot::new(vec![pt(0.0, 0.0), pt(2.0, 0.0)]);
    let t = transform((0.0, 2.0), (0.0, 1.0));

    // Dead center between the two projected positions.
    let nearest = plot.entity_nearest(&t, Point::new(px(50.0), px(100.0)));
    assert_eq!(nearest.map(|e| e.index), Some(0));
}

#[test]
fn test_entity_nearest_on_empty_plot_is_none() {
    let plot = LinePlot::new(vec![]);
    let t = transform((0.0, 1.0), (0.0, 1.0));
    assert_eq!(plot.entity_nearest(&t, Point::new(px(0.0), px(0.0))), None);
}

#[test]
fn test_source_bounds_skip_gap_samples() {
    let source = VecDataSource::new(vec![
        pt(0.0, 5.0),
        pt(1.0, f64::NAN),
        pt(2.0, -3.0),
        pt(f64::NAN, 100.0),
    ]);
    assert_eq!(source.get_bounds(), Some((0.0, 2.0, -3.0, 5.0)));
}

#[test]
fn test_source_bounds_none_without_finite_data() {
    let source = VecDataSource::new(vec![pt(f64::NAN, 1.0)]);
    assert_eq!(source.get_bounds(), None);
    assert_eq!(VecDataSource::new(vec![]).get_bounds(), None);
}

#[test]
fn test_source_y_range_respects_the_window() {
    let source = VecDataSource::new(vec![
        pt(0.0, 1.0),
        pt(1.0, 10.0),
        pt(2.0, -5.0),
        pt(3.0, 7.0),
    ]);
    assert_eq!(source.get_y_range(1.0, 2.0), Some((-5.0, 10.0)));
    assert_eq!(source.get_y_range(10.0, 20.0), None);
}

#[test]
fn test_source_mutation() {
    let mut source = VecDataSource::new(vec![]);
    assert!(source.is_empty());

    source.add_data(pt(1.0, 2.0));
    source.add_data(pt(2.0, 3.0));
    assert_eq!(source.len(), 2);

    source.set_data(vec![pt(9.0, 9.0)]);
    assert_eq!(source.points(), &[pt(9.0, 9.0)]);
}
