use gpui::{px, MouseButton, Point, TestAppContext};
use gpui_plot::data_types::BoxBounds;
use gpui_plot::ChartView;
use std::cell::RefCell;
use std::rc::Rc;

#[gpui::test]
fn test_basic_chart_view(cx: &mut TestAppContext) {
    let window = cx.add_window(|_window, cx| ChartView::new(cx));

    // The selection layer starts enabled but with no box showing.
    window
        .update(cx, |view, _window, cx| {
            let layer = view.drag_box.read(cx);
            assert!(layer.enabled());
            assert!(!layer.box_visible());
            assert!(!layer.resizable());
            assert!(!layer.movable());
            assert_eq!(layer.detection_radius(), px(3.0));
        })
        .unwrap();
}

#[gpui::test]
fn test_drag_creates_selection_box(cx: &mut TestAppContext) {
    let window = cx.add_window(|_window, cx| ChartView::new(cx));

    // Force a render to populate the container bounds
    cx.run_until_parked();

    let drag_box = window
        .update(cx, |view, _window, _cx| view.drag_box.clone())
        .unwrap();

    let mut visual_cx = gpui::VisualTestContext::from_window(window.into(), cx);

    visual_cx.simulate_mouse_down(
        Point::new(px(100.0), px(100.0)),
        MouseButton::Left,
        Default::default(),
    );
    visual_cx.simulate_mouse_move(
        Point::new(px(260.0), px(200.0)),
        Some(MouseButton::Left),
        Default::default(),
    );

    drag_box.read_with(&visual_cx, |layer, _| {
        assert!(layer.box_visible());
        assert_eq!(
            layer.bounds(),
            BoxBounds::new(
                Point::new(px(100.0), px(100.0)),
                Point::new(px(260.0), px(200.0)),
            )
        );
    });

    // A move without the button pressed stands in for the release.
    visual_cx.simulate_mouse_move(
        Point::new(px(260.0), px(200.0)),
        None,
        Default::default(),
    );

    drag_box.read_with(&visual_cx, |layer, _| {
        assert!(layer.box_visible(), "the box should survive the release");
        assert_eq!(layer.active_mode(), None);
    });
}

#[gpui::test]
fn test_click_dismisses_fresh_box(cx: &mut TestAppContext) {
    let window = cx.add_window(|_window, cx| ChartView::new(cx));
    cx.run_until_parked();

    let drag_box = window
        .update(cx, |view, _window, _cx| view.drag_box.clone())
        .unwrap();

    let mut visual_cx = gpui::VisualTestContext::from_window(window.into(), cx);

    let spot = Point::new(px(150.0), px(120.0));
    visual_cx.simulate_mouse_down(spot, MouseButton::Left, Default::default());
    visual_cx.simulate_mouse_move(spot, None, Default::default());

    drag_box.read_with(&visual_cx, |layer, _| {
        assert!(!layer.box_visible(), "a click without movement draws nothing");
    });
}

#[gpui::test]
fn test_move_drag_translates_the_box(cx: &mut TestAppContext) {
    let window = cx.add_window(|_window, cx| ChartView::new(cx));
    cx.run_until_parked();

    window
        .update(cx, |view, _window, cx| view.set_movable(true, cx))
        .unwrap();
    let drag_box = window
        .update(cx, |view, _window, _cx| view.drag_box.clone())
        .unwrap();

    let mut visual_cx = gpui::VisualTestContext::from_window(window.into(), cx);

    // First drag lays down the box.
    visual_cx.simulate_mouse_down(
        Point::new(px(100.0), px(100.0)),
        MouseButton::Left,
        Default::default(),
    );
    visual_cx.simulate_mouse_move(
        Point::new(px(200.0), px(180.0)),
        Some(MouseButton::Left),
        Default::default(),
    );
    visual_cx.simulate_mouse_move(Point::new(px(200.0), px(180.0)), None, Default::default());

    // Second drag grabs the interior and moves it by (30, 20).
    visual_cx.simulate_mouse_down(
        Point::new(px(150.0), px(140.0)),
        MouseButton::Left,
        Default::default(),
    );
    visual_cx.simulate_mouse_move(
        Point::new(px(180.0), px(160.0)),
        Some(MouseButton::Left),
        Default::default(),
    );
    visual_cx.simulate_mouse_move(Point::new(px(180.0), px(160.0)), None, Default::default());

    drag_box.read_with(&visual_cx, |layer, _| {
        assert_eq!(
            layer.bounds(),
            BoxBounds::new(
                Point::new(px(130.0), px(120.0)),
                Point::new(px(230.0), px(200.0)),
            )
        );
    });
}

#[gpui::test]
fn test_edge_drag_resizes_the_box(cx: &mut TestAppContext) {
    let window = cx.add_window(|_window, cx| ChartView::new(cx));
    cx.run_until_parked();

    window
        .update(cx, |view, _window, cx| view.set_resizable(true, cx))
        .unwrap();
    let drag_box = window
        .update(cx, |view, _window, _cx| view.drag_box.clone())
        .unwrap();

    let mut visual_cx = gpui::VisualTestContext::from_window(window.into(), cx);

    visual_cx.simulate_mouse_down(
        Point::new(px(100.0), px(100.0)),
        MouseButton::Left,
        Default::default(),
    );
    visual_cx.simulate_mouse_move(
        Point::new(px(200.0), px(180.0)),
        Some(MouseButton::Left),
        Default::default(),
    );
    visual_cx.simulate_mouse_move(Point::new(px(200.0), px(180.0)), None, Default::default());

    // Grab the right edge and pull it out.
    visual_cx.simulate_mouse_down(
        Point::new(px(200.0), px(140.0)),
        MouseButton::Left,
        Default::default(),
    );
    visual_cx.simulate_mouse_move(
        Point::new(px(260.0), px(140.0)),
        Some(MouseButton::Left),
        Default::default(),
    );
    visual_cx.simulate_mouse_move(Point::new(px(260.0), px(140.0)), None, Default::default());

    drag_box.read_with(&visual_cx, |layer, _| {
        assert_eq!(
            layer.bounds(),
            BoxBounds::new(
                Point::new(px(100.0), px(100.0)),
                Point::new(px(260.0), px(180.0)),
            )
        );
    });
}

#[gpui::test]
fn test_end_listener_fires_from_window_events(cx: &mut TestAppContext) {
    let window = cx.add_window(|_window, cx| ChartView::new(cx));
    cx.run_until_parked();

    let ends: Rc<RefCell<Vec<BoxBounds>>> = Rc::default();
    window
        .update(cx, |view, _window, cx| {
            let ends = ends.clone();
            view.drag_box.update(cx, |layer, _| {
                layer.on_drag_end(Rc::new(move |b| ends.borrow_mut().push(*b)));
            });
        })
        .unwrap();

    let mut visual_cx = gpui::VisualTestContext::from_window(window.into(), cx);

    visual_cx.simulate_mouse_down(
        Point::new(px(100.0), px(100.0)),
        MouseButton::Left,
        Default::default(),
    );
    visual_cx.simulate_mouse_move(
        Point::new(px(180.0), px(150.0)),
        Some(MouseButton::Left),
        Default::default(),
    );
    visual_cx.simulate_mouse_move(Point::new(px(180.0), px(150.0)), None, Default::default());

    let ends = ends.borrow();
    assert_eq!(ends.len(), 1);
    assert_eq!(
        ends[0],
        BoxBounds::new(
            Point::new(px(100.0), px(100.0)),
            Point::new(px(180.0), px(150.0)),
        )
    );
}

#[gpui::test]
fn test_detection_radius_setter(cx: &mut TestAppContext) {
    let window = cx.add_window(|_window, cx| ChartView::new(cx));

    window
        .update(cx, |view, _window, cx| {
            assert!(view.set_detection_radius(px(5.0), cx).is_ok());

            let err = view
                .set_detection_radius(px(-1.0), cx)
                .err()
                .map(|e| e.to_string());
            assert_eq!(err.as_deref(), Some("detection radius cannot be negative"));

            // The rejected value leaves the radius untouched.
            assert_eq!(view.drag_box.read(cx).detection_radius(), px(5.0));
        })
        .unwrap();
}
