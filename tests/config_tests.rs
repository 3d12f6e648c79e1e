use gpui::{px, Point};
use gpui_plot::data_types::{AxisMask, BoxBounds, DragBoxConfig};

#[test]
fn test_default_config() {
    let config = DragBoxConfig::default();
    assert!(!config.resizable);
    assert!(!config.movable);
    assert_eq!(config.detection_radius, px(3.0));
    assert_eq!(config.resize_axes, AxisMask::Both);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = DragBoxConfig {
        resizable: true,
        movable: true,
        detection_radius: px(6.0),
        resize_axes: AxisMask::X,
    };
    let json = serde_json::to_string(&config).unwrap();
    let restored: DragBoxConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, config);
}

#[test]
fn test_saved_selection_keeps_inverted_corners() {
    let bounds = BoxBounds::new(
        Point::new(px(50.0), px(50.0)),
        Point::new(px(10.0), px(10.0)),
    );
    let json = serde_json::to_string(&bounds).unwrap();
    let restored: BoxBounds = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, bounds);
    assert_eq!(restored.width(), px(-40.0));
}
