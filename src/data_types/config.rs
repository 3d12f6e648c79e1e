use gpui::{px, Hsla, Pixels};
use serde::{Deserialize, Serialize};

use super::geometry::AxisMask;

/// Interaction settings for the drag-box selection layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragBoxConfig {
    /// Whether edge and corner grabs resize an existing box.
    pub resizable: bool,
    /// Whether grabbing the interior translates an existing box.
    pub movable: bool,
    /// Half-width of the band around each edge that registers a resize grab.
    pub detection_radius: Pixels,
    /// Axes a resize may act on; ignored while `resizable` is off.
    pub resize_axes: AxisMask,
}

impl Default for DragBoxConfig {
    fn default() -> Self {
        Self {
            resizable: false,
            movable: false,
            detection_radius: px(3.0),
            resize_axes: AxisMask::Both,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinePlotConfig {
    pub color: Hsla,
    pub line_width: f32,
}

impl Default for LinePlotConfig {
    fn default() -> Self {
        Self {
            color: gpui::blue(),
            line_width: 2.0,
        }
    }
}
