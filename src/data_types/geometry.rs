use gpui::{Pixels, Point};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle stored as two independent corner points.
///
/// Unlike `gpui::Bounds` the corners are never reordered: while a drag is in
/// progress the moving corner can cross the anchored one and the rectangle
/// inverts (`top_left.x > bottom_right.x`). Consumers see the corners exactly
/// as the gesture produced them; only painting code normalizes, via
/// [`BoxBounds::normalized`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxBounds {
    pub top_left: Point<Pixels>,
    pub bottom_right: Point<Pixels>,
}

impl BoxBounds {
    pub fn new(top_left: Point<Pixels>, bottom_right: Point<Pixels>) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Zero-area rectangle with both corners at `p`.
    pub fn degenerate(p: Point<Pixels>) -> Self {
        Self {
            top_left: p,
            bottom_right: p,
        }
    }

    /// Containment test, inclusive on all four edges.
    pub fn contains(&self, p: Point<Pixels>) -> bool {
        self.top_left.x <= p.x
            && p.x <= self.bottom_right.x
            && self.top_left.y <= p.y
            && p.y <= self.bottom_right.y
    }

    /// Signed width; negative when the rectangle is inverted on X.
    pub fn width(&self) -> Pixels {
        self.bottom_right.x - self.top_left.x
    }

    /// Signed height; negative when the rectangle is inverted on Y.
    pub fn height(&self) -> Pixels {
        self.bottom_right.y - self.top_left.y
    }

    pub fn translated(&self, dx: Pixels, dy: Pixels) -> Self {
        Self {
            top_left: Point::new(self.top_left.x + dx, self.top_left.y + dy),
            bottom_right: Point::new(self.bottom_right.x + dx, self.bottom_right.y + dy),
        }
    }

    /// Corner-sorted copy for painting. Gesture state stays un-normalized.
    pub fn normalized(&self) -> Self {
        Self {
            top_left: Point::new(
                self.top_left.x.min(self.bottom_right.x),
                self.top_left.y.min(self.bottom_right.y),
            ),
            bottom_right: Point::new(
                self.top_left.x.max(self.bottom_right.x),
                self.top_left.y.max(self.bottom_right.y),
            ),
        }
    }
}

/// Which axes a resize gesture may act on.
///
/// One-dimensional range selectors (an X band picker for instance) restrict
/// resizing to a single axis; the perpendicular edges then never register in
/// the hit-test and the corner affordances disappear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisMask {
    None,
    X,
    Y,
    #[default]
    Both,
}

impl AxisMask {
    pub fn allows_x(&self) -> bool {
        matches!(self, Self::X | Self::Both)
    }

    pub fn allows_y(&self) -> bool {
        matches!(self, Self::Y | Self::Both)
    }
}

/// Edges grabbed at the start of a resize. A corner grab sets both adjacent
/// flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeEdges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl ResizeEdges {
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

/// Edge hit-test for a grab at `p` against `bounds`.
///
/// An edge registers when `p` lies within `radius` of the edge line and
/// within the rectangle's span on the perpendicular axis, extended by
/// `radius` at both ends so corners stay reachable from just outside the
/// rectangle. All comparisons are inclusive; with `radius` zero only points
/// exactly on an edge register.
pub fn resizing_edges(
    bounds: BoxBounds,
    p: Point<Pixels>,
    radius: Pixels,
    mask: AxisMask,
) -> ResizeEdges {
    let mut edges = ResizeEdges::default();

    let top = bounds.top_left.y;
    let bottom = bounds.bottom_right.y;
    let left = bounds.top_left.x;
    let right = bounds.bottom_right.x;

    if mask.allows_y() && left - radius <= p.x && p.x <= right + radius {
        edges.top = top - radius <= p.y && p.y <= top + radius;
        edges.bottom = bottom - radius <= p.y && p.y <= bottom + radius;
    }

    if mask.allows_x() && top - radius <= p.y && p.y <= bottom + radius {
        edges.left = left - radius <= p.x && p.x <= left + radius;
        edges.right = right - radius <= p.x && p.x <= right + radius;
    }

    edges
}
