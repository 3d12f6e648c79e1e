//! Pointer-gesture plumbing shared by interactive layers.
//!
//! [`DragGesture`] serializes the raw mouse stream into well-formed drag
//! phases independently of the GPUI infrastructure, which keeps the gesture
//! rules unit-testable without a window.

use gpui::{Bounds, Pixels, Point};

/// One phase of a drag, in component-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GesturePhase {
    Start { point: Point<Pixels> },
    Moved { start: Point<Pixels>, current: Point<Pixels> },
    End { start: Point<Pixels>, end: Point<Pixels> },
}

/// Translates presses, moves and releases into drag phases.
///
/// A gesture begins with a press inside the container and ends with the
/// matching release. Once started, moves keep tracking even after the
/// pointer leaves the container, so a gesture never loses its end. While
/// disabled no phases are produced, and disabling mid-gesture abandons the
/// gesture without emitting an end.
#[derive(Clone, Copy, Debug)]
pub struct DragGesture {
    enabled: bool,
    origin: Option<Point<Pixels>>,
}

impl DragGesture {
    pub fn new() -> Self {
        Self {
            enabled: true,
            origin: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.origin = None;
        }
    }

    /// Whether a gesture is currently in flight.
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    pub fn pointer_down(
        &mut self,
        position: Point<Pixels>,
        container: Bounds<Pixels>,
    ) -> Option<GesturePhase> {
        if !self.enabled || self.origin.is_some() || !container.contains(&position) {
            return None;
        }
        let local = position - container.origin;
        self.origin = Some(local);
        Some(GesturePhase::Start { point: local })
    }

    pub fn pointer_move(
        &mut self,
        position: Point<Pixels>,
        container: Bounds<Pixels>,
    ) -> Option<GesturePhase> {
        let start = self.origin?;
        Some(GesturePhase::Moved {
            start,
            current: position - container.origin,
        })
    }

    pub fn pointer_up(
        &mut self,
        position: Point<Pixels>,
        container: Bounds<Pixels>,
    ) -> Option<GesturePhase> {
        let start = self.origin.take()?;
        Some(GesturePhase::End {
            start,
            end: position - container.origin,
        })
    }
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new()
    }
}
