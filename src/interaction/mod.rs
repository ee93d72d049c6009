use serde::{Deserialize, Serialize};

use crate::core::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureKind {
    Pan,
    Zoom,
    Tap,
}

/// Platform-neutral gesture, already translated from pointer/touch input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub kind: GestureKind,
    pub position: Point,
    /// Pan offset in pixels, or the zoom factor change on both axes.
    pub delta: Point,
}

impl GestureEvent {
    #[must_use]
    pub const fn pan(position: Point, delta: Point) -> Self {
        Self {
            kind: GestureKind::Pan,
            position,
            delta,
        }
    }

    #[must_use]
    pub const fn zoom(focus: Point, scale_delta: f64) -> Self {
        Self {
            kind: GestureKind::Zoom,
            position: focus,
            delta: Point::new(scale_delta, scale_delta),
        }
    }

    #[must_use]
    pub const fn tap(position: Point) -> Self {
        Self {
            kind: GestureKind::Tap,
            position,
            delta: Point::new(0.0, 0.0),
        }
    }
}

/// What the caller must do after a gesture was offered to an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureResponse {
    /// The engine did not act on the gesture.
    Ignored,
    /// The gesture was consumed; cached geometry is still valid.
    Handled,
    /// Engine state changed; call `layout()` before the next `draw()`.
    RelayoutRequested,
}

impl GestureResponse {
    #[must_use]
    pub fn needs_layout(self) -> bool {
        self == Self::RelayoutRequested
    }
}
