use crate::foundation::core::{Canvas, Rect};
use serde::{Deserialize, Serialize};

/// Axis-aligned clip rectangle in canvas space.
///
/// Canvas space has its origin at the canvas center with the y axis pointing
/// up; `(x, y)` is the rectangle's top-left corner. Zero-area rectangles are
/// legal and clip everything out.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width, never negative after [`to_canvas_space`].
    pub w: f64,
    /// Height, never negative after [`to_canvas_space`].
    pub h: f64,
}

impl ClipRect {
    /// Convert to a min/max-corner [`Rect`], still in canvas space.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y - self.h, self.x + self.w, self.y)
    }

    /// Return `true` when the rectangle has zero area.
    pub fn is_degenerate(self) -> bool {
        self.w == 0.0 || self.h == 0.0
    }
}

/// Convert a layout-space position and size into a canvas-space [`ClipRect`].
///
/// Layout space places the origin at the canvas top-left with y increasing
/// downward; canvas space is centered at the canvas midpoint with y
/// increasing upward. The mapping is a translation plus a vertical flip. Any
/// rotation or skew the scene carries is deliberately ignored: clipping is
/// axis-aligned only.
///
/// Negative or NaN extents clamp to zero (a zero-area clip) so the transform
/// stays total; positions pass through unchanged. No side effects.
pub fn to_canvas_space(x: f64, y: f64, width: f64, height: f64, canvas: Canvas) -> ClipRect {
    ClipRect {
        x: x - f64::from(canvas.width) / 2.0,
        y: f64::from(canvas.height) / 2.0 - y,
        w: clamp_extent(width),
        h: clamp_extent(height),
    }
}

fn clamp_extent(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
