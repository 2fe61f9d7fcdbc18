//! Pixel membership predicates and clipping helpers.
//!
//! Arithmetic is widened (`i64`, `i128` for cross products) so any `i32` coordinate is safe.

use crate::foundation::core::{Canvas, Point};

/// `(x - cx)^2 + (y - cy)^2 <= r^2`.
pub fn circle_contains(center: Point, radius: i32, p: Point) -> bool {
    let dx = i64::from(p.x) - i64::from(center.x);
    let dy = i64::from(p.y) - i64::from(center.y);
    let r = i64::from(radius);
    dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy)) <= r * r
}

/// `x in [left, left + width)` and `y in [top, top + height)`.
pub fn rect_contains(top_left: Point, width: i32, height: i32, p: Point) -> bool {
    let (x, y) = (i64::from(p.x), i64::from(p.y));
    let (left, top) = (i64::from(top_left.x), i64::from(top_left.y));
    x >= left && x < left + i64::from(width) && y >= top && y < top + i64::from(height)
}

/// Same-side test against each edge of triangle `abc`.
///
/// Each edge test asks whether a cross product is strictly positive, so points on an edge are
/// inside for some edges and outside for others depending on winding. Zero-area triangles contain
/// no pixels.
pub fn triangle_contains(a: Point, b: Point, c: Point, p: Point) -> bool {
    if edge(a, b, c) == 0 {
        return false;
    }
    let s_ab = edge(a, b, p) > 0;
    (edge(a, c, p) > 0) != s_ab && (edge(b, c, p) > 0) == s_ab
}

/// Cross product of `b - a` and `p - a`.
fn edge(a: Point, b: Point, p: Point) -> i128 {
    let (ax, ay) = (i128::from(a.x), i128::from(a.y));
    let (bx, by) = (i128::from(b.x), i128::from(b.y));
    (bx - ax) * (i128::from(p.y) - ay) - (by - ay) * (i128::from(p.x) - ax)
}

/// Half-open pixel window `[x0, x1) x [y0, y1)` already clipped to a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelWindow {
    /// Inclusive left column.
    pub x0: u32,
    /// Inclusive top row.
    pub y0: u32,
    /// Exclusive right column.
    pub x1: u32,
    /// Exclusive bottom row.
    pub y1: u32,
}

impl PixelWindow {
    /// Clip the inclusive box `[min_x, max_x] x [min_y, max_y]` to `canvas`.
    ///
    /// Returns `None` when nothing of the box is visible.
    pub fn clip(canvas: Canvas, min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Option<Self> {
        let x0 = min_x.max(0);
        let y0 = min_y.max(0);
        let x1 = max_x.saturating_add(1).min(i64::from(canvas.width));
        let y1 = max_y.saturating_add(1).min(i64::from(canvas.height));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(Self {
            x0: x0 as u32,
            y0: y0 as u32,
            x1: x1 as u32,
            y1: y1 as u32,
        })
    }

    /// Iterate every pixel of the window in row-major order.
    pub fn points(self) -> impl Iterator<Item = Point> {
        (self.y0..self.y1)
            .flat_map(move |y| (self.x0..self.x1).map(move |x| Point::new(x as i32, y as i32)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geom.rs"]
mod tests;
