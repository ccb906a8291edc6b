//! Curve helpers for drawing blades.

use glam::Vec2;

/// Converts a uniform Catmull-Rom segment into cubic Bézier control points.
///
/// The segment runs from `p[1]` to `p[2]`; `p[0]` and `p[3]` only shape
/// the tangents at either end. The returned points are
/// `[start, control1, control2, end]`.
pub fn catmull_rom_to_bezier(p: [Vec2; 4]) -> [Vec2; 4] {
    [
        p[1],
        p[1] + (p[2] - p[0]) / 6.0,
        p[2] - (p[3] - p[1]) / 6.0,
        p[2],
    ]
}

/// Returns `count` points linearly interpolated from `a` towards `b`,
/// starting at `a` and stopping one step short of `b`.
pub fn lerp_samples(a: Vec2, b: Vec2, count: usize) -> impl Iterator<Item = Vec2> {
    (0..count).map(move |i| a.lerp(b, i as f32 / count as f32))
}
