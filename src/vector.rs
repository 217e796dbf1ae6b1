/*
 * Vector Math Module
 *
 * Scalar helpers over nannou's `Vec2` used by the steering code.
 * The zero-length cases are handled with explicit guards that fall back to
 * the input vector, so no helper here ever produces NaN or infinity.
 */

use nannou::prelude::*;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Euclidean norm of `v`.
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    distance(Vec2::ZERO, v)
}

/// Unit vector pointing the same way as `v`.
///
/// Returns `v` untouched when its magnitude is exactly zero, so callers must
/// not assume the result has unit length.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let len = magnitude(v);
    if len > 0.0 {
        v / len
    } else {
        v
    }
}

/// Rescale `v` to exactly `max` when it is longer than `max`.
#[inline]
pub fn clamp_magnitude(v: Vec2, max: f32) -> Vec2 {
    let mag = magnitude(v);
    if mag > max && mag > 0.0 {
        (v / mag) * max
    } else {
        v
    }
}
