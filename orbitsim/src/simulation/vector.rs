//! 2D vector helpers for the engine
//!
//! Vectors are nalgebra `Vector2<f64>`. The free functions below are the only
//! vector operations the physics modules rely on, so their edge-case behavior
//! (zero-length normalization) is pinned down in one place.

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

/// Vector from `b` to `a` (`a - b`)
pub fn subtract(a: &NVec2, b: &NVec2) -> NVec2 {
    a - b
}

/// Euclidean distance between two points
pub fn distance(a: &NVec2, b: &NVec2) -> f64 {
    subtract(b, a).norm()
}

pub fn scale(v: &NVec2, k: f64) -> NVec2 {
    v * k
}

pub fn magnitude(v: &NVec2) -> f64 {
    v.norm()
}

/// Unit vector along `v`
///
/// Returns the zero vector when `v` has zero (or non-finite) length instead of
/// dividing by it, so callers never see NaN from a degenerate direction.
pub fn normalize(v: &NVec2) -> NVec2 {
    let len = magnitude(v);
    if len > 0.0 && len.is_finite() {
        v / len
    } else {
        NVec2::zeros()
    }
}

/// True when both components are finite
pub fn is_finite(v: &NVec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}
