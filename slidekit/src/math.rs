//! `f32` helpers that work without `std` (no libm).

pub(crate) fn abs(x: f32) -> f32 {
    if x < 0.0 { -x } else { x }
}

pub(crate) fn is_valid_extent(x: f32) -> bool {
    x.is_finite() && x >= 0.0
}
