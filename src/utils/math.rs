use glam::Vec2;
use std::f64::consts::TAU;

/// Point at `distance` from `center` along `angle` (radians, screen coordinates).
#[inline]
pub fn polar_offset(center: Vec2, distance: f64, angle: f64) -> Vec2 {
    center + Vec2::new((distance * angle.cos()) as f32, (distance * angle.sin()) as f32)
}

/// Wrap an angle into `[0, 2π)`.
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Clamp `value` into the closed interval described by `range`.
#[inline]
pub fn clamp_to(value: f64, range: [f64; 2]) -> f64 {
    value.clamp(range[0], range[1])
}
