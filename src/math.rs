/*
 * Math Module
 *
 * Small 2D vector and angle helpers used by the flocking core.
 * Everything here is a pure function over nannou's `Vec2`.
 *
 * Conventions:
 * - `normalize` of a zero (or degenerate) vector is the zero vector, so
 *   stationary agents never inject NaN into the force sums
 * - angles are in radians unless the name says otherwise
 */

use nannou::prelude::*;
use rand::Rng;

#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

#[inline]
pub fn sub(a: Vec2, b: Vec2) -> Vec2 {
    a - b
}

#[inline]
pub fn scale(v: Vec2, s: f32) -> Vec2 {
    v * s
}

#[inline]
pub fn divide(v: Vec2, s: f32) -> Vec2 {
    v / s
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.dot(b)
}

#[inline]
pub fn length(v: Vec2) -> f32 {
    v.length()
}

/// Unit vector in the direction of `v`, or `Vec2::ZERO` when `v` has no usable length.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

#[inline]
pub fn squared_distance(a: Vec2, b: Vec2) -> f32 {
    // Sum of squares, never negative
    a.distance_squared(b)
}

/// Rotate `point` counter-clockwise about `pivot` by `angle` radians.
pub fn rotate_around(point: Vec2, pivot: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let local = point - pivot;
    vec2(
        local.x * cos - local.y * sin,
        local.x * sin + local.y * cos,
    ) + pivot
}

/// Heading of `v` measured from the +x axis. The zero vector has heading 0.
#[inline]
pub fn heading_of(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

// Vector with both components drawn uniformly from [-1, 1]
pub fn random_unit_square<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    vec2(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0))
}
