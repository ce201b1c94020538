/*
 * Vector Module
 *
 * Steering helpers on top of glam's Vec2. The plain arithmetic (add, subtract,
 * scale, magnitude) comes straight from glam; this module adds the guarded
 * operations the flocking rules rely on:
 * - normalization that yields the zero vector instead of NaN
 * - clamping to a maximum magnitude
 * - the heading angle convention used for rendering
 */

use glam::Vec2;
use std::f32::consts::TAU;

/// Reference axis that headings are measured from.
pub const HEADING_AXIS: Vec2 = Vec2::X;

pub trait SteeringExt {
    /// Unit vector in the same direction, or the zero vector when the
    /// magnitude is zero.
    fn unit_or_zero(self) -> Vec2;

    /// Scales the vector down to exactly `max` if it is longer, otherwise
    /// returns it unchanged.
    fn clamp_magnitude(self, max: f32) -> Vec2;
}

impl SteeringExt for Vec2 {
    #[inline]
    fn unit_or_zero(self) -> Vec2 {
        let length = self.length();
        if length > 0.0 {
            self / length
        } else {
            Vec2::ZERO
        }
    }

    #[inline]
    fn clamp_magnitude(self, max: f32) -> Vec2 {
        let length = self.length();
        if length > max {
            self * (max / length)
        } else {
            self
        }
    }
}

/// Angle from `a` to `b` in `[0, 2π)`.
///
/// This is a heading convention, not a general angle function: the unsigned
/// angle from `acos` is mirrored to `2π - angle` whenever `b.y < 0`, so the
/// result increases clockwise on a y-down field. The result depends on the
/// sign of `b` only, which makes it asymmetric in its arguments.
///
/// Returns `None` when either vector has zero magnitude.
pub fn angle_between(a: Vec2, b: Vec2) -> Option<f32> {
    let denominator = a.length() * b.length();
    if denominator == 0.0 {
        return None;
    }

    // Rounding can push the ratio just outside acos' domain
    let cos = (a.dot(b) / denominator).clamp(-1.0, 1.0);
    let mut angle = cos.acos();
    if b.y < 0.0 {
        angle = TAU - angle;
    }

    // 2π - 0 for a vector pointing along the axis with a tiny negative y
    if angle >= TAU {
        angle -= TAU;
    }

    Some(angle)
}

/// Heading of a velocity relative to [`HEADING_AXIS`].
#[inline]
pub fn heading_of(velocity: Vec2) -> Option<f32> {
    angle_between(HEADING_AXIS, velocity)
}

/// Modulo that stays in `[0, m)` for negative operands.
#[inline]
pub fn wrap(n: f32, m: f32) -> f32 {
    let wrapped = ((n % m) + m) % m;
    // (-tiny % m) + m rounds to m itself
    if wrapped >= m {
        0.0
    } else {
        wrapped
    }
}
