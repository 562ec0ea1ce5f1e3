//! 2D polar coordinates.

use core::fmt::{self, Display};
use core::ops::{Add, Div, Mul, Rem, Sub};

use crate::angle::Angle;
use crate::vector::{vec2, vec3, Vec2, Vec3};

/// Representation of a 2D polar coordinate: a radial length and an angle.
///
/// Polar coordinates do not map one-to-one onto Cartesian points, so be wary of using the
/// arithmetic operators without first normalizing through the view methods: the operators act on
/// the raw components and never wrap.
///
/// ```rust
/// use gonio_core::{Angle, Polar2};
///
/// let p = Polar2::new(-1.0, Angle::RIGHT);
/// assert_eq!(p.positive(), Polar2::new(1.0, Angle::from_degrees(270.0)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polar2 {
    /// The magnitude, radius, or radial distance of the coordinate. Sign is not normalized by
    /// construction; see [`Polar2::positive`].
    pub length: f64,
    /// Angular component of the coordinate.
    pub angle: Angle,
}

impl Polar2 {
    /// The zero coordinate.
    pub const ZERO: Self = Self::new(0.0, Angle::ZERO);
    /// All components positive infinity.
    pub const POSITIVE_INFINITY: Self =
        Self::new(f64::INFINITY, Angle::from_degrees(f64::INFINITY));
    /// All components negative infinity.
    pub const NEGATIVE_INFINITY: Self =
        Self::new(f64::NEG_INFINITY, Angle::from_degrees(f64::NEG_INFINITY));

    /// Creates a polar coordinate from a length and an angle.
    #[inline]
    pub const fn new(length: f64, angle: Angle) -> Self {
        Self { length, angle }
    }

    /// If the length is negative, returns an effectively equivalent coordinate with the length
    /// in `[0, ∞)` and 180° added to the angle.
    #[must_use]
    pub fn positive(self) -> Self {
        if self.length < 0.0 {
            Self::new(self.length.abs(), self.angle + Angle::STRAIGHT)
        } else {
            self
        }
    }

    /// Returns an effectively equivalent coordinate with the angle in the signed interval
    /// `(-180°, 180°]`.
    #[must_use]
    pub fn signed(self) -> Self {
        Self::new(self.length, self.angle.wrap_signed())
    }

    /// Returns an effectively equivalent coordinate with the angle in the unsigned interval
    /// `[0°, 360°)`.
    #[must_use]
    pub fn unsigned(self) -> Self {
        Self::new(self.length, self.angle.wrap_unsigned())
    }

    /// Linearly interpolates between two coordinates, componentwise, with `alpha` clamped to
    /// `[0, 1]`.
    ///
    /// Like [`Angle::lerp`], the angular component does not take the shortest path around the
    /// circle.
    pub fn lerp(from: Self, to: Self, alpha: f64) -> Self {
        Self::lerp_unclamped(from, to, alpha.clamp(0.0, 1.0))
    }

    /// Linearly interpolates between two coordinates, componentwise, without clamping `alpha`.
    pub fn lerp_unclamped(from: Self, to: Self, alpha: f64) -> Self {
        from + (to - from) * alpha
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Componentwise operators
// ─────────────────────────────────────────────────────────────────────────────

impl Add for Polar2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.length + rhs.length, self.angle + rhs.angle)
    }
}

impl Sub for Polar2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.length - rhs.length, self.angle - rhs.angle)
    }
}

impl Mul for Polar2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.length * rhs.length, self.angle * rhs.angle)
    }
}

impl Mul<f64> for Polar2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.length * rhs, self.angle * rhs)
    }
}

impl Mul<Polar2> for f64 {
    type Output = Polar2;
    fn mul(self, rhs: Polar2) -> Polar2 {
        rhs * self
    }
}

impl Div for Polar2 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.length / rhs.length, self.angle / rhs.angle)
    }
}

impl Div<f64> for Polar2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.length / rhs, self.angle / rhs)
    }
}

impl Rem for Polar2 {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        Self::new(self.length % rhs.length, self.angle % rhs.angle)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cartesian conversions
// ─────────────────────────────────────────────────────────────────────────────

impl From<Vec2> for Polar2 {
    /// Converts a Cartesian 2-vector into the equivalent polar coordinate: the length is the
    /// vector's magnitude and the angle is `atan2(y, x)`.
    fn from(vector: Vec2) -> Self {
        Self::new(vector.length(), Angle::from(vector))
    }
}

impl From<Polar2> for Vec2 {
    /// Converts a polar coordinate into the equivalent Cartesian 2-vector,
    /// `(length·cos θ, length·sin θ)`.
    fn from(polar: Polar2) -> Self {
        let (sin, cos) = polar.angle.sin_cos();
        vec2(polar.length * cos, polar.length * sin)
    }
}

impl From<Polar2> for Vec3 {
    /// Converts a polar coordinate onto the horizontal plane of a y-up 3D space, as viewed from
    /// above: `(length·cos θ, 0, length·sin θ)`. Useful for top-down scenes.
    fn from(polar: Polar2) -> Self {
        let (sin, cos) = polar.angle.sin_cos();
        vec3(polar.length * cos, 0.0, polar.length * sin)
    }
}

impl Display for Polar2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} length, {}", self.length, self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn polar2(length: f64, degrees: f64) -> Polar2 {
        Polar2::new(length, Angle::from_degrees(degrees))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn positive_flips_negative_length() {
        assert_eq!(polar2(-1.0, 90.0).positive(), polar2(1.0, 270.0));
        assert_eq!(polar2(2.0, 90.0).positive(), polar2(2.0, 90.0));
        assert_eq!(polar2(0.0, 45.0).positive(), polar2(0.0, 45.0));
    }

    #[test]
    fn interval_views_touch_only_the_angle() {
        assert_eq!(polar2(1.0, 370.0).unsigned(), polar2(1.0, 10.0));
        assert_eq!(polar2(-3.0, 315.0).signed(), polar2(-3.0, -45.0));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Algebra
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn componentwise_arithmetic() {
        let a = polar2(1.0, 30.0);
        let b = polar2(2.0, 45.0);
        assert_eq!(a + b, polar2(3.0, 75.0));
        assert_eq!(b - a, polar2(1.0, 15.0));
        assert_eq!(a * b, polar2(2.0, 1350.0));
        assert_eq!(a * 2.0, polar2(2.0, 60.0));
        assert_eq!(2.0 * a, polar2(2.0, 60.0));
        assert_eq!(b / a, polar2(2.0, 1.5));
        assert_eq!(b / 2.0, polar2(1.0, 22.5));
        assert_eq!(b % a, polar2(0.0, 15.0));
    }

    #[test]
    fn structural_equality() {
        assert_eq!(polar2(1.0, 90.0), polar2(1.0, 90.0));
        assert_ne!(polar2(1.0, 90.0), polar2(1.0, 450.0));
        assert_ne!(polar2(1.0, 90.0), polar2(-1.0, 90.0));
    }

    #[test]
    fn lerp_componentwise() {
        let from = polar2(0.0, 0.0);
        let to = polar2(10.0, 90.0);
        assert_eq!(Polar2::lerp(from, to, 0.0), from);
        assert_eq!(Polar2::lerp(from, to, 1.0), to);
        assert_eq!(Polar2::lerp(from, to, 0.5), polar2(5.0, 45.0));
        // Alpha clamps; the unclamped variant extrapolates.
        assert_eq!(Polar2::lerp(from, to, 2.0), to);
        assert_eq!(Polar2::lerp_unclamped(from, to, 2.0), polar2(20.0, 180.0));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Cartesian conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn to_vec2() {
        let v = Vec2::from(polar2(2.0, 0.0));
        assert_abs_diff_eq!(v.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 0.0, epsilon = 1e-12);

        let v = Vec2::from(polar2(2.0, 90.0));
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn to_vec3_lies_on_horizontal_plane() {
        let v = Vec3::from(polar2(2.0, 90.0));
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_eq!(v.y, 0.0);
        assert_abs_diff_eq!(v.z, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn from_vec2() {
        let p = Polar2::from(crate::vector::vec2(0.0, 3.0));
        assert_abs_diff_eq!(p.length, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.angle.degrees(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn vector_round_trip() {
        let p = polar2(1.0, 90.0);
        let back = Polar2::from(Vec2::from(p));
        assert_abs_diff_eq!(back.length, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(back.angle.degrees(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", polar2(1.0, 90.0)), "1 length, 90 deg");
    }

    proptest! {
        #[test]
        fn prop_positive_length_is_never_negative(len in -100.0..100.0f64, deg in -720.0..720.0f64) {
            prop_assert!(polar2(len, deg).positive().length >= 0.0);
        }

        #[test]
        fn prop_round_trip_through_vec2(len in 0.1..100.0f64, deg in -179.0..179.0f64) {
            let p = polar2(len, deg).signed();
            let back = Polar2::from(Vec2::from(p));
            assert_abs_diff_eq!(back.length, p.length, epsilon = 1e-9);
            assert_abs_diff_eq!(back.angle.degrees(), p.angle.degrees(), epsilon = 1e-9);
        }
    }
}
