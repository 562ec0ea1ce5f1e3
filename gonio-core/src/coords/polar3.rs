//! 3D yaw/pitch polar coordinates.

use core::fmt::{self, Display};
use core::ops::{Add, Div, Mul, Rem, Sub};

use crate::angle::Angle;
use crate::vector::{vec2, vec3, Vec2, Vec3};

/// Representation of a 3D polar coordinate, specifically a non-conventional spherical
/// coordinate made of a radial length, a yaw (rotation about the vertical axis), and a pitch
/// (elevation), analogous to a look vector.
///
/// Pitch is logically constrained to ±90° but nothing enforces that until
/// [`Polar3::signed_pitch`] or [`Polar3::unsigned_pitch`] is requested; those views keep the
/// represented direction by reflecting the pitch and flipping the yaw hemisphere.
///
/// ```rust
/// use gonio_core::{Angle, Polar3};
///
/// let p = Polar3::new(1.0, Angle::ZERO, Angle::from_degrees(100.0)).signed_pitch();
/// assert_eq!(p.pitch.degrees(), 80.0);
/// assert_eq!(p.yaw.degrees(), 180.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polar3 {
    /// The magnitude, radius, or radial distance of the coordinate.
    pub length: f64,
    /// Rotation about the vertical axis.
    pub yaw: Angle,
    /// Elevation angle.
    pub pitch: Angle,
}

impl Polar3 {
    /// The zero coordinate.
    pub const ZERO: Self = Self::new(0.0, Angle::ZERO, Angle::ZERO);
    /// All components positive infinity.
    pub const POSITIVE_INFINITY: Self = Self::new(
        f64::INFINITY,
        Angle::from_degrees(f64::INFINITY),
        Angle::from_degrees(f64::INFINITY),
    );
    /// All components negative infinity.
    pub const NEGATIVE_INFINITY: Self = Self::new(
        f64::NEG_INFINITY,
        Angle::from_degrees(f64::NEG_INFINITY),
        Angle::from_degrees(f64::NEG_INFINITY),
    );

    /// Creates a coordinate from a length, a yaw, and a pitch.
    #[inline]
    pub const fn new(length: f64, yaw: Angle, pitch: Angle) -> Self {
        Self { length, yaw, pitch }
    }

    /// If the length is negative, returns an effectively equivalent coordinate with the length
    /// in `[0, ∞)` and 180° added to the yaw.
    #[must_use]
    pub fn positive(self) -> Self {
        if self.length < 0.0 {
            Self::new(self.length.abs(), self.yaw + Angle::STRAIGHT, self.pitch)
        } else {
            self
        }
    }

    /// Returns an effectively equivalent coordinate with the yaw in the signed interval
    /// `(-180°, 180°]`.
    #[must_use]
    pub fn signed_yaw(self) -> Self {
        Self::new(self.length, self.yaw.wrap_signed(), self.pitch)
    }

    /// Returns an effectively equivalent coordinate with the yaw in the unsigned interval
    /// `[0°, 360°)`.
    #[must_use]
    pub fn unsigned_yaw(self) -> Self {
        Self::new(self.length, self.yaw.wrap_unsigned(), self.pitch)
    }

    /// Returns an effectively equivalent coordinate with the pitch in `[-90°, 90°]`.
    ///
    /// The pitch is first wrapped into the signed interval; if it then exceeds ±90°, it is
    /// reflected (`180° − pitch`, or `−180° − pitch` below `−90°`) and 180° is added to the yaw,
    /// flipping the hemisphere while preserving the represented direction.
    #[must_use]
    pub fn signed_pitch(self) -> Self {
        let mut polar = self;
        polar.pitch = polar.pitch.wrap_signed();
        if polar.pitch.degrees() > 90.0 {
            polar.pitch = Angle::STRAIGHT - polar.pitch;
            polar.yaw += Angle::STRAIGHT;
        } else if polar.pitch.degrees() < -90.0 {
            polar.pitch = -Angle::STRAIGHT - polar.pitch;
            polar.yaw += Angle::STRAIGHT;
        }
        polar
    }

    /// Returns an effectively equivalent coordinate with the pitch in `[0°, 90°] ∪ [270°, 360°)`.
    ///
    /// Identical reflection step to [`Polar3::signed_pitch`], followed by wrapping the pitch
    /// into the unsigned interval.
    #[must_use]
    pub fn unsigned_pitch(self) -> Self {
        let mut polar = self.signed_pitch();
        polar.pitch = polar.pitch.wrap_unsigned();
        polar
    }

    /// Linearly interpolates between two coordinates, componentwise, with `alpha` clamped to
    /// `[0, 1]`.
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

impl Add for Polar3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.length + rhs.length,
            self.yaw + rhs.yaw,
            self.pitch + rhs.pitch,
        )
    }
}

impl Sub for Polar3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.length - rhs.length,
            self.yaw - rhs.yaw,
            self.pitch - rhs.pitch,
        )
    }
}

impl Mul for Polar3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.length * rhs.length,
            self.yaw * rhs.yaw,
            self.pitch * rhs.pitch,
        )
    }
}

impl Mul<f64> for Polar3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.length * rhs, self.yaw * rhs, self.pitch * rhs)
    }
}

impl Mul<Polar3> for f64 {
    type Output = Polar3;
    fn mul(self, rhs: Polar3) -> Polar3 {
        rhs * self
    }
}

impl Div for Polar3 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(
            self.length / rhs.length,
            self.yaw / rhs.yaw,
            self.pitch / rhs.pitch,
        )
    }
}

impl Div<f64> for Polar3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.length / rhs, self.yaw / rhs, self.pitch / rhs)
    }
}

impl Rem for Polar3 {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        Self::new(
            self.length % rhs.length,
            self.yaw % rhs.yaw,
            self.pitch % rhs.pitch,
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cartesian conversions
// ─────────────────────────────────────────────────────────────────────────────

impl From<Vec2> for Polar3 {
    /// Converts a Cartesian 2-vector into a look direction in the horizontal plane: the length
    /// is the vector's magnitude, the yaw is `atan2(y, x)`, and the pitch is zero.
    fn from(vector: Vec2) -> Self {
        Self::new(vector.length(), Angle::from(vector), Angle::ZERO)
    }
}

impl From<Polar3> for Vec2 {
    /// Projects the coordinate onto the plane using the yaw only: `(length·cos yaw,
    /// length·sin yaw)`. Pitch does not participate.
    fn from(polar: Polar3) -> Self {
        let (sin, cos) = polar.yaw.sin_cos();
        vec2(polar.length * cos, polar.length * sin)
    }
}

impl From<Polar3> for Vec3 {
    /// Projects the coordinate into a y-up 3D space, clockwise from above:
    /// `(length·cos(−yaw), 0, length·sin(−yaw))`.
    ///
    /// The pitch is not incorporated into this projection; the result always lies on the
    /// horizontal plane.
    // TODO: rotation conversion incorporating pitch
    fn from(polar: Polar3) -> Self {
        let (sin, cos) = (-polar.yaw).sin_cos();
        vec3(polar.length * cos, 0.0, polar.length * sin)
    }
}

impl Display for Polar3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} length, {} yaw, {} pitch",
            self.length, self.yaw, self.pitch
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn polar3(length: f64, yaw: f64, pitch: f64) -> Polar3 {
        Polar3::new(length, Angle::from_degrees(yaw), Angle::from_degrees(pitch))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn positive_flips_into_yaw() {
        assert_eq!(polar3(-2.0, 10.0, 20.0).positive(), polar3(2.0, 190.0, 20.0));
        assert_eq!(polar3(2.0, 10.0, 20.0).positive(), polar3(2.0, 10.0, 20.0));
    }

    #[test]
    fn yaw_interval_views() {
        assert_eq!(polar3(1.0, 370.0, 20.0).unsigned_yaw(), polar3(1.0, 10.0, 20.0));
        assert_eq!(polar3(1.0, 315.0, 20.0).signed_yaw(), polar3(1.0, -45.0, 20.0));
    }

    #[test]
    fn signed_pitch_reflects_over_the_pole() {
        let p = polar3(1.0, 0.0, 100.0).signed_pitch();
        assert_eq!(p.pitch.degrees(), 80.0);
        assert_eq!(p.yaw.degrees(), 180.0);

        let p = polar3(1.0, 0.0, -100.0).signed_pitch();
        assert_eq!(p.pitch.degrees(), -80.0);
        assert_eq!(p.yaw.degrees(), 180.0);
    }

    #[test]
    fn signed_pitch_leaves_valid_pitch_alone() {
        let p = polar3(1.0, 10.0, 45.0).signed_pitch();
        assert_eq!(p, polar3(1.0, 10.0, 45.0));

        let p = polar3(1.0, 10.0, 90.0).signed_pitch();
        assert_eq!(p, polar3(1.0, 10.0, 90.0));
    }

    #[test]
    fn signed_pitch_wraps_before_reflecting() {
        // 460° wraps to 100°, which then reflects.
        let p = polar3(1.0, 0.0, 460.0).signed_pitch();
        assert_abs_diff_eq!(p.pitch.degrees(), 80.0, epsilon = 1e-12);
        assert_eq!(p.yaw.degrees(), 180.0);
    }

    #[test]
    fn unsigned_pitch_lands_in_the_split_interval() {
        let p = polar3(1.0, 0.0, 100.0).unsigned_pitch();
        assert_eq!(p.pitch.degrees(), 80.0);
        assert_eq!(p.yaw.degrees(), 180.0);

        // A downward pitch ends up in [270, 360).
        let p = polar3(1.0, 0.0, -30.0).unsigned_pitch();
        assert_eq!(p.pitch.degrees(), 330.0);
        assert_eq!(p.yaw.degrees(), 0.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Algebra
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn componentwise_arithmetic() {
        let a = polar3(1.0, 10.0, 20.0);
        let b = polar3(2.0, 30.0, 40.0);
        assert_eq!(a + b, polar3(3.0, 40.0, 60.0));
        assert_eq!(b - a, polar3(1.0, 20.0, 20.0));
        assert_eq!(a * b, polar3(2.0, 300.0, 800.0));
        assert_eq!(a * 2.0, polar3(2.0, 20.0, 40.0));
        assert_eq!(2.0 * a, polar3(2.0, 20.0, 40.0));
        assert_eq!(b / a, polar3(2.0, 3.0, 2.0));
        assert_eq!(b / 2.0, polar3(1.0, 15.0, 20.0));
        assert_eq!(b % a, polar3(0.0, 0.0, 0.0));
    }

    #[test]
    fn lerp_componentwise() {
        let from = polar3(0.0, 0.0, 0.0);
        let to = polar3(10.0, 90.0, -90.0);
        assert_eq!(Polar3::lerp(from, to, 0.5), polar3(5.0, 45.0, -45.0));
        assert_eq!(Polar3::lerp(from, to, 7.0), to);
        assert_eq!(Polar3::lerp_unclamped(from, to, -1.0), polar3(-10.0, -90.0, 90.0));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Cartesian conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn to_vec2_uses_yaw_only() {
        let v = Vec2::from(polar3(2.0, 90.0, 45.0));
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn to_vec3_negates_yaw_and_ignores_pitch() {
        let v = Vec3::from(polar3(2.0, 90.0, 45.0));
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_eq!(v.y, 0.0);
        assert_abs_diff_eq!(v.z, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn from_vec2_has_zero_pitch() {
        let p = Polar3::from(crate::vector::vec2(0.0, 2.0));
        assert_abs_diff_eq!(p.length, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.yaw.degrees(), 90.0, epsilon = 1e-12);
        assert_eq!(p.pitch, Angle::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", polar3(1.0, 10.0, 20.0)),
            "1 length, 10 deg yaw, 20 deg pitch"
        );
    }

    proptest! {
        #[test]
        fn prop_signed_pitch_range(len in -10.0..10.0f64, yaw in -720.0..720.0f64, pitch in -1e4..1e4f64) {
            let p = polar3(len, yaw, pitch).signed_pitch();
            prop_assert!(p.pitch.degrees() >= -90.0);
            prop_assert!(p.pitch.degrees() <= 90.0);
        }

        #[test]
        fn prop_unsigned_pitch_range(pitch in -1e4..1e4f64) {
            let p = polar3(1.0, 0.0, pitch).unsigned_pitch();
            let d = p.pitch.degrees();
            prop_assert!((0.0..=90.0).contains(&d) || (270.0..360.0).contains(&d));
        }
    }
}
