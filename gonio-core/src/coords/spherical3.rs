//! 3D spherical coordinates (azimuth/zenith convention).

use core::fmt::{self, Display};
use core::ops::{Add, Div, Mul, Rem, Sub};

use crate::angle::Angle;
use crate::rotation::Euler;
use crate::vector::{vec2, vec3, Vec2, Vec3};

/// Representation of a 3D spherical coordinate, adhering to the azimuth and zenith conventions:
/// a radial length, a horizontal bearing (azimuth), and an angle measured down from the
/// reference pole (zenith).
///
/// The zenith is logically constrained to `[0°, 180°]` but nothing enforces that until
/// [`Spherical3::unsigned_zenith`] is requested; that view keeps the represented direction by
/// reflecting the zenith and flipping the azimuth hemisphere.
///
/// ```rust
/// use gonio_core::{Angle, Spherical3};
///
/// let s = Spherical3::new(1.0, Angle::STRAIGHT, Angle::from_degrees(190.0)).unsigned_zenith();
/// assert_eq!(s.zenith.degrees(), 170.0);
/// assert_eq!(s.azimuth.degrees(), 360.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spherical3 {
    /// The magnitude, radius, or radial distance of the coordinate.
    pub length: f64,
    /// Horizontal bearing angle.
    pub azimuth: Angle,
    /// Angle from the reference pole.
    pub zenith: Angle,
}

impl Spherical3 {
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

    /// Creates a coordinate from a length, an azimuth, and a zenith.
    #[inline]
    pub const fn new(length: f64, azimuth: Angle, zenith: Angle) -> Self {
        Self {
            length,
            azimuth,
            zenith,
        }
    }

    /// If the length is negative, returns an effectively equivalent coordinate with the length
    /// in `[0, ∞)` and 180° added to the azimuth.
    #[must_use]
    pub fn positive(self) -> Self {
        if self.length < 0.0 {
            Self::new(
                self.length.abs(),
                self.azimuth + Angle::STRAIGHT,
                self.zenith,
            )
        } else {
            self
        }
    }

    /// Returns an effectively equivalent coordinate with the azimuth in the signed interval
    /// `(-180°, 180°]`.
    #[must_use]
    pub fn signed_azimuth(self) -> Self {
        Self::new(self.length, self.azimuth.wrap_signed(), self.zenith)
    }

    /// Returns an effectively equivalent coordinate with the azimuth in the unsigned interval
    /// `[0°, 360°)`.
    #[must_use]
    pub fn unsigned_azimuth(self) -> Self {
        Self::new(self.length, self.azimuth.wrap_unsigned(), self.zenith)
    }

    /// Returns an effectively equivalent coordinate with the zenith in `[0°, 180°]`.
    ///
    /// The zenith is first wrapped into the unsigned interval; if it then exceeds 180°, it is
    /// reflected (`360° − zenith`) and 180° is added to the azimuth, flipping the hemisphere
    /// while preserving the represented direction. The negative branch (`−360° − zenith`) can
    /// only be reached transiently within the composed check.
    #[must_use]
    pub fn unsigned_zenith(self) -> Self {
        let mut polar = self;
        polar.zenith = polar.zenith.wrap_unsigned();
        if polar.zenith.degrees() > 180.0 {
            polar.zenith = Angle::FULL - polar.zenith;
            polar.azimuth += Angle::STRAIGHT;
        } else if polar.zenith.degrees() < 0.0 {
            polar.zenith = -Angle::FULL - polar.zenith;
            polar.azimuth += Angle::STRAIGHT;
        }
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

impl Add for Spherical3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.length + rhs.length,
            self.azimuth + rhs.azimuth,
            self.zenith + rhs.zenith,
        )
    }
}

impl Sub for Spherical3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.length - rhs.length,
            self.azimuth - rhs.azimuth,
            self.zenith - rhs.zenith,
        )
    }
}

impl Mul for Spherical3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.length * rhs.length,
            self.azimuth * rhs.azimuth,
            self.zenith * rhs.zenith,
        )
    }
}

impl Mul<f64> for Spherical3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.length * rhs, self.azimuth * rhs, self.zenith * rhs)
    }
}

impl Mul<Spherical3> for f64 {
    type Output = Spherical3;
    fn mul(self, rhs: Spherical3) -> Spherical3 {
        rhs * self
    }
}

impl Div for Spherical3 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(
            self.length / rhs.length,
            self.azimuth / rhs.azimuth,
            self.zenith / rhs.zenith,
        )
    }
}

impl Div<f64> for Spherical3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.length / rhs, self.azimuth / rhs, self.zenith / rhs)
    }
}

impl Rem for Spherical3 {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        Self::new(
            self.length % rhs.length,
            self.azimuth % rhs.azimuth,
            self.zenith % rhs.zenith,
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cartesian and rotation conversions
// ─────────────────────────────────────────────────────────────────────────────

impl From<Vec2> for Spherical3 {
    /// Converts a Cartesian 2-vector: the x and y components derive the length and azimuth; the
    /// zenith is zero.
    fn from(vector: Vec2) -> Self {
        Self::new(vector.length(), Angle::from(vector), Angle::ZERO)
    }
}

impl From<Spherical3> for Vec2 {
    /// Converts to the plane: `(length·cos az, length·sin az)`. The zenith is dropped.
    fn from(polar: Spherical3) -> Self {
        let (sin, cos) = polar.azimuth.sin_cos();
        vec2(polar.length * cos, polar.length * sin)
    }
}

impl From<Spherical3> for Vec3 {
    /// Converts into a y-up 3D space, clockwise from above: the length and azimuth derive the x
    /// and z components, the length and zenith the y component:
    /// `(length·cos(−az), length·sin(zen), length·sin(−az))`.
    fn from(polar: Spherical3) -> Self {
        let (sin_az, cos_az) = (-polar.azimuth).sin_cos();
        vec3(
            polar.length * cos_az,
            polar.length * polar.zenith.sin(),
            polar.length * sin_az,
        )
    }
}

impl From<Spherical3> for Euler {
    /// Converts to a rotation in a y-up, clockwise-from-above space: the zenith rotates about
    /// the x axis and the negated azimuth about the vertical axis.
    fn from(polar: Spherical3) -> Self {
        Euler::new(polar.zenith, -polar.azimuth, Angle::ZERO)
    }
}

impl Display for Spherical3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} length, {} azimuth, {} zenith",
            self.length, self.azimuth, self.zenith
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn spherical3(length: f64, azimuth: f64, zenith: f64) -> Spherical3 {
        Spherical3::new(
            length,
            Angle::from_degrees(azimuth),
            Angle::from_degrees(zenith),
        )
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn positive_flips_into_azimuth() {
        assert_eq!(spherical3(-1.0, 10.0, 20.0).positive(), spherical3(1.0, 190.0, 20.0));
        assert_eq!(spherical3(1.0, 10.0, 20.0).positive(), spherical3(1.0, 10.0, 20.0));
    }

    #[test]
    fn azimuth_interval_views() {
        assert_eq!(spherical3(1.0, 370.0, 20.0).unsigned_azimuth(), spherical3(1.0, 10.0, 20.0));
        assert_eq!(spherical3(1.0, 315.0, 20.0).signed_azimuth(), spherical3(1.0, -45.0, 20.0));
    }

    #[test]
    fn unsigned_zenith_reflects_past_the_pole() {
        let s = spherical3(1.0, 180.0, 190.0).unsigned_zenith();
        assert_eq!(s.zenith.degrees(), 170.0);
        assert_eq!(s.azimuth.degrees(), 360.0);
    }

    #[test]
    fn unsigned_zenith_wraps_negative_input() {
        // -30° wraps to 330°, which then reflects to 30° with the azimuth flipped.
        let s = spherical3(1.0, 0.0, -30.0).unsigned_zenith();
        assert_eq!(s.zenith.degrees(), 30.0);
        assert_eq!(s.azimuth.degrees(), 180.0);
    }

    #[test]
    fn unsigned_zenith_leaves_valid_zenith_alone() {
        let s = spherical3(1.0, 10.0, 90.0).unsigned_zenith();
        assert_eq!(s, spherical3(1.0, 10.0, 90.0));

        let s = spherical3(1.0, 10.0, 180.0).unsigned_zenith();
        assert_eq!(s, spherical3(1.0, 10.0, 180.0));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Algebra
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn componentwise_arithmetic() {
        let a = spherical3(1.0, 10.0, 20.0);
        let b = spherical3(2.0, 30.0, 40.0);
        assert_eq!(a + b, spherical3(3.0, 40.0, 60.0));
        assert_eq!(b - a, spherical3(1.0, 20.0, 20.0));
        assert_eq!(a * b, spherical3(2.0, 300.0, 800.0));
        assert_eq!(a * 2.0, spherical3(2.0, 20.0, 40.0));
        assert_eq!(2.0 * a, spherical3(2.0, 20.0, 40.0));
        assert_eq!(b / a, spherical3(2.0, 3.0, 2.0));
        assert_eq!(b / 2.0, spherical3(1.0, 15.0, 20.0));
        assert_eq!(b % a, spherical3(0.0, 0.0, 0.0));
    }

    #[test]
    fn lerp_componentwise() {
        let from = spherical3(0.0, 0.0, 0.0);
        let to = spherical3(10.0, 90.0, 180.0);
        assert_eq!(Spherical3::lerp(from, to, 0.5), spherical3(5.0, 45.0, 90.0));
        assert_eq!(Spherical3::lerp(from, to, 9.0), to);
        assert_eq!(Spherical3::lerp_unclamped(from, to, -0.5), spherical3(-5.0, -45.0, -90.0));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Cartesian and rotation conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn to_vec2_drops_zenith() {
        let v = Vec2::from(spherical3(2.0, 90.0, 45.0));
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn to_vec3_conventions() {
        // Azimuth is negated in the horizontal plane; the zenith drives the y component.
        let v = Vec3::from(spherical3(2.0, 90.0, 30.0));
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.z, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn from_vec2_has_zero_zenith() {
        let s = Spherical3::from(crate::vector::vec2(0.0, 2.0));
        assert_abs_diff_eq!(s.length, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.azimuth.degrees(), 90.0, epsilon = 1e-12);
        assert_eq!(s.zenith, Angle::ZERO);
    }

    #[test]
    fn to_euler_rotation() {
        let r = Euler::from(spherical3(1.0, 45.0, 30.0));
        assert_eq!(r.x.degrees(), 30.0);
        assert_eq!(r.y.degrees(), -45.0);
        assert_eq!(r.z, Angle::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", spherical3(1.0, 10.0, 20.0)),
            "1 length, 10 deg azimuth, 20 deg zenith"
        );
    }

    proptest! {
        #[test]
        fn prop_unsigned_zenith_range(az in -720.0..720.0f64, zen in -1e4..1e4f64) {
            let s = spherical3(1.0, az, zen).unsigned_zenith();
            prop_assert!(s.zenith.degrees() >= 0.0);
            prop_assert!(s.zenith.degrees() <= 180.0);
        }
    }
}
