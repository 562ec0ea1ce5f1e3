//! 3D cylindrical coordinates.

use core::fmt::{self, Display};
use core::ops::{Add, Div, Mul, Rem, Sub};

use crate::angle::Angle;
use crate::vector::{vec2, vec3, Vec2, Vec3};

/// Representation of a 3D cylindrical coordinate: a radial length, a height along the vertical
/// axis, and an azimuthal angle in the horizontal plane.
///
/// ```rust
/// use gonio_core::{Angle, Cylindric3, Vec3};
///
/// let c = Cylindric3::new(1.0, 2.0, Angle::ZERO);
/// let v = Vec3::from(c);
/// assert_eq!((v.x, v.y), (1.0, 2.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cylindric3 {
    /// The magnitude, radius, or radial distance of the coordinate.
    pub length: f64,
    /// Height along the vertical axis, unconstrained.
    pub height: f64,
    /// Azimuthal angle in the horizontal plane.
    pub angle: Angle,
}

impl Cylindric3 {
    /// The zero coordinate.
    pub const ZERO: Self = Self::new(0.0, 0.0, Angle::ZERO);
    /// All components positive infinity.
    pub const POSITIVE_INFINITY: Self = Self::new(
        f64::INFINITY,
        f64::INFINITY,
        Angle::from_degrees(f64::INFINITY),
    );
    /// All components negative infinity.
    pub const NEGATIVE_INFINITY: Self = Self::new(
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
        Angle::from_degrees(f64::NEG_INFINITY),
    );

    /// Creates a coordinate from a length, a height, and an angle.
    #[inline]
    pub const fn new(length: f64, height: f64, angle: Angle) -> Self {
        Self {
            length,
            height,
            angle,
        }
    }

    /// If the length is negative, returns an effectively equivalent coordinate with the length
    /// in `[0, ∞)` and 180° added to the angle. The height is untouched.
    #[must_use]
    pub fn positive(self) -> Self {
        if self.length < 0.0 {
            Self::new(self.length.abs(), self.height, self.angle + Angle::STRAIGHT)
        } else {
            self
        }
    }

    /// Returns an effectively equivalent coordinate with the angle in the signed interval
    /// `(-180°, 180°]`.
    #[must_use]
    pub fn signed(self) -> Self {
        Self::new(self.length, self.height, self.angle.wrap_signed())
    }

    /// Returns an effectively equivalent coordinate with the angle in the unsigned interval
    /// `[0°, 360°)`.
    #[must_use]
    pub fn unsigned(self) -> Self {
        Self::new(self.length, self.height, self.angle.wrap_unsigned())
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

impl Add for Cylindric3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.length + rhs.length,
            self.height + rhs.height,
            self.angle + rhs.angle,
        )
    }
}

impl Sub for Cylindric3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.length - rhs.length,
            self.height - rhs.height,
            self.angle - rhs.angle,
        )
    }
}

impl Mul for Cylindric3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.length * rhs.length,
            self.height * rhs.height,
            self.angle * rhs.angle,
        )
    }
}

impl Mul<f64> for Cylindric3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.length * rhs, self.height * rhs, self.angle * rhs)
    }
}

impl Mul<Cylindric3> for f64 {
    type Output = Cylindric3;
    fn mul(self, rhs: Cylindric3) -> Cylindric3 {
        rhs * self
    }
}

impl Div for Cylindric3 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(
            self.length / rhs.length,
            self.height / rhs.height,
            self.angle / rhs.angle,
        )
    }
}

impl Div<f64> for Cylindric3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.length / rhs, self.height / rhs, self.angle / rhs)
    }
}

impl Rem for Cylindric3 {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        Self::new(
            self.length % rhs.length,
            self.height % rhs.height,
            self.angle % rhs.angle,
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cartesian conversions
// ─────────────────────────────────────────────────────────────────────────────

impl From<Vec2> for Cylindric3 {
    /// Converts a Cartesian 2-vector: the x and y components derive the length and angle; the
    /// height is zero.
    fn from(vector: Vec2) -> Self {
        Self::new(vector.length(), 0.0, Angle::from(vector))
    }
}

impl From<Cylindric3> for Vec2 {
    /// Converts to the plane: `(length·cos θ, length·sin θ)`. The height is dropped.
    fn from(cylindric: Cylindric3) -> Self {
        let (sin, cos) = cylindric.angle.sin_cos();
        vec2(cylindric.length * cos, cylindric.length * sin)
    }
}

impl From<Cylindric3> for Vec3 {
    /// Converts into a y-up 3D space, clockwise from above: the height becomes the y component
    /// and `(length·cos(−θ), length·sin(−θ))` the x and z components.
    fn from(cylindric: Cylindric3) -> Self {
        let (sin, cos) = (-cylindric.angle).sin_cos();
        vec3(
            cylindric.length * cos,
            cylindric.height,
            cylindric.length * sin,
        )
    }
}

impl Display for Cylindric3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} length, {} height, {}",
            self.length, self.height, self.angle
        )
    }
}
