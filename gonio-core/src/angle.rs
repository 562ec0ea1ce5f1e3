//! The canonical [`Angle`] type: storage, unit views, normalization, and arithmetic.
//!
//! # Design overview
//!
//! * **Canonical storage:** an `Angle` is a single `f64` holding **degrees**, unconstrained:
//!   values may exceed ±360° or be fractional or negative. Degrees are the storage unit because
//!   they are typically user-defined as rational numbers, whereas radians are irrational
//!   multiples of π and lose information in floating point.
//! * **Unit views:** every other unit (radians, grads, winds, …) is computed on demand from the
//!   shared revolution table in [`units`](crate::units); see [`AngleUnit`]. No unit is ever
//!   stored alongside the degree value.
//! * **Raw arithmetic:** operators act on the raw degree value and never normalize. `-90°` and
//!   `270°` are equivalent rotations but distinct `Angle` values; wrap explicitly with
//!   [`Angle::wrap_signed`] or [`Angle::wrap_unsigned`] before comparing rotations.
//! * **Wrapping helpers:** [`wrap_unsigned`](Angle::wrap_unsigned) maps into `[0°, 360°)` and
//!   [`wrap_signed`](Angle::wrap_signed) into `(-180°, 180°]`; both are pure and idempotent.
//!
//! ## Edge cases
//!
//! Wrapping, trig, and arithmetic follow IEEE-754 semantics from `f64`: if the underlying
//! numeric is `NaN` or `±∞`, results will generally be `NaN`. Division by a zero angle or scalar
//! yields `±∞` or `NaN` and is not treated as a failure.

use core::fmt::{self, Display};
use core::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::rotation::Euler;
use crate::unit::{AngleUnit, InUnit};
use crate::units::{Degree, Radian};
use crate::vector::Vec2;

#[inline]
pub(crate) fn fmod(x: f64, modulus: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x % modulus
    }
    #[cfg(not(feature = "std"))]
    {
        crate::libm::fmod(x, modulus)
    }
}

/// Representation of a 1D angle, stored as degrees in `(-∞, ∞)`.
///
/// ```rust
/// use gonio_core::{units::Grad, Angle};
///
/// let a = Angle::from_degrees(315.0);
/// assert_eq!(a.wrap_signed().degrees(), -45.0);
/// assert!((a.to::<Grad>() - 350.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    /// A zero degree angle.
    pub const ZERO: Self = Self(0.0);
    /// A right (90°) angle.
    pub const RIGHT: Self = Self(90.0);
    /// A straight (180°) angle.
    pub const STRAIGHT: Self = Self(180.0);
    /// A full revolution (360°).
    pub const FULL: Self = Self(360.0);
    /// A constant representing NaN.
    pub const NAN: Self = Self(f64::NAN);

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction and unit views
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates an angle of `degrees` degrees.
    #[inline]
    pub const fn from_degrees(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Creates an angle of `radians` radians.
    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self::of::<Radian>(radians)
    }

    /// Creates an angle from a value expressed in unit `U`.
    ///
    /// ```rust
    /// use gonio_core::{units::Wind, Angle};
    ///
    /// let a = Angle::of::<Wind>(8.0);
    /// assert!((a.degrees() - 90.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub const fn of<U: AngleUnit>(value: f64) -> Self {
        Self(value * (360.0 / U::REVOLUTION))
    }

    /// Returns the value of `self` in degrees.
    #[inline]
    pub const fn degrees(self) -> f64 {
        self.0
    }

    /// Returns the value of `self` in radians.
    #[inline]
    pub const fn radians(self) -> f64 {
        self.to::<Radian>()
    }

    /// Returns the value of `self` expressed in unit `U`.
    ///
    /// ```rust
    /// use gonio_core::{units::{Arcminute, Quadrant}, Angle};
    ///
    /// let a = Angle::from_degrees(180.0);
    /// assert!((a.to::<Arcminute>() - 10_800.0).abs() < 1e-9);
    /// assert!((a.to::<Quadrant>() - 2.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub const fn to<U: AngleUnit>(self) -> f64 {
        self.0 * (U::REVOLUTION / 360.0)
    }

    /// Overwrites this angle with a value expressed in unit `U`.
    ///
    /// This is the in-place counterpart of [`Angle::of`] for call sites that update an angle
    /// held inside a larger structure; the previous value is discarded entirely.
    #[inline]
    pub fn set<U: AngleUnit>(&mut self, value: f64) {
        self.0 = value * (360.0 / U::REVOLUTION);
    }

    /// Captures this angle in unit `U` for formatting.
    ///
    /// ```rust
    /// use gonio_core::{units::Turn, Angle};
    ///
    /// let a = Angle::from_degrees(180.0);
    /// assert_eq!(format!("{:.2}", a.display_in::<Turn>()), "0.50 turn");
    /// ```
    #[inline]
    pub const fn display_in<U: AngleUnit>(self) -> InUnit<U> {
        InUnit::new(self.to::<U>())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Wrapping
    // ─────────────────────────────────────────────────────────────────────────────

    /// Returns an effectively equivalent angle in the unsigned interval `[0°, 360°)`.
    ///
    /// Idempotent: wrapping an already-wrapped angle is a no-op.
    ///
    /// ```rust
    /// use gonio_core::Angle;
    ///
    /// assert_eq!(Angle::from_degrees(-90.0).wrap_unsigned().degrees(), 270.0);
    /// assert_eq!(Angle::from_degrees(1080.0).wrap_unsigned().degrees(), 0.0);
    /// ```
    #[must_use]
    pub fn wrap_unsigned(self) -> Self {
        let mut d = fmod(self.0, 360.0);
        if d < 0.0 {
            d += 360.0;
        }
        Self(d)
    }

    /// Returns an effectively equivalent angle in the signed interval `(-180°, 180°]`.
    ///
    /// Idempotent. Be wary combining this with arithmetic: `-90°` and `270°` are equivalent once
    /// wrapped, but `-90° * 2` is not equal to `270° * 2`.
    ///
    /// ```rust
    /// use gonio_core::Angle;
    ///
    /// assert_eq!(Angle::from_degrees(315.0).wrap_signed().degrees(), -45.0);
    /// assert_eq!(Angle::from_degrees(-180.0).wrap_signed().degrees(), 180.0);
    /// ```
    #[must_use]
    pub fn wrap_signed(self) -> Self {
        let mut d = fmod(self.0, 360.0);
        if d <= -180.0 {
            d += 360.0;
        } else if d > 180.0 {
            d -= 360.0;
        }
        Self(d)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparison helpers
    // ─────────────────────────────────────────────────────────────────────────────

    /// Returns true iff the raw degree values differ by at most `tolerance` degrees.
    ///
    /// The comparison is absolute, not interval-aware: `0°` and `360°` are 360° apart here.
    /// Wrap both sides first to compare rotations.
    #[inline]
    pub fn approx_eq(self, other: Self, tolerance: Self) -> bool {
        (self.0 - other.0).abs() <= tolerance.0
    }

    /// Returns the absolute value of `self`.
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Sign of the raw degree value (same semantics as [`f64::signum`]).
    #[inline]
    pub const fn signum(self) -> f64 {
        self.0.signum()
    }

    /// Returns the minimum of `self` and `other`.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the maximum of `self` and `other`.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Returns `self` clamped to the range `min..=max`.
    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(self.0.clamp(min.0, max.0))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Interpolation and separation
    // ─────────────────────────────────────────────────────────────────────────────

    /// Linearly interpolates between `from` and `to` on the raw degree values, with `alpha`
    /// clamped to `[0, 1]`.
    ///
    /// This does **not** take the shortest angular path; `lerp(350°, 10°, 0.5)` is `180°`, not
    /// `0°`. Wrap the endpoints, or interpolate a [`signed_separation`](Angle::signed_separation),
    /// to move along the short way around.
    pub fn lerp(from: Self, to: Self, alpha: f64) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        from + (to - from) * alpha
    }

    /// Subtracts `subtrahend` from `self` and returns the smallest signed difference, in
    /// `(-180°, 180°]`.
    ///
    /// ```rust
    /// use gonio_core::Angle;
    ///
    /// let a = Angle::from_degrees(180.0);
    /// let b = Angle::from_degrees(-184.0);
    /// assert_eq!(a.signed_separation(b).degrees(), 4.0);
    /// ```
    #[inline]
    pub fn signed_separation(self, subtrahend: Self) -> Self {
        (self - subtrahend).wrap_signed()
    }

    /// Absolute smallest angular separation (magnitude only).
    #[inline]
    pub fn abs_separation(self, other: Self) -> Self {
        self.signed_separation(other).abs()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Trigonometry
    // ─────────────────────────────────────────────────────────────────────────────

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        let x = self.radians();
        #[cfg(feature = "std")]
        {
            x.sin()
        }
        #[cfg(not(feature = "std"))]
        {
            crate::libm::sin(x)
        }
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        let x = self.radians();
        #[cfg(feature = "std")]
        {
            x.cos()
        }
        #[cfg(not(feature = "std"))]
        {
            crate::libm::cos(x)
        }
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        let x = self.radians();
        #[cfg(feature = "std")]
        {
            x.tan()
        }
        #[cfg(not(feature = "std"))]
        {
            crate::libm::tan(x)
        }
    }

    /// Simultaneously computes the sine and cosine of the angle.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        let x = self.radians();
        #[cfg(feature = "std")]
        {
            x.sin_cos()
        }
        #[cfg(not(feature = "std"))]
        {
            (crate::libm::sin(x), crate::libm::cos(x))
        }
    }
}

/// Four-quadrant arctangent of `y` and `x` as an [`Angle`].
#[inline]
pub(crate) fn atan2(y: f64, x: f64) -> Angle {
    #[cfg(feature = "std")]
    {
        Angle::from_radians(y.atan2(x))
    }
    #[cfg(not(feature = "std"))]
    {
        Angle::from_radians(crate::libm::atan2(y, x))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Add for Angle {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Angle {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// Negation returns the counter rotation. Negating an unsigned angle yields the conjugate angle.
impl Neg for Angle {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul for Angle {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: Angle) -> Angle {
        rhs * self
    }
}

/// Division of two angles yields the raw degree ratio as an [`Angle`], not a unitless number.
impl Div for Angle {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Div<f64> for Angle {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

impl Rem for Angle {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Self(fmod(self.0, rhs.0))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────────

impl From<Vec2> for Angle {
    /// Converts a Cartesian 2-vector to the angle between it and the positive x axis, in
    /// `(-180°, 180°]`, via `atan2(y, x)`.
    #[inline]
    fn from(vector: Vec2) -> Self {
        atan2(vector.y, vector.x)
    }
}

impl From<Angle> for Euler {
    /// Converts an angle to a rotation about the vertical axis, counterclockwise when viewed
    /// from above (the degree value is negated to encode the clockwise-from-above convention).
    #[inline]
    fn from(angle: Angle) -> Self {
        Euler::new(Angle::ZERO, -angle, Angle::ZERO)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting and serde
// ─────────────────────────────────────────────────────────────────────────────

impl Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.display_in::<Degree>(), f)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Angle {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let degrees = f64::deserialize(deserializer)?;
        Ok(Angle::from_degrees(degrees))
    }
}
