//! Euler-angle rotation carrier.

use core::fmt::{self, Display};

use crate::angle::Angle;

/// An intrinsic x-y-z Euler rotation, produced by the coordinate conversions for consumption by
/// a renderer with a y-up, clockwise-from-above orientation convention.
///
/// This is only a carrier type: it records the three rotation angles and performs no rotation
/// math itself. The sign conventions baked into [`From<Angle>`](crate::Angle) and
/// [`From<Spherical3>`](crate::Spherical3) are an external contract of the consuming renderer
/// and must not be altered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Euler {
    /// Rotation about the x axis.
    pub x: Angle,
    /// Rotation about the (vertical) y axis.
    pub y: Angle,
    /// Rotation about the z axis.
    pub z: Angle,
}

impl Euler {
    /// The identity rotation.
    pub const ZERO: Self = Self::new(Angle::ZERO, Angle::ZERO, Angle::ZERO);

    /// Creates a rotation from its three component angles.
    #[inline]
    pub const fn new(x: Angle, y: Angle, z: Angle) -> Self {
        Self { x, y, z }
    }
}

impl Display for Euler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_identity() {
        assert_eq!(Euler::ZERO.x, Angle::ZERO);
        assert_eq!(Euler::ZERO, Euler::default());
    }

    #[test]
    fn display() {
        let r = Euler::new(Angle::ZERO, Angle::from_degrees(-90.0), Angle::ZERO);
        assert_eq!(format!("{}", r), "(0 deg, -90 deg, 0 deg)");
    }
}
