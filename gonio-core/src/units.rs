//! Predefined angular units.
//!
//! Each unit is a zero-sized marker type implementing [`AngleUnit`] through the derive from
//! `gonio-derive`. The derive records the unit's **revolution size** (how many of that unit make
//! one full turn), which is the single table every conversion in [`Angle`](crate::Angle) reads
//! from. Degrees are the canonical *storage* unit: `Degree::REVOLUTION == 360.0`, and all other
//! units are fixed rescalings of it.
//!
//! Revolution sizes follow the conventional definitions: 2π radians, 21 600 arcminutes, 400
//! grads, 32 winds, and so on.
//!
//! ```rust
//! use gonio_core::{units::{Grad, HourAngle}, Angle};
//!
//! let a = Angle::of::<Grad>(100.0);
//! assert!((a.degrees() - 90.0).abs() < 1e-12);
//! assert!((a.to::<HourAngle>() - 6.0).abs() < 1e-12);
//! ```

use gonio_derive::AngleUnit;

/// Degree. 360 degrees is a revolution. Degrees are typically user-defined as rational numbers,
/// which is why [`Angle`](crate::Angle) stores them directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AngleUnit)]
#[angle_unit(symbol = "deg", revolution = 360.0)]
pub struct Degree;

/// Radian. 2π (~6.28) radians is a revolution. Radians are typically user-defined as irrational
/// multiples of π, which loses information in floating point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AngleUnit)]
#[angle_unit(symbol = "rad", revolution = core::f64::consts::TAU)]
pub struct Radian;

/// Arcminute. 21 600 arcminutes is a revolution; one arcminute is 1/60 of a degree. Not a unit
/// of time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AngleUnit)]
#[angle_unit(symbol = "arcmin", revolution = 21_600.0)]
pub struct Arcminute;
/// Alias for [`Arcminute`] (minute of angle, MOA).
pub type Moa = Arcminute;

/// Arcsecond. 1 296 000 arcseconds is a revolution; one arcsecond is 1/3600 of a degree. Not a
/// unit of time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AngleUnit)]
#[angle_unit(symbol = "arcsec", revolution = 1_296_000.0)]
pub struct Arcsecond;

/// Grad, also called grade, gradian, or gon. 400 grads is a revolution; a decimal subunit of the
/// quadrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AngleUnit)]
#[angle_unit(symbol = "grad", revolution = 400.0)]
pub struct Grad;
/// Alias for [`Grad`].
pub type Gon = Grad;

/// Turn, also cycle, revolution, or rotation. 1 turn is a revolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AngleUnit)]
#[angle_unit(symbol = "turn", revolution = 1.0)]
pub struct Turn;

/// Hour angle. 24 hour angles is a revolution; an astronomical unit of angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AngleUnit)]
#[angle_unit(symbol = "h", revolution = 24.0)]
pub struct HourAngle;

/// Wind, or compass point. 32 winds is a revolution; used in navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AngleUnit)]
#[angle_unit(symbol = "wind", revolution = 32.0)]
pub struct Wind;

/// Milliradian. 2000π milliradians is a revolution; the true milliradian is a thousandth of a
/// radian.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AngleUnit)]
#[angle_unit(symbol = "mrad", revolution = 2_000.0 * core::f64::consts::PI)]
pub struct Milliradian;

/// Binary degree, also binary radian or brad. 256 binary degrees is a revolution, so one fits in
/// a byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AngleUnit)]
#[angle_unit(symbol = "brad", revolution = 256.0)]
pub struct BinaryDegree;
/// Alias for [`BinaryDegree`].
pub type Brad = BinaryDegree;

/// Quadrant. 4 quadrants is a revolution; one quadrant is a right angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AngleUnit)]
#[angle_unit(symbol = "quad", revolution = 4.0)]
pub struct Quadrant;

/// Sextant. 6 sextants is a revolution; the angle of the equilateral triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AngleUnit)]
#[angle_unit(symbol = "sext", revolution = 6.0)]
pub struct Sextant;
