//! Angular unit types and traits.

use core::fmt::{Debug, Display, Formatter, Result};
use core::marker::PhantomData;

/// Trait implemented by every **angular unit** marker type.
///
/// * `REVOLUTION` is the size of one full revolution expressed in this unit.
///   Example: `Degree::REVOLUTION == 360.0`, `Grad::REVOLUTION == 400.0`,
///   `Turn::REVOLUTION == 1.0`.
///
/// * `SYMBOL` is the printable string (e.g. `"deg"` or `"grad"`).
///
/// [`Angle`](crate::Angle) stores degrees as its single source of truth; every other unit is a view scaled by
/// `REVOLUTION / 360.0`. Reading unit `U` returns `degrees * (U::REVOLUTION / 360.0)`, and
/// constructing from unit `U` stores `value * (360.0 / U::REVOLUTION)`, so all units are
/// consistent under round trips to within floating-point rounding.
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types (this crate's built-in units are unit
///   structs with no fields).
/// - `REVOLUTION` should be finite and positive.
pub trait AngleUnit: Copy + PartialEq + Debug + 'static {
    /// Size of one full revolution expressed in this unit.
    const REVOLUTION: f64;

    /// Printable symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;
}

/// An [`Angle`](crate::Angle) value captured in a specific unit, for display purposes.
///
/// Returned by [`Angle::display_in`](crate::Angle::display_in). Formats as `<value> <symbol>`
/// and forwards formatter flags,
/// so callers can control precision:
///
/// ```rust
/// use gonio_core::{units::Grad, Angle};
///
/// let a = Angle::from_degrees(90.0);
/// assert_eq!(format!("{:.2}", a.display_in::<Grad>()), "100.00 grad");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InUnit<U: AngleUnit>(f64, PhantomData<U>);

impl<U: AngleUnit> InUnit<U> {
    pub(crate) const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value in unit `U`.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl<U: AngleUnit> Display for InUnit<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(&self.0, f)?;
        f.write_str(" ")?;
        f.write_str(U::SYMBOL)
    }
}
