//! Polar-family coordinate types built on [`Angle`](crate::Angle).
//!
//! All four types follow one template: plain value aggregates with componentwise arithmetic
//! across every field (angle fields forward to `Angle`'s operators), structural equality, a
//! `positive` view that absorbs a negative length into the azimuthal angle, interval views for
//! each angular field, componentwise `lerp`/`lerp_unclamped`, and pure Cartesian conversions.
//!
//! ## Modules
//!
//! - [`polar2`]: length + angle in a 2D plane.
//! - [`polar3`]: length + yaw + pitch, a "look" direction in 3D.
//! - [`cylindric3`]: length + height + angle (cylindrical coordinates).
//! - [`spherical3`]: length + azimuth + zenith (conventional spherical coordinates).

pub mod cylindric3;
pub mod polar2;
pub mod polar3;
pub mod spherical3;

pub use cylindric3::Cylindric3;
pub use polar2::Polar2;
pub use polar3::Polar3;
pub use spherical3::Spherical3;
