//! Angles and polar-family coordinates with explicit units and explicit normalization.
//!
//! `gonio` is the user-facing crate in this workspace. It re-exports the full API from
//! `gonio-core`: the canonical [`Angle`] type, twelve angular units, and four coordinate types
//! built on top of it.
//!
//! The core idea is: an angle is always stored as **degrees** in a single `f64`, and every other
//! unit (radians, arcminutes, grads, winds, binary degrees, …) is a *view* computed through
//! one shared table of revolution sizes. Nothing normalizes behind your back: arithmetic acts on
//! raw degree values, and wrapping into `[0°, 360°)` or `(-180°, 180°]` is always a visible
//! method call.
//!
//! # What this crate solves
//!
//! - Twelve angular units that stay mutually consistent under round trips.
//! - Explicit signed/unsigned interval normalization and smallest-signed-difference helpers.
//! - 2D polar, yaw/pitch, cylindrical, and azimuth/zenith coordinates with a uniform
//!   componentwise algebra and pure Cartesian conversions.
//! - Re-parameterization of out-of-range pitch/zenith that preserves the represented direction
//!   by flipping the opposing hemisphere.
//!
//! # What this crate does not try to solve
//!
//! - General vector, matrix, or quaternion algebra; the [`Vec2`]/[`Vec3`]/[`Euler`] carriers
//!   exist to hand values to whatever math stack renders them.
//! - Shortest-path interpolation (`lerp` is linear in raw degree space by contract).
//! - Exact arithmetic: everything is `f64`.
//!
//! # Quick start
//!
//! Wrap an angle and read it in another unit:
//!
//! ```rust
//! use gonio::{units::Grad, Angle};
//!
//! let a = Angle::from_degrees(315.0);
//! assert_eq!(a.wrap_signed().degrees(), -45.0);
//! assert!((a.to::<Grad>() - 350.0).abs() < 1e-12);
//! ```
//!
//! Convert a pointer direction to a rotation about the vertical axis:
//!
//! ```rust
//! use gonio::{Angle, Euler, Vec2};
//!
//! let pointer = Vec2::new(0.0, 1.0);
//! let rotation = Euler::from(Angle::from(pointer));
//! assert!((rotation.y.degrees() + 90.0).abs() < 1e-12);
//! ```
//!
//! Re-parameterize an overflowing pitch:
//!
//! ```rust
//! use gonio::{Angle, Polar3};
//!
//! let p = Polar3::new(1.0, Angle::ZERO, Angle::from_degrees(100.0)).signed_pitch();
//! assert_eq!(p.pitch.degrees(), 80.0);
//! assert_eq!(p.yaw.degrees(), 180.0);
//! ```
//!
//! # Modules
//!
//! - [`units`]: the twelve unit marker types (also usable with [`Angle::to`] / [`Angle::of`]).
//! - [`coords`]: [`Polar2`], [`Polar3`], [`Cylindric3`], [`Spherical3`] (re-exported at the
//!   root for convenience).
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `gonio-core`.
//! - `serde`: enables `serde` support; an [`Angle`] serializes as its raw degree `f64`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! gonio = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core
//! operations. Conversions and arithmetic are pure `f64` computations; they do not panic on
//! their own, but they follow IEEE-754 behavior (NaN and infinities propagate according to the
//! underlying operation).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until
//! `1.0`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use gonio_core::*;

/// Derive macro used by `gonio-core` to define angular unit marker types.
pub use gonio_derive::AngleUnit;
