//! Core types for angles and polar-family coordinates.
//!
//! `gonio-core` provides a small, zero-cost angular model:
//!
//! - A canonical [`Angle`] backed by a single `f64` holding **degrees**.
//! - Twelve angular *units* as zero-sized marker types implementing [`AngleUnit`]; every unit is
//!   a view computed from one shared revolution table, never stored.
//! - Wrapping into the unsigned `[0°, 360°)` and signed `(-180°, 180°]` intervals.
//! - Four coordinate types built on `Angle` ([`Polar2`], [`Polar3`], [`Cylindric3`], and
//!   [`Spherical3`]) with componentwise arithmetic, `positive`/interval views, branch-on-overflow
//!   re-parameterization of pitch and zenith, and pure Cartesian conversions through [`Vec2`] and
//!   [`Vec3`].
//!
//! Most users should depend on `gonio` (the facade crate) unless they need direct access to
//! these primitives.
//!
//! # What this crate solves
//!
//! - One storage unit (degrees) with explicit, table-driven conversion to eleven others.
//! - Explicit normalization: arithmetic acts on raw values; wrapping is always a visible call.
//! - A consistent componentwise algebra applied uniformly across all coordinate types.
//!
//! # What this crate does not try to solve
//!
//! - General vector or quaternion algebra; [`Vec2`]/[`Vec3`]/[`Euler`] are interchange carriers
//!   for whatever math stack consumes the converted values.
//! - Exact arithmetic (everything is `f64`).
//! - Shortest-path interpolation; `lerp` is linear in raw degree space by contract.
//!
//! # Quick start
//!
//! ```rust
//! use gonio_core::{units::Grad, Angle, Polar2, Vec2};
//!
//! let a = Angle::from_degrees(-90.0);
//! assert_eq!(a.wrap_unsigned().degrees(), 270.0);
//! assert!((a.to::<Grad>() + 100.0).abs() < 1e-12);
//!
//! let p = Polar2::new(-1.0, Angle::RIGHT).positive();
//! assert_eq!(p.angle.degrees(), 270.0);
//! let v = Vec2::from(p);
//! assert!((v.y + 1.0).abs() < 1e-12);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `gonio-core` without `std`; trigonometry and remainders
//! then come from the `libm` crate:
//!
//! ```toml
//! [dependencies]
//! gonio-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support; an [`Angle`] serializes as its raw degree `f64`, and the
//!   coordinate types serialize field-wise.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core
//! operations. Conversions and arithmetic are pure `f64` computations; they do not panic on
//! their own, but they follow IEEE-754 behavior (NaN and infinities propagate according to the
//! underlying operation). Division by a zero angle or scalar yields `±∞` or NaN and is not
//! treated as a failure.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod angle;
mod rotation;
mod unit;
mod vector;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use angle::Angle;
pub use rotation::Euler;
pub use unit::{AngleUnit, InUnit};
pub use vector::{vec2, vec3, Vec2, Vec3};

/// Predefined angular unit marker types.
///
/// These are defined in `gonio-core` so the derive can implement [`AngleUnit`] in terms of the
/// crate root without running into Rust's orphan rules.
pub mod units;

/// Coordinate types built on [`Angle`].
pub mod coords;

pub use coords::{Cylindric3, Polar2, Polar3, Spherical3};
