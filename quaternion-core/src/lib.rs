//! 3D vectors and quaternions for composing and applying rotations.
//!
//! `quaternion-core` provides two small `Copy` value types and the algebra between
//! them. [`Quaternion`] is built entirely on [`Vector3`]: its product, conjugate,
//! magnitude and reciprocal all decompose into dot products, cross products,
//! scalings and sums.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`algebra`] | [`Vector3`], [`Quaternion`], runtime [`Operand`] dispatch |
//! | [`parse`] | Numeric component coercion and `"(x, y, z)"` parsing |
//! | [`constants`] | Component counts, tolerances, angle constants |
//! | [`errors`] | [`AlgebraError`] and [`AlgebraResult`] |
//!
//! # Rotating a Point
//!
//! ```
//! use quaternion_core::{Quaternion, Vector3};
//! use std::f64::consts::FRAC_PI_4;
//!
//! // 90° about Z
//! let q = Quaternion::new(FRAC_PI_4.cos(), Vector3::new(0.0, 0.0, FRAC_PI_4.sin()));
//!
//! let p = q.rotate_point(Vector3::new(1.0, 0.0, 0.0)).unwrap();
//! assert!(p.approx_eq(&Vector3::new(0.0, 1.0, 0.0), 1e-14));
//!
//! // The frame convention q⁻¹·p·q moves the point the other way.
//! let p = q.transform_point(Vector3::new(1.0, 0.0, 0.0)).unwrap();
//! assert!(p.approx_eq(&Vector3::new(0.0, -1.0, 0.0), 1e-14));
//! ```
//!
//! # Design Notes
//!
//! - **Plain `f64` fields**: components are public and need no conversion on
//!   assignment. Other numeric types and text go through [`parse::ToComponent`].
//!
//! - **Typed division by zero**: [`Vector3::unit`], [`Quaternion::reciprocal`] and the
//!   point transforms return [`MathErrorKind::DivisionByZero`] instead of NaN.
//!   Non-finite inputs are not rejected and propagate per IEEE 754.
//!
//! - **No logging setup**: failures emit `tracing` events at `debug`/`trace` level.
//!   Install a subscriber in the application to see them.
//!
//! - **Optional serde**: enable the `serde` feature to derive `Serialize` and
//!   `Deserialize` for both types.

pub mod algebra;
pub mod constants;
pub mod errors;
pub mod parse;

pub use algebra::{Operand, Product, Quaternion, Vector3};
pub use errors::{AlgebraError, AlgebraResult, MathErrorKind};

pub mod test_helpers;
