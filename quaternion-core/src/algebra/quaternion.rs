//! Quaternions for composing and applying 3D rotations.
//!
//! A quaternion is a scalar `s` paired with a vector `v`. The set is closed under the
//! Hamilton product, and the unit quaternions (`s² + |v|² = 1`) encode rotations.
//! Everything in this module is built from [`Vector3`] operations.
//!
//! # The Hamilton Product
//!
//! For `a = (a.s, a.v)` and `b = (b.s, b.v)`:
//!
//! ```text
//! s = a.s * b.s - a.v · b.v
//! v = a.s * b.v + b.s * a.v + a.v × b.v
//! ```
//!
//! The cross term makes the product non-commutative. With `i`, `j`, `k` the pure
//! quaternions along the axes, `i * j = k` but `j * i = -k`:
//!
//! ```
//! use quaternion_core::{Quaternion, Vector3};
//!
//! let i = Quaternion::pure(Vector3::x_axis());
//! let j = Quaternion::pure(Vector3::y_axis());
//!
//! assert_eq!((i * j).v, Vector3::z_axis());
//! assert_eq!((j * i).v, -Vector3::z_axis());
//! ```
//!
//! Multiplying by an `f64` scales both parts; multiplying by a [`Vector3`] first
//! promotes it to the pure quaternion `(0, v)`.
//!
//! # Conjugate, Magnitude, Reciprocal
//!
//! - [`conjugate`](Quaternion::conjugate) negates the vector part only.
//! - [`norm_squared`](Quaternion::norm_squared) is the scalar part of `q * q.conjugate()`,
//!   which equals `s² + |v|²`.
//! - [`reciprocal`](Quaternion::reciprocal) is `conjugate / |q|²`, so that
//!   `q * q.reciprocal() = 1`. The zero quaternion has no reciprocal and returns a
//!   [`DivisionByZero`](crate::MathErrorKind::DivisionByZero) error.
//!
//! There is no unary `-` on [`Quaternion`]; conjugation is the named method.
//!
//! # Rotation Conventions
//!
//! Two sandwich products are provided. For `q = (cos θ/2, n sin θ/2)` built by
//! [`from_axis_angle`](Quaternion::from_axis_angle):
//!
//! | Method | Product | Effect |
//! |--------|---------|--------|
//! | [`rotate_point`](Quaternion::rotate_point) | `q · p · q⁻¹` | rotates the point by +θ about `n` |
//! | [`transform_point`](Quaternion::transform_point) | `q⁻¹ · p · q` | rotates the frame by +θ, the point by −θ |
//!
//! `transform_point` is the "passive" convention: a positive rotation of 90° about Z
//! takes `[1, 0, 0]` to `[0, -1, 0]`, the same as a frame rotation matrix.
//!
//! ```
//! use quaternion_core::{Quaternion, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let q = Quaternion::from_axis_angle(Vector3::z_axis(), FRAC_PI_2).unwrap();
//! let p = Vector3::x_axis();
//!
//! let active = q.rotate_point(p).unwrap();
//! assert!(active.approx_eq(&Vector3::y_axis(), 1e-14));
//!
//! let passive = q.transform_point(p).unwrap();
//! assert!(passive.approx_eq(&-Vector3::y_axis(), 1e-14));
//! ```
//!
//! Both products divide by `|q|²` through the reciprocal, so they are
//! scale-invariant: `2q` rotates exactly like `q`. Only the zero quaternion fails.

use super::Vector3;
use crate::constants::{DISPLAY_PRECISION, QUATERNION_LEN, VECTOR3_LEN};
use crate::parse::ToComponent;
use crate::{AlgebraError, AlgebraResult, MathErrorKind};
use std::fmt;

/// A quaternion with scalar part `s` and vector part `v`.
///
/// The type does not track normalization. Any quaternion can be multiplied; only
/// non-zero ones have a reciprocal, and only unit ones are rotations in the strict
/// sense (the point transforms tolerate any non-zero scale).
///
/// ```
/// use quaternion_core::{Quaternion, Vector3};
///
/// let q = Quaternion::new(1.0, Vector3::new(2.0, 3.0, 4.0));
/// let r = Quaternion::from_array([1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(q, r);
/// assert_eq!(q[0], 1.0);
/// assert_eq!(q[3], 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub s: f64,
    pub v: Vector3,
}

impl Quaternion {
    #[inline]
    pub fn new(s: f64, v: Vector3) -> Self {
        Self { s, v }
    }

    /// The multiplicative identity `(1, (0, 0, 0))`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, Vector3::zeros())
    }

    /// The pure quaternion `(0, v)`.
    #[inline]
    pub fn pure(v: Vector3) -> Self {
        Self::new(0.0, v)
    }

    /// Builds the unit quaternion for a rotation of `angle` radians about `axis`.
    ///
    /// The axis does not need to be normalized, but it must not be the zero vector.
    pub fn from_axis_angle(axis: Vector3, angle: f64) -> AlgebraResult<Self> {
        let n = axis.unit()?;
        let (sin_half, cos_half) = libm::sincos(angle * 0.5);
        Ok(Self::new(cos_half, n * sin_half))
    }

    /// Creates a quaternion from `[s, x, y, z]`.
    #[inline]
    pub fn from_array(arr: [f64; 4]) -> Self {
        Self::new(arr[0], Vector3::new(arr[1], arr[2], arr[3]))
    }

    /// Returns the components as `[s, x, y, z]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.s, self.v.x, self.v.y, self.v.z]
    }

    /// Returns the component at the given index (0=s, 1=x, 2=y, 3=z).
    pub fn get(&self, index: usize) -> AlgebraResult<f64> {
        match index {
            0 => Ok(self.s),
            1..=3 => self.v.get(index - 1),
            _ => Err(AlgebraError::index_out_of_range(
                "Quaternion::get",
                index,
                QUATERNION_LEN,
            )),
        }
    }

    /// Sets the component at the given index (0=s, 1=x, 2=y, 3=z).
    pub fn set(&mut self, index: usize, value: f64) -> AlgebraResult<()> {
        match index {
            0 => {
                self.s = value;
                Ok(())
            }
            1..=3 => self.v.set(index - 1, value),
            _ => Err(AlgebraError::index_out_of_range(
                "Quaternion::set",
                index,
                QUATERNION_LEN,
            )),
        }
    }

    /// Converts `value` to `f64` and stores it at `index`.
    pub fn set_component<T: ToComponent>(&mut self, index: usize, value: T) -> AlgebraResult<()> {
        if index >= QUATERNION_LEN {
            return Err(AlgebraError::index_out_of_range(
                "Quaternion::set_component",
                index,
                QUATERNION_LEN,
            ));
        }
        let value = value.to_component()?;
        self.set(index, value)
    }

    /// The Hamilton product `self * other`. Order matters.
    pub fn hamilton_product(&self, other: &Self) -> Self {
        Self::new(
            self.s * other.s - self.v.dot(&other.v),
            other.v * self.s + self.v * other.s + self.v.cross(&other.v),
        )
    }

    /// Scales both parts by `k`.
    #[inline]
    pub fn scale(&self, k: f64) -> Self {
        Self::new(self.s * k, self.v * k)
    }

    /// `(s, -v)`: the scalar part is unchanged.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.s, -self.v)
    }

    /// The scalar part of `self * self.conjugate()`, equal to `s² + |v|²`.
    pub fn norm_squared(&self) -> f64 {
        self.hamilton_product(&self.conjugate()).s
    }

    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.norm_squared())
    }

    /// Returns `conjugate / |q|²`, the multiplicative inverse.
    ///
    /// Fails with [`DivisionByZero`](MathErrorKind::DivisionByZero) for the zero quaternion.
    pub fn reciprocal(&self) -> AlgebraResult<Self> {
        let norm_squared = self.norm_squared();
        if norm_squared == 0.0 {
            return Err(AlgebraError::math_error(
                "Quaternion::reciprocal",
                MathErrorKind::DivisionByZero,
                "quaternion has zero magnitude",
            ));
        }
        Ok(self.conjugate() * (1.0 / norm_squared))
    }

    /// Returns the quaternion scaled to unit magnitude.
    pub fn normalize(&self) -> AlgebraResult<Self> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(AlgebraError::math_error(
                "Quaternion::normalize",
                MathErrorKind::DivisionByZero,
                "quaternion has zero magnitude",
            ));
        }
        Ok(self.scale(1.0 / magnitude))
    }

    /// Returns `true` if `|s² + |v|² - 1| <= tolerance`.
    pub fn is_unit(&self, tolerance: f64) -> bool {
        (self.norm_squared() - 1.0).abs() <= tolerance
    }

    /// Applies the sandwich product `q⁻¹ · p · q` and returns its vector part.
    ///
    /// See the [module docs](self) for the rotation direction this implies.
    pub fn transform_point(&self, point: Vector3) -> AlgebraResult<Vector3> {
        let inverse = self.reciprocal()?;
        Ok((inverse * point * *self).v)
    }

    /// [`transform_point`](Self::transform_point) for a point given as a slice.
    ///
    /// Fails with [`InvalidLength`](AlgebraError::InvalidLength) unless the slice
    /// holds exactly three coordinates.
    pub fn transform_sequence(&self, point: &[f64]) -> AlgebraResult<Vector3> {
        if point.len() != VECTOR3_LEN {
            return Err(AlgebraError::invalid_length(
                "Quaternion::transform_sequence",
                VECTOR3_LEN,
                point.len(),
            ));
        }
        self.transform_point(Vector3::try_from(point)?)
    }

    /// Applies the sandwich product `q · p · q⁻¹` and returns its vector part.
    pub fn rotate_point(&self, point: Vector3) -> AlgebraResult<Vector3> {
        let inverse = self.reciprocal()?;
        Ok((*self * point * inverse).v)
    }

    /// Returns `true` if every component differs from `other`'s by at most `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.s - other.s).abs() <= tolerance && self.v.approx_eq(&other.v, tolerance)
    }
}

impl std::ops::Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.s + rhs.s, self.v + rhs.v)
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.hamilton_product(&rhs)
    }
}

impl std::ops::Mul<&Quaternion> for &Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: &Quaternion) -> Quaternion {
        self.hamilton_product(rhs)
    }
}

impl std::ops::Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        self.scale(k)
    }
}

/// Quaternion * Vector, with the vector promoted to `(0, v)`
impl std::ops::Mul<Vector3> for Quaternion {
    type Output = Self;

    fn mul(self, v: Vector3) -> Self {
        self.hamilton_product(&Self::pure(v))
    }
}

/// q[i] indexing over `[s, x, y, z]` (panics if i > 3)
impl std::ops::Index<usize> for Quaternion {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.s,
            1 => &self.v.x,
            2 => &self.v.y,
            3 => &self.v.z,
            _ => panic!("Quaternion index out of bounds: {}", index),
        }
    }
}

/// q[i] = value mutable indexing (panics if i > 3)
impl std::ops::IndexMut<usize> for Quaternion {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.s,
            1 => &mut self.v.x,
            2 => &mut self.v.y,
            3 => &mut self.v.z,
            _ => panic!("Quaternion index out of bounds: {}", index),
        }
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(arr: [f64; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vector3> for Quaternion {
    fn from(v: Vector3) -> Self {
        Self::pure(v)
    }
}

/// `(s, (x, y, z))`, or just `(x, y, z)` when `s` is exactly zero.
///
/// A scalar part of `1e-300` still prints the long form as `(0.00, (...))`.
impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = DISPLAY_PRECISION;
        if self.s != 0.0 {
            write!(f, "({:.p$}, {})", self.s, self.v)
        } else {
            write!(f, "{}", self.v)
        }
    }
}
