//! 3D Cartesian vectors.
//!
//! [`Vector3`] is the building block of the crate: every quaternion operation
//! decomposes into the dot products, cross products, scalings and sums defined here.
//!
//! # Products
//!
//! The `*` operator is overloaded on the right operand:
//!
//! - `Vector3 * Vector3` is the **dot product** and returns an `f64`
//! - `Vector3 * f64` and `f64 * Vector3` scale the vector
//!
//! The cross product has no operator; call [`cross`](Vector3::cross).
//!
//! ```
//! use quaternion_core::Vector3;
//!
//! let a = Vector3::x_axis();
//! let b = Vector3::y_axis();
//!
//! // Perpendicular: dot product is zero
//! assert_eq!(a * b, 0.0);
//!
//! // Cross product gives +Z axis (right-hand rule)
//! assert_eq!(a.cross(&b), Vector3::z_axis());
//!
//! // Scaling works from either side
//! assert_eq!(a * 2.0, 2.0 * a);
//! ```
//!
//! # Unit Vectors
//!
//! [`unit`](Vector3::unit) divides by the length, so the zero vector has no unit
//! vector. Instead of producing NaN components it returns a
//! [`DivisionByZero`](crate::MathErrorKind::DivisionByZero) error:
//!
//! ```
//! use quaternion_core::Vector3;
//!
//! let v = Vector3::new(3.0, 4.0, 0.0);
//! let unit = v.unit().unwrap();
//! assert!((unit.length() - 1.0).abs() < 1e-15);
//!
//! assert!(Vector3::zeros().unit().is_err());
//! ```
use crate::constants::{DISPLAY_PRECISION, VECTOR3_LEN};
use crate::parse::{parse_triple, ToComponent};
use crate::{AlgebraError, AlgebraResult, MathErrorKind};
use std::fmt;
use std::str::FromStr;

/// A 3D Cartesian vector.
///
/// Components are public `f64` fields; assigning to them needs no conversion.
/// Values of other numeric types (or text) go through
/// [`try_from_components`](Self::try_from_components) and
/// [`set_component`](Self::set_component).
///
/// ```
/// use quaternion_core::Vector3;
///
/// let v = Vector3::new(1.0, 2.0, 3.0);
/// let w = Vector3::from_array([1.0, 2.0, 3.0]);
/// let u: Vector3 = "(1, 2, 3)".parse().unwrap();
/// let t = Vector3::try_from_components(1, 2_u8, "3").unwrap();
/// assert!(v == w && w == u && u == t);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector from components of any convertible type.
    ///
    /// Fails with [`NumericConversion`](AlgebraError::NumericConversion) if a
    /// component is text that is not a number.
    pub fn try_from_components<X, Y, Z>(x: X, y: Y, z: Z) -> AlgebraResult<Self>
    where
        X: ToComponent,
        Y: ToComponent,
        Z: ToComponent,
    {
        Ok(Self::new(
            x.to_component()?,
            y.to_component()?,
            z.to_component()?,
        ))
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Returns the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2. For unchecked access, use
    /// indexing syntax `v[i]` or the public fields directly.
    pub fn get(&self, index: usize) -> AlgebraResult<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(AlgebraError::index_out_of_range(
                "Vector3::get",
                index,
                VECTOR3_LEN,
            )),
        }
    }

    /// Sets the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2. For unchecked access, use
    /// indexing syntax `v[i] = value` or the public fields directly.
    pub fn set(&mut self, index: usize, value: f64) -> AlgebraResult<()> {
        let slot = match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => {
                return Err(AlgebraError::index_out_of_range(
                    "Vector3::set",
                    index,
                    VECTOR3_LEN,
                ))
            }
        };
        *slot = value;
        Ok(())
    }

    /// Converts `value` to `f64` and stores it at `index`.
    ///
    /// The index is checked before the value is converted; the vector is left
    /// unchanged on either failure.
    pub fn set_component<T: ToComponent>(&mut self, index: usize, value: T) -> AlgebraResult<()> {
        if index >= VECTOR3_LEN {
            return Err(AlgebraError::index_out_of_range(
                "Vector3::set_component",
                index,
                VECTOR3_LEN,
            ));
        }
        let value = value.to_component()?;
        self.set(index, value)
    }

    /// Computes the dot product with another vector.
    ///
    /// ```
    /// use quaternion_core::Vector3;
    ///
    /// let c = Vector3::new(1.0, 2.0, 3.0);
    /// let d = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(c.dot(&d), 32.0);  // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with another vector.
    ///
    /// The result is perpendicular to both inputs, with direction given by the
    /// right-hand rule. Anticommutative: `a.cross(&b) == -b.cross(&a)`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Multiplies every component by `k`.
    #[inline]
    pub fn scale(&self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    /// Componentwise negation, defined as `self * -1`.
    #[inline]
    pub fn negate(&self) -> Self {
        self.scale(-1.0)
    }

    /// Returns the Euclidean length, `sqrt(self · self)`.
    #[inline]
    pub fn length(&self) -> f64 {
        libm::sqrt(self.dot(self))
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Returns the vector scaled by `1 / length`.
    ///
    /// Fails with [`DivisionByZero`](MathErrorKind::DivisionByZero) when the length is
    /// exactly zero. NaN or infinite components are not rejected and propagate.
    pub fn unit(&self) -> AlgebraResult<Self> {
        let length = self.length();
        if length == 0.0 {
            return Err(AlgebraError::math_error(
                "Vector3::unit",
                MathErrorKind::DivisionByZero,
                "vector has zero length",
            ));
        }
        Ok(self.scale(1.0 / length))
    }

    /// Returns `true` if every component differs from `other`'s by at most `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }

    /// Returns the components as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates a vector from a `[f64; 3]` array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

/// Vector + Vector
impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Vector - Vector
impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Vector * Vector (dot product)
impl std::ops::Mul for Vector3 {
    type Output = f64;

    fn mul(self, rhs: Self) -> f64 {
        self.dot(&rhs)
    }
}

/// Vector * scalar
impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

/// scalar * Vector
impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec.scale(self)
    }
}

/// -Vector
impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

/// v[i] indexing (panics if i > 2)
impl std::ops::Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

/// v[i] = value mutable indexing (panics if i > 2)
impl std::ops::IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = AlgebraError;

    fn try_from(values: &[f64]) -> AlgebraResult<Self> {
        match values {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(AlgebraError::invalid_length(
                "Vector3::try_from",
                VECTOR3_LEN,
                values.len(),
            )),
        }
    }
}

impl FromStr for Vector3 {
    type Err = AlgebraError;

    fn from_str(s: &str) -> AlgebraResult<Self> {
        parse_triple(s).map(Self::from_array)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = DISPLAY_PRECISION;
        write!(f, "({:.p$}, {:.p$}, {:.p$})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector3_construction() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);

        assert_eq!(Vector3::zeros(), Vector3::default());
        assert_eq!(Vector3::x_axis(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(Vector3::y_axis(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(Vector3::z_axis(), Vector3::new(0.0, 0.0, 1.0));

        let from_array = Vector3::from_array([4.0, 5.0, 6.0]);
        assert_eq!(from_array, Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(Vector3::from((4.0, 5.0, 6.0)), from_array);
        assert_eq!(<[f64; 3]>::from(from_array), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_try_from_components_coerces() {
        let v = Vector3::try_from_components(1_i32, 2.5_f32, "-3").unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.5, -3.0));

        let err = Vector3::try_from_components(1.0, "y", 3.0).unwrap_err();
        assert_eq!(err.kind_name(), "NumericConversionKind");
    }

    #[test]
    fn test_vector3_length() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);

        let unit = v.unit().unwrap();
        assert!((unit.length() - 1.0).abs() < 1e-15);
        assert!(unit.approx_eq(&Vector3::new(0.6, 0.8, 0.0), 1e-15));
    }

    #[test]
    fn test_unit_zero_vector_is_error() {
        let err = Vector3::zeros().unit().unwrap_err();
        assert_eq!(err.kind_name(), "DivisionByZeroKind");
        assert!(err.to_string().contains("Vector3::unit"));
    }

    #[test]
    fn test_unit_propagates_nan() {
        let v = Vector3::new(f64::NAN, 1.0, 0.0);
        let unit = v.unit().unwrap();
        assert!(unit.x.is_nan());
    }

    #[test]
    fn test_vector3_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a - a, Vector3::zeros());
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(3.0 * a, Vector3::new(3.0, 6.0, 9.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(-a, a.negate());
        assert_eq!(a.negate(), a * -1.0);
    }

    #[test]
    fn test_vector_times_vector_is_dot() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        let dot: f64 = a * b;
        assert_eq!(dot, 32.0);
        assert_eq!(a * b, b * a);
    }

    #[test]
    fn test_vector3_dot_cross() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 0.0);

        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.cross(&b), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(b.cross(&a), Vector3::new(0.0, 0.0, -1.0));

        let d = Vector3::new(1.0, 2.0, 3.0);
        let e = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(d.cross(&e), Vector3::new(-3.0, 6.0, -3.0));
        assert_eq!(d.cross(&e), -e.cross(&d));
        assert_eq!(d.cross(&e).dot(&d), 0.0);
        assert_eq!(d.cross(&e).dot(&e), 0.0);
    }

    #[test]
    fn test_get_set_methods() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);

        assert_eq!(v.get(0).unwrap(), v.x);
        assert_eq!(v.get(1).unwrap(), v.y);
        assert_eq!(v.get(2).unwrap(), v.z);

        v.set(0, 10.0).unwrap();
        v.set(1, 20.0).unwrap();
        v.set(2, 30.0).unwrap();
        assert_eq!(v, Vector3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_get_error() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let err = v.get(3).unwrap_err();
        assert_eq!(err.kind_name(), "IndexKind");
        assert!(err.to_string().contains("index 3 out of bounds"));
    }

    #[test]
    fn test_set_error() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        let err = v.set(5, 42.0).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("index 5 out of bounds (valid range: 0-2)"));
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_set_component_converts() {
        let mut v = Vector3::zeros();
        v.set_component(0, 7_u32).unwrap();
        v.set_component(1, "2.5").unwrap();
        v.set_component(2, String::from("-1")).unwrap();
        assert_eq!(v, Vector3::new(7.0, 2.5, -1.0));
        assert_eq!(v.get(1).unwrap(), 2.5);
    }

    #[test]
    fn test_set_component_errors_leave_vector_unchanged() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);

        let err = v.set_component(1, "two").unwrap_err();
        assert_eq!(err.kind_name(), "NumericConversionKind");

        let err = v.set_component(3, 1.0).unwrap_err();
        assert_eq!(err.kind_name(), "IndexKind");

        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_indexing_operators() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);

        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);

        v[0] = 10.0;
        v[1] = 20.0;
        v[2] = 30.0;
        assert_eq!(v, Vector3::new(10.0, 20.0, 30.0));
    }

    #[test]
    #[should_panic(expected = "Vector3 index out of bounds: 4")]
    fn test_index_panic() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let _ = v[4];
    }

    #[test]
    #[should_panic(expected = "Vector3 index out of bounds: 7")]
    fn test_index_mut_panic() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v[7] = 42.0;
    }

    #[test]
    fn test_try_from_slice() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(
            Vector3::try_from(&values[..]).unwrap(),
            Vector3::new(1.0, 2.0, 3.0)
        );

        let err = Vector3::try_from(&values[..2]).unwrap_err();
        assert_eq!(err, AlgebraError::invalid_length("Vector3::try_from", 3, 2));
    }

    #[test]
    fn test_from_str() {
        let v: Vector3 = "(1.00, -2.50, 3.00)".parse().unwrap();
        assert_eq!(v, Vector3::new(1.0, -2.5, 3.0));

        assert!("(1, 2)".parse::<Vector3>().is_err());
        assert!("(a, b, c)".parse::<Vector3>().is_err());
    }

    #[test]
    fn test_display_formatting() {
        let v = Vector3::new(1.234567890, -2.345678901, 3.0);
        assert_eq!(format!("{}", v), "(1.23, -2.35, 3.00)");
        assert_eq!(Vector3::zeros().to_string(), "(0.00, 0.00, 0.00)");
    }

    #[test]
    fn test_approx_eq() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(1.0 + 1e-13, 2.0, 3.0 - 1e-13);
        assert!(a.approx_eq(&b, 1e-12));
        assert!(!a.approx_eq(&Vector3::new(1.1, 2.0, 3.0), 1e-12));
    }

    #[test]
    fn test_to_array() {
        let v = Vector3::new(1.5, 2.5, 3.5);
        assert_eq!(v.to_array(), [1.5, 2.5, 3.5]);
    }
}
