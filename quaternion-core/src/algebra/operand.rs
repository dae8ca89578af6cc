//! Runtime operand dispatch.
//!
//! The `std::ops` impls on [`Vector3`] and [`Quaternion`] only accept the operand
//! types that make sense, so a wrong operand is a compile error there. Code that
//! receives operands whose type is only known at runtime (an expression evaluator,
//! a scripting bridge, values decoded from a file) goes through [`Operand`] instead,
//! and gets a [`TypeMismatch`](crate::AlgebraError::TypeMismatch) for combinations
//! an operation does not accept.
//!
//! ```
//! use quaternion_core::{Operand, Product, Vector3};
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//!
//! // Vector * Vector is the dot product
//! let dot = a.mul_operand(&Operand::Vector(Vector3::new(4.0, 5.0, 6.0))).unwrap();
//! assert_eq!(dot, Product::Scalar(32.0));
//!
//! // Vector * scalar scales
//! let scaled = a.mul_operand(&Operand::Scalar(2.0)).unwrap();
//! assert_eq!(scaled, Product::Vector(Vector3::new(2.0, 4.0, 6.0)));
//!
//! // Anything else is a type error
//! assert!(a.add_operand(&Operand::Scalar(1.0)).is_err());
//! ```

use super::{Quaternion, Vector3};
use crate::constants::VECTOR3_LEN;
use crate::{AlgebraError, AlgebraResult};

/// A right-hand operand whose type is decided at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Vector(Vector3),
    /// An ordered sequence; only length-3 sequences are vector-like.
    Sequence(Vec<f64>),
    Quaternion(Quaternion),
}

/// The result of [`Vector3::mul_operand`]: a dot product or a scaled vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Product {
    Scalar(f64),
    Vector(Vector3),
}

impl Operand {
    /// Name of the operand's type, as used in error messages.
    pub fn type_name(&self) -> String {
        match self {
            Self::Scalar(_) => "scalar".to_string(),
            Self::Vector(_) => "Vector3".to_string(),
            Self::Sequence(values) => format!("sequence of length {}", values.len()),
            Self::Quaternion(_) => "Quaternion".to_string(),
        }
    }

    /// Returns the operand as a vector if it is a `Vector3` or a length-3 sequence.
    pub fn as_vector_like(&self) -> Option<Vector3> {
        match self {
            Self::Vector(v) => Some(*v),
            Self::Sequence(values) if values.len() == VECTOR3_LEN => {
                Some(Vector3::new(values[0], values[1], values[2]))
            }
            _ => None,
        }
    }

    pub(crate) fn mismatch(&self, operation: &str, expected: &str) -> AlgebraError {
        AlgebraError::type_mismatch(operation, expected, &self.type_name())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vector3> for Operand {
    fn from(value: Vector3) -> Self {
        Self::Vector(value)
    }
}

impl From<Vec<f64>> for Operand {
    fn from(value: Vec<f64>) -> Self {
        Self::Sequence(value)
    }
}

impl From<&[f64]> for Operand {
    fn from(value: &[f64]) -> Self {
        Self::Sequence(value.to_vec())
    }
}

impl From<[f64; 3]> for Operand {
    fn from(value: [f64; 3]) -> Self {
        Self::Sequence(value.to_vec())
    }
}

impl From<Quaternion> for Operand {
    fn from(value: Quaternion) -> Self {
        Self::Quaternion(value)
    }
}

impl Product {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<Vector3> {
        match self {
            Self::Vector(v) => Some(*v),
            _ => None,
        }
    }
}

impl Vector3 {
    /// `self + rhs`, accepting only a vector operand.
    pub fn add_operand(&self, rhs: &Operand) -> AlgebraResult<Vector3> {
        match rhs {
            Operand::Vector(v) => Ok(*self + *v),
            other => Err(other.mismatch("Vector3::add", "Vector3")),
        }
    }

    /// `self - rhs`, accepting only a vector operand.
    pub fn sub_operand(&self, rhs: &Operand) -> AlgebraResult<Vector3> {
        match rhs {
            Operand::Vector(v) => Ok(*self - *v),
            other => Err(other.mismatch("Vector3::sub", "Vector3")),
        }
    }

    /// `self * rhs`: dot product for a vector, scaling for a scalar.
    pub fn mul_operand(&self, rhs: &Operand) -> AlgebraResult<Product> {
        match rhs {
            Operand::Vector(v) => Ok(Product::Scalar(self.dot(v))),
            Operand::Scalar(k) => Ok(Product::Vector(self.scale(*k))),
            other => Err(other.mismatch("Vector3::mul", "Vector3 or scalar")),
        }
    }

    /// `lhs * self` where the left operand is only known at runtime.
    ///
    /// Only a scalar is accepted on the left.
    pub fn rmul_operand(&self, lhs: &Operand) -> AlgebraResult<Vector3> {
        match lhs {
            Operand::Scalar(k) => Ok(*k * *self),
            other => Err(other.mismatch("Vector3::rmul", "scalar")),
        }
    }

    /// `self × rhs`, accepting only a vector operand.
    pub fn cross_operand(&self, rhs: &Operand) -> AlgebraResult<Vector3> {
        match rhs {
            Operand::Vector(v) => Ok(self.cross(v)),
            other => Err(other.mismatch("Vector3::cross", "Vector3")),
        }
    }
}

impl Quaternion {
    /// Builds a quaternion from a scalar and a vector-like operand.
    ///
    /// The vector part may be a `Vector3` or a 3-element sequence.
    pub fn try_new(s: f64, vector: &Operand) -> AlgebraResult<Quaternion> {
        vector
            .as_vector_like()
            .map(|v| Quaternion::new(s, v))
            .ok_or_else(|| vector.mismatch("Quaternion::new", "Vector3 or sequence of length 3"))
    }

    /// `self + rhs`, accepting only a quaternion operand.
    pub fn add_operand(&self, rhs: &Operand) -> AlgebraResult<Quaternion> {
        match rhs {
            Operand::Quaternion(q) => Ok(*self + *q),
            other => Err(other.mismatch("Quaternion::add", "Quaternion")),
        }
    }

    /// `self * rhs` following the polymorphic product rules.
    ///
    /// - quaternion: Hamilton product
    /// - scalar: both parts scaled
    /// - `Vector3` or 3-element sequence: promoted to the pure quaternion `(0, v)`
    pub fn mul_operand(&self, rhs: &Operand) -> AlgebraResult<Quaternion> {
        match rhs {
            Operand::Quaternion(q) => Ok(self.hamilton_product(q)),
            Operand::Scalar(k) => Ok(self.scale(*k)),
            other => other
                .as_vector_like()
                .map(|v| self.hamilton_product(&Quaternion::pure(v)))
                .ok_or_else(|| {
                    other.mismatch(
                        "Quaternion::mul",
                        "Quaternion, scalar, Vector3 or sequence of length 3",
                    )
                }),
        }
    }
}
