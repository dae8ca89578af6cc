//! Vector and quaternion algebra.
//!
//! - [`Vector3`]: 3D Cartesian vector with dot and cross products
//! - [`Quaternion`]: scalar + vector pair with the Hamilton product and point rotation
//! - [`Operand`], [`Product`]: runtime dispatch for operands of unknown type

mod operand;
mod quaternion;
mod vector3;

pub use operand::{Operand, Product};
pub use quaternion::Quaternion;
pub use vector3::Vector3;
