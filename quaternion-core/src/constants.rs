/// Number of components in a [`Vector3`](crate::Vector3).
pub const VECTOR3_LEN: usize = 3;

/// Number of components in a [`Quaternion`](crate::Quaternion): `[s, x, y, z]`.
pub const QUATERNION_LEN: usize = 4;

/// Absolute tolerance for approximate comparisons after a handful of products.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Decimal places used by `Display` for both algebra types.
pub const DISPLAY_PRECISION: usize = 2;
