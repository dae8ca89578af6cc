use crate::{Quaternion, Vector3};

#[track_caller]
pub fn assert_close(a: f64, b: f64, tolerance: f64, ctx: &str) {
    assert!(
        (a - b).abs() <= tolerance,
        "{}: |{} - {}| = {:e} exceeds {:e}",
        ctx,
        a,
        b,
        (a - b).abs(),
        tolerance
    );
}

#[track_caller]
pub fn assert_vector_close(a: &Vector3, b: &Vector3, tolerance: f64, ctx: &str) {
    assert!(
        a.approx_eq(b, tolerance),
        "{}: {:?} and {:?} differ by more than {:e}",
        ctx,
        a,
        b,
        tolerance
    );
}

#[track_caller]
pub fn assert_quaternion_close(a: &Quaternion, b: &Quaternion, tolerance: f64, ctx: &str) {
    assert!(
        a.approx_eq(b, tolerance),
        "{}: {:?} and {:?} differ by more than {:e}",
        ctx,
        a,
        b,
        tolerance
    );
}

/// Relative tolerance scaled to the magnitude of the operands.
#[inline]
pub fn scaled_tolerance(base: f64, magnitude: f64) -> f64 {
    base * magnitude.max(1.0)
}
