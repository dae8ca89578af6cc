//! Component coercion and text parsing.
//!
//! Every component of a [`Vector3`](crate::Vector3) or [`Quaternion`](crate::Quaternion)
//! is a plain `f64`. Values that arrive in another shape (integers, `f32`, text read
//! from a file or a prompt) are converted here, once, through [`ToComponent`].
//!
//! # Accepted inputs
//!
//! | Input | Conversion |
//! |-------|------------|
//! | `f64`, `f32` | widened as-is (NaN and infinities pass through) |
//! | `i8`..`i64`, `u8`..`u64`, `isize`, `usize` | `as f64` |
//! | `&str`, `String` | trimmed, then parsed as a float literal |
//!
//! Text that is not a float literal fails with
//! [`NumericConversion`](crate::AlgebraError::NumericConversion).
//!
//! ```
//! use quaternion_core::parse::{parse_triple, ToComponent};
//!
//! assert_eq!(3_i32.to_component().unwrap(), 3.0);
//! assert_eq!(" 2.5 ".to_component().unwrap(), 2.5);
//! assert!("two".to_component().is_err());
//!
//! assert_eq!(parse_triple("(1, 2.5, -3)").unwrap(), [1.0, 2.5, -3.0]);
//! assert_eq!(parse_triple("1 2 3").unwrap(), [1.0, 2.0, 3.0]);
//! ```

use crate::constants::VECTOR3_LEN;
use crate::{AlgebraError, AlgebraResult};

/// Conversion of a value into a single `f64` component.
pub trait ToComponent {
    fn to_component(&self) -> AlgebraResult<f64>;
}

impl ToComponent for f64 {
    #[inline]
    fn to_component(&self) -> AlgebraResult<f64> {
        Ok(*self)
    }
}

impl ToComponent for f32 {
    #[inline]
    fn to_component(&self) -> AlgebraResult<f64> {
        Ok(f64::from(*self))
    }
}

macro_rules! int_to_component {
    ($($t:ty),*) => {
        $(
            impl ToComponent for $t {
                #[inline]
                fn to_component(&self) -> AlgebraResult<f64> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

int_to_component!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToComponent for str {
    fn to_component(&self) -> AlgebraResult<f64> {
        parse_component(self)
    }
}

impl ToComponent for &str {
    fn to_component(&self) -> AlgebraResult<f64> {
        parse_component(self)
    }
}

impl ToComponent for String {
    fn to_component(&self) -> AlgebraResult<f64> {
        parse_component(self)
    }
}

/// Parses a single float literal, ignoring surrounding whitespace.
pub fn parse_component(text: &str) -> AlgebraResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AlgebraError::numeric_conversion(text, "empty input"));
    }
    trimmed
        .parse::<f64>()
        .map_err(|e| AlgebraError::numeric_conversion(text, &e.to_string()))
}

/// Parses three components from `"(x, y, z)"`, `"x, y, z"` or `"x y z"`.
///
/// Brackets may be round or square. Wrong arity is an
/// [`InvalidLength`](AlgebraError::InvalidLength) error.
pub fn parse_triple(text: &str) -> AlgebraResult<[f64; 3]> {
    let inner = strip_brackets(text.trim());

    let fields: Vec<&str> = if inner.contains(',') {
        inner.split(',').collect()
    } else {
        inner.split_whitespace().collect()
    };

    if fields.len() != VECTOR3_LEN {
        return Err(AlgebraError::invalid_length(
            "parse_triple",
            VECTOR3_LEN,
            fields.len(),
        ));
    }

    Ok([
        parse_component(fields[0])?,
        parse_component(fields[1])?,
        parse_component(fields[2])?,
    ])
}

fn strip_brackets(text: &str) -> &str {
    let pairs = [('(', ')'), ('[', ']')];
    for (open, close) in pairs {
        if let Some(rest) = text.strip_prefix(open) {
            if let Some(inner) = rest.strip_suffix(close) {
                return inner;
            }
        }
    }
    text
}
