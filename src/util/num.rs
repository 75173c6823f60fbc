use crate::error::RuntimeError;

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `u64` to `f64` if and only if it is exactly representable.
///
/// ## Example
/// ```
/// use seqcalc::{
///     error::RuntimeError,
///     util::num::{MAX_SAFE_U64_INT, u64_to_f64_checked},
/// };
///
/// assert_eq!(u64_to_f64_checked(1234).unwrap(), 1234.0);
/// assert!(matches!(u64_to_f64_checked(MAX_SAFE_U64_INT + 1),
///                  Err(RuntimeError::Overflow)));
/// ```
#[allow(clippy::cast_precision_loss)]
pub const fn u64_to_f64_checked(value: u64) -> Result<f64, RuntimeError> {
    if value > MAX_SAFE_U64_INT {
        return Err(RuntimeError::Overflow);
    }
    Ok(value as f64)
}

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
pub const fn usize_to_f64_checked(value: usize) -> Result<f64, RuntimeError> {
    u64_to_f64_checked(value as u64)
}

/// Converts an `f64` to `i64` when the value is finite, in range and integral.
///
/// ## Example
/// ```
/// use seqcalc::{error::RuntimeError, util::num::f64_to_i64_checked};
///
/// assert_eq!(f64_to_i64_checked(-3.0).unwrap(), -3);
/// assert!(matches!(f64_to_i64_checked(1.5),
///                  Err(RuntimeError::RealIsFractional { .. })));
/// assert!(matches!(f64_to_i64_checked(1e20), Err(RuntimeError::Overflow)));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64) -> Result<i64, RuntimeError> {
    if !value.is_finite() {
        return Err(RuntimeError::InvalidArgument { details: format!("{value} is not a finite number") });
    }
    if value.abs() > MAX_SAFE_U64_INT as f64 {
        return Err(RuntimeError::Overflow);
    }
    if value.fract() != 0.0 {
        return Err(RuntimeError::RealIsFractional { value });
    }
    Ok(value as i64)
}

/// Converts an `f64` to `u64` when the value is finite, non-negative, in range
/// and integral.
///
/// ## Example
/// ```
/// use seqcalc::{error::RuntimeError, util::num::f64_to_u64_checked};
///
/// assert_eq!(f64_to_u64_checked(7.0).unwrap(), 7);
/// assert!(f64_to_u64_checked(-5.0).is_err());
/// assert!(matches!(f64_to_u64_checked(1.25),
///                  Err(RuntimeError::RealIsFractional { .. })));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64) -> Result<u64, RuntimeError> {
    if value < 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("{value} is negative") });
    }
    f64_to_i64_checked(value).map(|n| n as u64)
}
