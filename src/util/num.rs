use std::ops::{Add, Div, Mul, Neg, Sub};

/// Floating-point types usable as an evaluation context.
///
/// Both `f32` and `f64` implement this trait, so the guarded division and the
/// tolerant comparisons are written once and instantiated per precision.
pub trait Real:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Comparison tolerance.
    const EPSILON: Self;
    /// Smallest positive normal value.
    const MIN_POSITIVE: Self;
    /// Largest finite value.
    const MAX: Self;
    /// Zero.
    const ZERO: Self;
    /// Not a number.
    const NAN: Self;

    /// Absolute value.
    #[must_use]
    fn magnitude(self) -> Self;
}

impl Real for f32 {
    const EPSILON: Self = Self::EPSILON;
    const MAX: Self = Self::MAX;
    const MIN_POSITIVE: Self = Self::MIN_POSITIVE;
    const NAN: Self = Self::NAN;
    const ZERO: Self = 0.0;

    fn magnitude(self) -> Self {
        self.abs()
    }
}

impl Real for f64 {
    const EPSILON: Self = Self::EPSILON;
    const MAX: Self = Self::MAX;
    const MIN_POSITIVE: Self = Self::MIN_POSITIVE;
    const NAN: Self = Self::NAN;
    const ZERO: Self = 0.0;

    fn magnitude(self) -> Self {
        self.abs()
    }
}

/// Divides two floating-point values without ever producing an infinity.
///
/// If the divisor's magnitude is below the smallest positive normal value, the
/// result is NaN when the dividend is also that small, and otherwise the
/// largest finite value carrying the dividend's sign.
///
/// ## Example
/// ```
/// use brainrot::util::num::guarded_div;
///
/// assert_eq!(guarded_div(6.0_f64, 3.0), 2.0);
/// assert_eq!(guarded_div(5.0_f32, 0.0), f32::MAX);
/// assert_eq!(guarded_div(-5.0_f64, 0.0), -f64::MAX);
/// assert!(guarded_div(0.0_f64, 0.0).is_nan());
/// ```
#[must_use]
pub fn guarded_div<T: Real>(left: T, right: T) -> T {
    if right.magnitude() < T::MIN_POSITIVE {
        if left.magnitude() < T::MIN_POSITIVE {
            return T::NAN;
        }
        return if left > T::ZERO { T::MAX } else { -T::MAX };
    }
    left / right
}

/// `left < right` with tolerance.
#[must_use]
pub fn approx_lt<T: Real>(left: T, right: T) -> bool {
    left - right < -T::EPSILON
}

/// `left > right` with tolerance.
#[must_use]
pub fn approx_gt<T: Real>(left: T, right: T) -> bool {
    left - right > T::EPSILON
}

/// `left <= right` with tolerance.
#[must_use]
pub fn approx_le<T: Real>(left: T, right: T) -> bool {
    left - right <= T::EPSILON
}

/// `left >= right` with tolerance.
#[must_use]
pub fn approx_ge<T: Real>(left: T, right: T) -> bool {
    left - right >= -T::EPSILON
}

/// `left == right` with tolerance.
///
/// ## Example
/// ```
/// use brainrot::util::num::approx_eq;
///
/// assert!(approx_eq(0.1_f64 + 0.2, 0.3));
/// assert!(!approx_eq(0.1_f32, 0.2));
/// ```
#[must_use]
pub fn approx_eq<T: Real>(left: T, right: T) -> bool {
    (left - right).magnitude() <= T::EPSILON
}

/// Converts a double to `i32` the way a C cast would, saturating at the
/// bounds and mapping NaN to zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn truncate_to_i32(value: f64) -> i32 {
    value as i32
}

/// Narrows a value for storage in an `int` variable.
///
/// Values above `i32::MAX` saturate to `i32::MAX` and are flagged as an
/// overflow. The lower bound is not checked: values below `i32::MIN` go
/// through the plain truncating cast without a flag.
///
/// ## Returns
/// The narrowed value and whether the upper bound was exceeded.
///
/// ## Example
/// ```
/// use brainrot::util::num::narrow_to_i32;
///
/// assert_eq!(narrow_to_i32(42.9), (42, false));
/// assert_eq!(narrow_to_i32(3.0e10), (i32::MAX, true));
/// assert_eq!(narrow_to_i32(-3.0e10), (i32::MIN, false));
/// ```
#[must_use]
pub fn narrow_to_i32(value: f64) -> (i32, bool) {
    if value > f64::from(i32::MAX) {
        return (i32::MAX, true);
    }
    (truncate_to_i32(value), false)
}
