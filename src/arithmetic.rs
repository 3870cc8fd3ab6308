//! Checked arithmetic primitives.
//!
//! Every function validates its input before computing and reports a domain
//! violation or an overflow as an [`Error`](../enum.Error.html) instead of
//! producing `NaN` or an infinity.

use crate::error::Error;
use hashbrown::HashMap;
use libm::pow;
use parking_lot::Mutex;

/// Largest `n` whose factorial is a finite `f64`
pub const MAX_FACTORIAL: i64 = 170;

const OVERFLOW: &str = "arithmetic operation resulted in an overflow";

/// Reject a non-finite `result`, whatever the operands were
fn finite(result: f64) -> Result<f64, Error> {
    if !result.is_finite() {
        Err(Error::overflow(OVERFLOW))
    } else {
        Ok(result)
    }
}

fn is_integer(value: f64) -> bool {
    value.fract() == 0.0
}

/// Compute `a + b`.
///
/// # Errors
///
/// `Error::Overflow` if the sum is not representable.
pub fn add(a: f64, b: f64) -> Result<f64, Error> {
    let result = a + b;
    if a > 0.0 && b > 0.0 && result < 0.0 {
        return Err(Error::overflow(OVERFLOW));
    }
    finite(result)
}

/// Compute `a - b`.
///
/// # Errors
///
/// `Error::Overflow` if the difference is not representable.
pub fn subtract(a: f64, b: f64) -> Result<f64, Error> {
    let result = a - b;
    if a < 0.0 && b < 0.0 && result > 0.0 {
        return Err(Error::overflow(OVERFLOW));
    }
    finite(result)
}

/// Compute `a * b`.
///
/// # Errors
///
/// `Error::Overflow` if the sign of the product disagrees with the signs of
/// the factors, or the product is not representable.
pub fn multiply(a: f64, b: f64) -> Result<f64, Error> {
    let result = a * b;
    let same_sign = (a > 0.0 && b > 0.0) || (a < 0.0 && b < 0.0);
    let opposite_sign = (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0);
    if (same_sign && result < 0.0) || (opposite_sign && result > 0.0) {
        return Err(Error::overflow(OVERFLOW));
    }
    finite(result)
}

/// Compute `a / b`.
///
/// # Errors
///
/// `Error::DivisionByZero` if `b` is zero, `Error::Overflow` if the quotient
/// is not representable.
pub fn divide(a: f64, b: f64) -> Result<f64, Error> {
    if b == 0.0 {
        return Err(Error::DivisionByZero);
    }
    finite(a / b)
}

/// Raise `num` to the power `exp`.
///
/// # Errors
///
/// `Error::DomainError` for `0^0` and for a negative base with a non-integer
/// exponent, `Error::Overflow` if the power is not representable.
pub fn power(num: f64, exp: f64) -> Result<f64, Error> {
    if num == 0.0 && exp == 0.0 {
        return Err(Error::domain("0^0 is undefined"));
    }
    if num < 0.0 && !is_integer(exp) {
        return Err(Error::domain(
            "negative base with non-integer exponent is undefined",
        ));
    }
    finite(pow(num, exp))
}

/// Compute the `exponent`-th root of `a`.
///
/// Odd roots of negative numbers are real: `root(-27.0, 3.0)` is `-3.0`.
///
/// # Errors
///
/// `Error::DomainError` if `exponent` is zero, or if `a` is negative and
/// `exponent` is even or not an integer, `Error::Overflow` if the root is
/// not finite.
pub fn root(a: f64, exponent: f64) -> Result<f64, Error> {
    if exponent == 0.0 {
        return Err(Error::domain("exponent must be non-zero"));
    }
    if a < 0.0 && exponent % 2.0 == 0.0 {
        return Err(Error::domain("cannot calculate even root of negative number"));
    }
    if a < 0.0 && !is_integer(exponent) {
        return Err(Error::domain(
            "cannot calculate root of negative number with non-integer exponent",
        ));
    }

    let magnitude = a.abs();
    let mut result = pow(magnitude, 1.0 / exponent);
    // snap exact integer roots of perfect powers, 1/n is rarely exact
    if is_integer(exponent) && exponent.abs() <= f64::from(i32::MAX) {
        #[allow(clippy::cast_possible_truncation)]
        let n = exponent as i32;
        let rounded = result.round();
        if rounded != 0.0 && rounded.powi(n) == magnitude {
            result = rounded;
        }
    }
    if a < 0.0 {
        finite(-result)
    } else {
        finite(result)
    }
}

/// Compute the logarithm of `a` in the given `base`.
///
/// # Errors
///
/// `Error::DomainError` if `a` is not positive, or if `base` is not positive
/// or equal to one, `Error::Overflow` if the logarithm is not finite.
pub fn log(a: f64, base: f64) -> Result<f64, Error> {
    if a <= 0.0 {
        return Err(Error::domain("logarithm argument must be positive"));
    }
    if base <= 0.0 || (base - 1.0).abs() < f64::EPSILON {
        return Err(Error::domain(
            "logarithm base must be positive and not equal to 1",
        ));
    }
    finite(a.ln() / base.ln())
}

/// Compute the population standard deviation of `values`.
///
/// Each step goes through the checked primitives of this module, so an
/// overflowing input is reported the same way as in direct arithmetic.
///
/// # Errors
///
/// `Error::DomainError` if `values` is empty, or any error of the underlying
/// primitives.
pub fn standard_deviation(values: &[f64]) -> Result<f64, Error> {
    if values.is_empty() {
        return Err(Error::domain("list cannot be empty"));
    }
    #[allow(clippy::cast_precision_loss)]
    let count = values.len() as f64;

    let mut sum = 0.0;
    for &value in values {
        sum = add(sum, value)?;
    }
    let mean = divide(sum, count)?;

    let mut squares = 0.0;
    for &value in values {
        let deviation = subtract(value, mean)?;
        squares = add(squares, power(deviation, 2.0)?)?;
    }

    let variance = divide(squares, count)?;
    root(variance, 2.0)
}

/// Thread safe cache of computed factorials.
///
/// Entries are never evicted: the cache holds at most
/// [`MAX_FACTORIAL`](constant.MAX_FACTORIAL.html)` + 1` values.
#[derive(Debug, Default)]
pub struct FactorialMemo {
    cache: Mutex<HashMap<i64, f64>>,
}

impl FactorialMemo {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute `n!`, reusing and filling the cache.
    ///
    /// # Errors
    ///
    /// `Error::DomainError` if `n` is negative, `Error::Overflow` if `n!` is
    /// larger than the largest finite `f64`.
    #[allow(clippy::cast_precision_loss)]
    pub fn factorial(&self, n: i64) -> Result<f64, Error> {
        if n < 0 {
            return Err(Error::domain(
                "factorial is not defined for negative numbers",
            ));
        }
        if n > MAX_FACTORIAL {
            return Err(Error::overflow(format!(
                "{}! does not fit in a double precision number",
                n
            )));
        }

        let mut cache = self.cache.lock();
        if let Some(&value) = cache.get(&n) {
            tracing::debug!(n, "factorial cache hit");
            return Ok(value);
        }

        // continue from the largest cached factorial below n
        let start = (0..n)
            .rev()
            .find_map(|k| cache.get(&k).map(|&value| (k, value)));
        let (mut k, mut value) = match start {
            Some(start) => start,
            None => {
                cache.insert(0, 1.0);
                (0, 1.0)
            }
        };
        while k < n {
            k += 1;
            value *= k as f64;
            cache.insert(k, value);
        }
        tracing::debug!(n, cached = cache.len(), "factorial cache filled");
        Ok(value)
    }

    /// Number of cached factorials
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if no factorial has been computed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test]
    fn addition() {
        assert_eq!(add(2.0, 3.5), Ok(5.5));
        assert_eq!(add(-2.0, 3.0), Ok(1.0));
        assert!(matches!(add(f64::MAX, f64::MAX), Err(Error::Overflow(_))));
        assert_eq!(add(f64::MAX, -f64::MAX), Ok(0.0));
        assert!(matches!(add(f64::INFINITY, 1.0), Err(Error::Overflow(_))));
        assert!(matches!(add(f64::NAN, 1.0), Err(Error::Overflow(_))));
    }

    #[test]
    fn subtraction() {
        assert_eq!(subtract(2.0, 3.5), Ok(-1.5));
        assert_eq!(subtract(-2.0, -3.0), Ok(1.0));
        assert!(matches!(
            subtract(-f64::MAX, f64::MAX),
            Err(Error::Overflow(_))
        ));
        assert!(matches!(
            subtract(f64::INFINITY, f64::INFINITY),
            Err(Error::Overflow(_))
        ));
    }

    #[test]
    fn multiplication() {
        assert_eq!(multiply(-4.0, 2.5), Ok(-10.0));
        assert_eq!(multiply(0.0, -3.0), Ok(-0.0));
        assert!(matches!(multiply(1e200, 1e200), Err(Error::Overflow(_))));
        assert!(matches!(multiply(-1e200, 1e200), Err(Error::Overflow(_))));
        assert!(matches!(multiply(0.0, f64::INFINITY), Err(Error::Overflow(_))));
    }

    #[test]
    fn division() {
        assert_eq!(divide(10.0, 2.0), Ok(5.0));
        assert_eq!(divide(10.0, 3.0), Ok(10.0 / 3.0));
        assert_eq!(divide(0.0, 3.0), Ok(0.0));
        for x in &[10.0, 0.0, -1.5, f64::MAX] {
            assert_eq!(divide(*x, 0.0), Err(Error::DivisionByZero));
        }
        assert!(matches!(divide(f64::MAX, 0.5), Err(Error::Overflow(_))));
    }

    #[test]
    fn powers() {
        assert_eq!(
            power(0.0, 0.0),
            Err(Error::DomainError("0^0 is undefined".into()))
        );
        assert_eq!(power(1.0, -2.0), Ok(1.0));
        assert_eq!(power(80.0, 0.0), Ok(1.0));
        assert_abs_diff_eq!(power(-2.0, 3.0).unwrap(), -8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(power(9.0, 0.5).unwrap(), 3.0, epsilon = 1e-12);
        assert!(matches!(power(-8.0, 0.5), Err(Error::DomainError(_))));
        assert!(matches!(power(10.0, 400.0), Err(Error::Overflow(_))));
    }

    #[test_case(-1.0, -2.0 ; "even negative degree")]
    #[test_case(-3.0, -4.0 ; "even negative degree of non unit")]
    #[test_case(-16.0, 4.0 ; "even positive degree")]
    #[test_case(-8.0, 1.5 ; "fractional degree")]
    #[test_case(5.0, 0.0 ; "zero degree")]
    #[test_case(-4.0, -2.0 ; "negative even degree leaves a negative zero remainder")]
    fn invalid_roots(a: f64, exponent: f64) {
        assert!(matches!(root(a, exponent), Err(Error::DomainError(_))));
    }

    #[test]
    fn roots() {
        assert_eq!(root(-27.0, 3.0), Ok(-3.0));
        assert_eq!(root(27.0, 3.0), Ok(3.0));
        assert_eq!(root(16.0, 2.0), Ok(4.0));
        assert_eq!(root(-1.0, -3.0), Ok(-1.0));
        assert_abs_diff_eq!(
            root(2.0, 2.0).unwrap(),
            std::f64::consts::SQRT_2,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(root(0.25, -2.0).unwrap(), 2.0, epsilon = 1e-12);
        assert_eq!(root(0.0, 3.0), Ok(0.0));
        assert!(matches!(root(f64::INFINITY, 2.0), Err(Error::Overflow(_))));
    }

    #[test]
    fn logarithms() {
        let positive_argument = Error::DomainError("logarithm argument must be positive".into());
        let valid_base =
            Error::DomainError("logarithm base must be positive and not equal to 1".into());
        assert_eq!(log(10.0, 0.0), Err(valid_base.clone()));
        assert_eq!(log(0.0, 10.0), Err(positive_argument.clone()));
        assert_eq!(log(0.0, 0.0), Err(positive_argument.clone()));
        assert_eq!(log(-5.0, 3.0), Err(positive_argument));
        assert_eq!(log(3.0, -5.0), Err(valid_base.clone()));
        assert_eq!(log(3.0, 1.0), Err(valid_base));

        assert_abs_diff_eq!(
            log(0.5, 4.7).unwrap(),
            0.5_f64.ln() / 4.7_f64.ln(),
            epsilon = 1e-10
        );
        assert_abs_diff_eq!(log(1000.0, 10.0).unwrap(), 3.0, epsilon = 1e-10);
        assert!(matches!(log(f64::INFINITY, 10.0), Err(Error::Overflow(_))));
    }

    #[test]
    fn factorials() {
        let memo = FactorialMemo::new();
        assert_eq!(memo.factorial(5), Ok(120.0));
        assert_eq!(memo.factorial(0), Ok(1.0));
        assert_eq!(memo.factorial(1), Ok(1.0));
        assert_eq!(
            memo.factorial(-5),
            Err(Error::DomainError(
                "factorial is not defined for negative numbers".into()
            ))
        );
        assert!(matches!(memo.factorial(171), Err(Error::Overflow(_))));
        assert!(memo.factorial(MAX_FACTORIAL).unwrap().is_finite());
    }

    #[test]
    fn factorial_memo_grows() {
        let memo = FactorialMemo::new();
        assert!(memo.is_empty());
        assert_eq!(memo.factorial(3), Ok(6.0));
        assert_eq!(memo.len(), 4);
        assert_eq!(memo.factorial(6), Ok(720.0));
        assert_eq!(memo.len(), 7);
        // cached values are returned unchanged
        assert_eq!(memo.factorial(6), Ok(720.0));
        assert_eq!(memo.factorial(2), Ok(2.0));
        assert_eq!(memo.len(), 7);
    }

    #[test]
    fn factorial_memo_is_shared_between_threads() {
        let memo = std::sync::Arc::new(FactorialMemo::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let memo = memo.clone();
                std::thread::spawn(move || memo.factorial(10 + i))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
        assert_eq!(memo.factorial(10), Ok(3_628_800.0));
        assert_eq!(memo.len(), 18);
    }

    #[test]
    fn deviation() {
        let values: Vec<f64> = (0..1000).map(f64::from).collect();
        assert_abs_diff_eq!(
            standard_deviation(&values).unwrap(),
            288.819,
            epsilon = 0.5
        );
        assert_eq!(standard_deviation(&[4.0]), Ok(0.0));
        assert_abs_diff_eq!(
            standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap(),
            2.0,
            epsilon = 1e-12
        );
        assert!(matches!(standard_deviation(&[]), Err(Error::DomainError(_))));
        assert!(matches!(
            standard_deviation(&[f64::MAX, f64::MAX]),
            Err(Error::Overflow(_))
        ));
        assert!(matches!(
            standard_deviation(&[f64::INFINITY]),
            Err(Error::Overflow(_))
        ));
        assert!(matches!(
            standard_deviation(&[1.0, f64::NAN]),
            Err(Error::Overflow(_))
        ));
    }

    use std::time::Instant;
    #[test]
    fn bench() {
        let values: Vec<f64> = (0..1000).map(|i| f64::from(i) * 0.1).collect();
        let iterations = 1_000;

        let watch = Instant::now();
        let mut results = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            results.push(standard_deviation(&values).unwrap());
        }
        let watch = watch.elapsed();

        println!("{}", results[0]);
        println!("{}", watch.as_millis());
    }
}
