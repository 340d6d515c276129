/// Raises `base` to `exponent` through `f64::powf` and truncates the result
/// back to an integer.
///
/// Precision is lost once results exceed 2^53. Results outside the `i64`
/// range saturate to `i64::MIN`/`i64::MAX`, and negative exponents truncate
/// toward zero.
///
/// ## Parameters
/// - `base`: The base.
/// - `exponent`: The exponent.
///
/// ## Returns
/// The truncated power.
///
/// ## Example
/// ```
/// use waixg::util::num::truncated_pow;
///
/// assert_eq!(truncated_pow(2, 10), 1024);
/// assert_eq!(truncated_pow(-3, 3), -27);
/// assert_eq!(truncated_pow(2, -1), 0);
/// assert_eq!(truncated_pow(2, 64), i64::MAX);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn truncated_pow(base: i64, exponent: i64) -> i64 {
    (base as f64).powf(exponent as f64) as i64
}
