//! Significant-digit rounding for conversion results

/// Digits kept after the leading significant digit
pub const ROUND_DIGITS: usize = 7;

/// Round `x` to `digits` decimal places past its leading significant
/// digit, i.e. `round(x, digits - floor(log10(|x|)))`.
///
/// Plain decimal rounding would turn 0.00045 into 0.0; this keeps the
/// non-zero digits. Zero and non-finite values are returned unchanged.
pub fn round_significant(x: f64, digits: usize) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    // `{:e}` rounds the exact binary value, no power-of-ten scaling
    format!("{:.prec$e}", x, prec = digits).parse().unwrap_or(x)
}
