//! Significant-figure comparison of numeric values.
//!
//! Both operands are printed in scientific notation with the requested number
//! of mantissa digits and the strings are compared. Values strictly greater
//! than one get an explicit `+` on the exponent, everything else (including
//! `1.0` itself and all negative numbers) does not, so `1.0` never matches a
//! value slightly above one. That boundary is intentional and kept stable.

use vt_core::classify::is_error_sentinel;
use vt_core::errors::{ErrorInfo, VtError};
use vt_core::{shape_name, Value};

/// Smallest accepted precision.
pub const MIN_SIGNIFICANT_FIGURES: u32 = 1;
/// Largest accepted precision; the practical ceiling of an IEEE double.
pub const MAX_SIGNIFICANT_FIGURES: u32 = 15;

/// Returns whether `a` and `b` agree to `significant_figures` digits.
///
/// `Err` is the invalid outcome: precision outside `1..=15`, an error
/// sentinel operand, or an operand with no numeric reading.
pub fn approx_equal(a: &Value, b: &Value, significant_figures: u32) -> Result<bool, VtError> {
    if !(MIN_SIGNIFICANT_FIGURES..=MAX_SIGNIFICANT_FIGURES).contains(&significant_figures) {
        return Err(VtError::Usage(
            ErrorInfo::new(
                "significant-figures-out-of-range",
                format!("significant figures must be between 1 and 15, got {significant_figures}"),
            )
            .with_context("significant_figures", significant_figures.to_string()),
        ));
    }
    let lhs = numeric_operand(a)?;
    let rhs = numeric_operand(b)?;
    Ok(scientific(lhs, significant_figures) == scientific(rhs, significant_figures))
}

fn numeric_operand(value: &Value) -> Result<f64, VtError> {
    if is_error_sentinel(value) {
        return Err(VtError::usage(
            "error-sentinel-operand",
            "error values cannot be compared approximately",
        ));
    }
    as_number(value).ok_or_else(|| {
        VtError::Usage(
            ErrorInfo::new("non-numeric-operand", "operand has no numeric value")
                .with_context("shape", shape_name(value)),
        )
    })
}

/// Numeric reading of a value, following host coercion rules.
///
/// `True` reads as `-1`, `Empty` as `0`, and text only when it parses as a number.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Int(number) => Some(*number as f64),
        Value::Float(number) => Some(*number),
        Value::Bool(true) => Some(-1.0),
        Value::Bool(false) | Value::Empty => Some(0.0),
        Value::Text(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Scientific notation with `significant_figures` mantissa digits.
///
/// ```
/// use vt_assert::approx::scientific;
/// assert_eq!(scientific(1.001, 3), "1.00e+0");
/// assert_eq!(scientific(1.0, 3), "1.00e0");
/// assert_eq!(scientific(0.05, 2), "5.0e-2");
/// ```
pub fn scientific(value: f64, significant_figures: u32) -> String {
    // -0.0 formats with a sign; fold it into 0.0.
    let value = if value == 0.0 { 0.0 } else { value };
    let precision = significant_figures.saturating_sub(1) as usize;
    let formatted = format!("{value:.precision$e}");
    if value > 1.0 && value.is_finite() {
        if let Some((mantissa, exponent)) = formatted.split_once('e') {
            return format!("{mantissa}e+{exponent}");
        }
    }
    formatted
}
