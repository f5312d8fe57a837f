use crate::utils::error::{ClockError, Result};

/// Format a price as whole dollars with thousands separators, e.g. `$67,845`.
///
/// Rounds half to even. Negative values keep the sign after the `$`.
pub fn format_price(value: f64) -> Result<String> {
    if !value.is_finite() {
        return Err(ClockError::InvalidPriceError {
            reason: format!("price is not a finite number: {}", value),
        });
    }

    let rounded = value.round_ties_even();
    // i64::MAX is not exactly representable; 2^63 is the first value past it
    if rounded.abs() >= 9_223_372_036_854_775_808.0 {
        return Err(ClockError::InvalidPriceError {
            reason: format!("price out of range: {}", value),
        });
    }

    let whole = rounded as i64;
    let sign = if whole < 0 { "-" } else { "" };
    Ok(format!("${}{}", sign, group_thousands(whole.unsigned_abs())))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
