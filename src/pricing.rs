//! Price calculation for skip hire.

/// Returns the tax-inclusive total, rounded to the nearest whole pound.
///
/// `vat` is a percentage. Inputs are not validated; zero and negative values go
/// through the same arithmetic. Halves round towards positive infinity.
pub fn price_with_vat(price_before_vat: f64, vat: f64) -> i64 {
    let total = price_before_vat * (1.0 + vat / 100.0);
    // Compare the fractional part; adding 0.5 first can itself round up
    let floor = total.floor();
    let rounded = if total - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

/// Formats a whole-pound amount for display.
pub fn format_price(pounds: i64) -> String {
    if pounds < 0 {
        format!("-£{}", pounds.unsigned_abs())
    } else {
        format!("£{pounds}")
    }
}
