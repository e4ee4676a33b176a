//! Currency amount formatting
//!
//! Amounts are plain `f64` values in a single currency denomination. Parsing
//! of currency strings happens upstream; this module only renders amounts
//! for messages and terminal output.

/// Format an amount to two decimals with thousands separators
///
/// Negative amounts place the sign before the symbol.
///
/// # Examples
/// ```
/// use budget_optimizer::models::money::format_amount;
/// assert_eq!(format_amount(1234567.891, "₹"), "₹1,234,567.89");
/// assert_eq!(format_amount(-5000.0, "$"), "-$5,000.00");
/// ```
pub fn format_amount(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return format!("{}{}", symbol, value);
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_thousands(whole);

    // "-0.00" is not worth a sign
    let negative = value < 0.0 && (whole != "0" || fraction != "00");
    if negative {
        format!("-{}{}.{}", symbol, grouped, fraction)
    } else {
        format!("{}{}.{}", symbol, grouped, fraction)
    }
}

/// Insert a comma between every group of three digits
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a ratio (0.30) as a whole or fractional percentage ("30%")
pub fn format_ratio(ratio: f64) -> String {
    let pct = ratio * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{:.0}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_amount(0.0, "₹"), "₹0.00");
        assert_eq!(format_amount(5.5, "₹"), "₹5.50");
        assert_eq!(format_amount(999.999, "$"), "$1,000.00");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_amount(1000.0, "₹"), "₹1,000.00");
        assert_eq!(format_amount(100000.0, "₹"), "₹100,000.00");
        assert_eq!(format_amount(1234567.5, "₹"), "₹1,234,567.50");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_amount(-5000.0, "₹"), "-₹5,000.00");
        assert_eq!(format_amount(-0.001, "₹"), "₹0.00");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_amount(f64::INFINITY, "$"), "$inf");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(0.30), "30%");
        assert_eq!(format_ratio(0.5), "50%");
        assert_eq!(format_ratio(0.125), "12.5%");
    }
}
