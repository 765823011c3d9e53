//! Currency and range formatting.
//!
//! All prices on the site are whole-dollar US currency: "$" prefix, comma
//! thousands separators, no cents. Negative or fractional input is not a
//! contractual case; amounts are rounded to the nearest dollar and the sign
//! is passed through.

/// Format a number as whole-dollar US currency.
///
/// `format_usd(1_200_000.0)` renders as `"$1,200,000"`.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Format a cost range with an optional unit suffix.
///
/// `format_range(50.0, 200.0, Some("per month"))` renders as
/// `"$50 to $200 per month"`.
pub fn format_range(min: f64, max: f64, unit: Option<&str>) -> String {
    let range = format!("{} to {}", format_usd(min), format_usd(max));
    match unit {
        Some(u) => format!("{} {}", range, u),
        None => range,
    }
}

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_separators() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(999.0), "$999");
        assert_eq!(format_usd(1_000.0), "$1,000");
        assert_eq!(format_usd(85_500.0), "$85,500");
        assert_eq!(format_usd(1_200_000.0), "$1,200,000");
    }

    #[test]
    fn test_format_usd_rounds_to_whole_dollars() {
        assert_eq!(format_usd(87.5), "$88");
        assert_eq!(format_usd(87.4), "$87");
    }

    #[test]
    fn test_format_range() {
        assert_eq!(format_range(100.0, 500.0, None), "$100 to $500");
        assert_eq!(
            format_range(50.0, 200.0, Some("per month")),
            "$50 to $200 per month"
        );
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("a bathroom remodel"), "A bathroom remodel");
        assert_eq!(capitalize_first(""), "");
    }
}
