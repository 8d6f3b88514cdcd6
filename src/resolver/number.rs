/// Render a width the way a JavaScript template literal would.
///
/// Rust's `Display` for `f64` already produces the shortest round-trip
/// digits without an exponent, which matches `Number#toString` for every
/// width a stylesheet can reasonably carry. The remaining differences are
/// the sign of zero and the spelling of infinities.
pub(super) fn format_width(width: f64) -> String {
    if width == 0.0 {
        return "0".to_string();
    }
    if width.is_infinite() {
        return if width.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    width.to_string()
}

#[cfg(test)]
mod tests {
    use super::format_width;

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(format_width(600.0), "600");
        assert_eq!(format_width(1536.0), "1536");
    }

    #[test]
    fn gap_subtraction_keeps_shortest_digits() {
        assert_eq!(format_width(900.0 - 5.0 / 100.0), "899.95");
        assert_eq!(format_width(1200.0 - 5.0 / 100.0), "1199.95");
        assert_eq!(format_width(600.0 - 10.0 / 100.0), "599.9");
        assert_eq!(format_width(0.0 - 5.0 / 100.0), "-0.05");
    }

    #[test]
    fn zero_is_unsigned() {
        assert_eq!(format_width(0.0), "0");
        assert_eq!(format_width(-0.0), "0");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_width(f64::INFINITY), "Infinity");
        assert_eq!(format_width(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_width(f64::NAN), "NaN");
    }
}
