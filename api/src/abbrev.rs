//! Abbreviated display formatting for large dollar magnitudes.

/// Formats a numeric magnitude as a short human-readable string.
///
/// Values of at least one billion collapse to a "B" suffix, one million to
/// "M", one thousand to "K"; anything below one thousand is printed plainly.
/// Every variant keeps exactly two decimal places, and the thresholds are
/// inclusive at the lower bound, so exactly 1000 renders as "1.00K".
///
/// The comparisons apply to the raw signed value, so negative inputs keep
/// their sign and only abbreviate once they exceed a threshold themselves.
pub fn format(n: f64) -> String {
    if n >= 1_000_000_000.0 {
        format!("{:.2}B", n / 1_000_000_000.0)
    } else if n >= 1_000_000.0 {
        format!("{:.2}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.2}K", n / 1_000.0)
    } else {
        format!("{:.2}", n)
    }
}

/// Same as [`format`], prefixed with a dollar sign.
pub fn format_usd(n: f64) -> String {
    format!("${}", format(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_one_thousand_prints_plainly() {
        assert_eq!(format(0.0), "0.00");
        assert_eq!(format(999.0), "999.00");
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(format(1_000.0), "1.00K");
        assert_eq!(format(1_000_000.0), "1.00M");
        assert_eq!(format(1_000_000_000.0), "1.00B");
    }

    #[test]
    fn abbreviates_with_two_decimals() {
        assert_eq!(format(1_500_000.0), "1.50M");
        assert_eq!(format(2_500_000_000.0), "2.50B");
        assert_eq!(format(68_423.7), "68.42K");
    }

    #[test]
    fn negative_values_fall_to_the_plain_branch() {
        // thresholds compare the raw signed value
        assert_eq!(format(-2_000_000_000.0), "-2000000000.00");
        assert_eq!(format(-12.345), "-12.35");
    }

    #[test]
    fn usd_variant_prefixes_a_dollar_sign() {
        assert_eq!(format_usd(1_500_000.0), "$1.50M");
        assert_eq!(format_usd(42.0), "$42.00");
    }
}
