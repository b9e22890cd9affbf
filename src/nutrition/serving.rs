//! Serving size parsing
//!
//! Food databases report serving sizes as free text ("30 g", "100g",
//! "1.5 oz (42 g)"). Only the leading number is used as the serving basis.

/// Grams the per-unit nutrient values refer to when no serving size is known
pub const DEFAULT_SERVING_GRAMS: f64 = 100.0;

/// Extract the leading decimal number of a serving size string
///
/// An exponent is taken only when at least one digit follows it.
///
/// Examples:
/// - "30 g" -> Some(30.0)
/// - " 2.5g" -> Some(2.5)
/// - ".5 cup" -> Some(0.5)
/// - "1e2g" -> Some(100.0)
/// - "g" -> None
pub fn parse_serving_size(s: &str) -> Option<f64> {
    let bytes = s.trim_start().as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first().copied(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = digits_from(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end).copied(), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp).copied(), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    // Only ASCII bytes were consumed, so `end` is a char boundary
    std::str::from_utf8(&bytes[..end]).ok()?.parse::<f64>().ok()
}

/// The serving basis to divide by: the given size when positive and finite
pub fn serving_basis(serving_size_grams: Option<f64>, default_grams: f64) -> f64 {
    serving_size_grams
        .filter(|g| g.is_finite() && *g > 0.0)
        .unwrap_or(default_grams)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_unit() {
        assert_eq!(parse_serving_size("30 g"), Some(30.0));
        assert_eq!(parse_serving_size("100g"), Some(100.0));
        assert_eq!(parse_serving_size("1.5 oz (42 g)"), Some(1.5));
        assert_eq!(parse_serving_size("  250ml"), Some(250.0));
    }

    #[test]
    fn test_parse_leading_dot_and_trailing_dot() {
        assert_eq!(parse_serving_size(".5 cup"), Some(0.5));
        assert_eq!(parse_serving_size("2. slices"), Some(2.0));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_serving_size(""), None);
        assert_eq!(parse_serving_size("g"), None);
        assert_eq!(parse_serving_size("one cup"), None);
        assert_eq!(parse_serving_size("."), None);
        assert_eq!(parse_serving_size("-"), None);
        assert_eq!(parse_serving_size("e5"), None);
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(parse_serving_size("1e2g"), Some(100.0));
        assert_eq!(parse_serving_size("2.5E-1 kg"), Some(0.25));
        assert_eq!(parse_serving_size("3e+1"), Some(30.0));
    }

    #[test]
    fn test_parse_dangling_exponent_ignored() {
        assert_eq!(parse_serving_size("1e"), Some(1.0));
        assert_eq!(parse_serving_size("4E-g"), Some(4.0));
        assert_eq!(parse_serving_size("12 each"), Some(12.0));
    }

    #[test]
    fn test_serving_basis() {
        assert_eq!(serving_basis(Some(30.0), DEFAULT_SERVING_GRAMS), 30.0);
        assert_eq!(serving_basis(None, DEFAULT_SERVING_GRAMS), 100.0);
        assert_eq!(serving_basis(Some(0.0), DEFAULT_SERVING_GRAMS), 100.0);
        assert_eq!(serving_basis(Some(-5.0), DEFAULT_SERVING_GRAMS), 100.0);
        assert_eq!(serving_basis(Some(f64::NAN), DEFAULT_SERVING_GRAMS), 100.0);
    }
}
