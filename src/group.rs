//! Thousands grouping: cosmetic separator insertion without abbreviation.

use crate::locale::LocaleConfig;
use crate::numeric::js_number_string;

/// Per-call options for [`format_number`].
#[derive(Clone, Debug, Default)]
pub struct FormatOptions {
    /// Locale code ("en", "de", ...). Unrecognized values resolve to English.
    pub format_type: Option<String>,
}

/// Inserts a separator into `digits` at every third boundary from the right.
/// Never before the first digit, never inside a shorter-than-3 remainder.
fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Groups only the trailing digit run, leaving a sign (or an exponent
/// rendering like "1e+21") untouched.
fn group_integer_part(int_part: &str, separator: &str) -> String {
    let run_start = int_part
        .rfind(|c: char| !c.is_ascii_digit())
        .map_or(0, |i| i + 1);
    let (prefix, digits) = int_part.split_at(run_start);
    format!("{prefix}{}", group_digits(digits, separator))
}

/// Renders `num` with the locale's thousands separator in the integer part
/// and its decimal separator before any fraction. No abbreviation, no
/// rounding beyond the number's own canonical representation.
///
/// ```
/// use numify::{format_number, FormatOptions};
///
/// let de = FormatOptions { format_type: Some("de".to_string()) };
/// assert_eq!(format_number(1234567.89, &de), "1.234.567,89");
/// ```
pub fn format_number(num: f64, options: &FormatOptions) -> String {
    let config = LocaleConfig::resolve(options.format_type.as_deref());
    let repr = js_number_string(num);
    let (int_part, frac_part) = match repr.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (repr.as_str(), None),
    };
    let grouped = group_integer_part(int_part, config.thousand_separator);
    match frac_part {
        Some(frac) => format!("{grouped}{}{frac}", config.decimal_separator),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en(num: f64) -> String {
        format_number(num, &FormatOptions::default())
    }

    fn with_locale(num: f64, code: &str) -> String {
        format_number(
            num,
            &FormatOptions {
                format_type: Some(code.to_string()),
            },
        )
    }

    #[test]
    fn groups_every_three_digits() {
        assert_eq!(en(1234.0), "1,234");
        assert_eq!(en(1234567.0), "1,234,567");
        assert_eq!(en(12345678.0), "12,345,678");
    }

    #[test]
    fn short_integers_are_untouched() {
        assert_eq!(en(0.0), "0");
        assert_eq!(en(999.0), "999");
        assert_eq!(en(12.5), "12.5");
    }

    #[test]
    fn locale_separators() {
        assert_eq!(with_locale(1234567.89, "de"), "1.234.567,89");
        assert_eq!(with_locale(1234567.89, "fr"), "1 234 567,89");
        assert_eq!(with_locale(1234567.89, "ch"), "1'234'567.89");
        assert_eq!(with_locale(1234567.89, "se"), "1 234 567,89");
    }

    #[test]
    fn unknown_locale_degrades_to_english() {
        assert_eq!(with_locale(1234567.89, "xx"), "1,234,567.89");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(en(-1234567.0), "-1,234,567");
        assert_eq!(with_locale(-1234.5, "de"), "-1.234,5");
    }

    #[test]
    fn fraction_digits_are_not_grouped() {
        assert_eq!(en(0.123456), "0.123456");
        assert_eq!(with_locale(1000.123456, "de"), "1.000,123456");
    }

    #[test]
    fn exponent_renderings_pass_through() {
        assert_eq!(en(1e21), "1e+21");
        assert_eq!(en(1e-7), "1e-7");
    }

    #[test]
    fn regrouping_own_output_is_idempotent() {
        let first = en(1234567.0);
        let stripped: String = first.chars().filter(|c| *c != ',').collect();
        let reparsed: f64 = stripped.parse().unwrap();
        assert_eq!(en(reparsed), first);
    }
}
