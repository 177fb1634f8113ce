//! Shared numeric plumbing: ECMAScript-canonical float rendering and
//! conversion into `fixed_decimal::Decimal` for rounding.

use fixed_decimal::{Decimal, FloatPrecision};

/// Canonical decimal-string representation of a number, matching the
/// ECMAScript Number-to-string algorithm (shortest round-trip form, exponent
/// notation for magnitudes >= 1e21 or < 1e-6).
pub(crate) fn js_number_string(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let mut buf = ryu_js::Buffer::new();
    buf.format(x).to_string()
}

/// Lossless conversion to a `Decimal` for half-up rounding. `try_from_f64`
/// only fails on NaN/infinity, which callers have already filtered out, but
/// the fallback chain keeps this total.
pub(crate) fn decimal_from_f64(value: f64) -> Decimal {
    match Decimal::try_from_f64(value, FloatPrecision::RoundTrip) {
        Ok(d) => d,
        Err(_) => match Decimal::try_from_str(&js_number_string(value)) {
            Ok(d) => d,
            Err(_) => Decimal::from(value as i64),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_rendering() {
        assert_eq!(js_number_string(0.0), "0");
        assert_eq!(js_number_string(-0.0), "0");
        assert_eq!(js_number_string(121.0), "121");
        assert_eq!(js_number_string(1234.5), "1234.5");
        assert_eq!(js_number_string(-1234.0), "-1234");
        assert_eq!(js_number_string(f64::NAN), "NaN");
        assert_eq!(js_number_string(f64::INFINITY), "Infinity");
    }

    #[test]
    fn exponent_form_past_1e21() {
        assert_eq!(js_number_string(1e21), "1e+21");
        assert_eq!(js_number_string(1e-7), "1e-7");
    }

    #[test]
    fn decimal_round_trips_shortest_form() {
        assert_eq!(decimal_from_f64(1.234).to_string(), "1.234");
        assert_eq!(decimal_from_f64(500.0).to_string(), "500");
    }
}
