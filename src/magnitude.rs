//! Magnitude abbreviation: reduces a number to a scaled value plus a
//! magnitude suffix ("1k", "23.88M", "2.39Cr", "1.23 thousand").

use fixed_decimal::{SignedRoundingMode, UnsignedRoundingMode};

use crate::locale::{LocaleConfig, NumberSystem};
use crate::numeric::{decimal_from_f64, js_number_string};

/// Suffix rendering for [`numify`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    /// Suffix glyph directly adjacent to the number ("1.2k").
    #[default]
    Short,
    /// Full unit word preceded by a space ("1.2 thousand").
    Long,
}

/// Per-call options for [`numify`].
#[derive(Clone, Debug, Default)]
pub struct NumifyOptions {
    /// Locale code ("en", "de", ...) or bare system name
    /// ("international" / "indian"). Unrecognized values resolve to English.
    pub format_type: Option<String>,
    /// Render sub-1000 values with exactly two decimal digits.
    pub precise: bool,
    pub style: Style,
}

/// Descending (threshold, short suffix) ladders. The first entry whose
/// threshold is <= the value wins.
const INTERNATIONAL_UNITS: &[(f64, &str)] = &[
    (1e18, "E"),
    (1e15, "P"),
    (1e12, "T"),
    (1e9, "B"),
    (1e6, "M"),
    (1e3, "k"),
];

const INDIAN_UNITS: &[(f64, &str)] = &[(1e7, "Cr"), (1e5, "L"), (1e3, "K")];

fn long_suffix(short: &str) -> Option<&'static str> {
    match short {
        // the Indian ladder spells thousand with an uppercase K
        "k" | "K" => Some("thousand"),
        "M" => Some("million"),
        "B" => Some("billion"),
        "T" => Some("trillion"),
        "P" => Some("quadrillion"),
        "E" => Some("quintillion"),
        "L" => Some("lakh"),
        "Cr" => Some("crore"),
        _ => None,
    }
}

/// Strips everything but digits and the dot from the canonical rendering and
/// re-parses. A minus sign does not survive this, so negative inputs format
/// as their absolute value; magnitudes >= 1e21 stringify in exponent form
/// and collapse to their digit residue. Both are long-standing quirks of the
/// contract and are kept as-is.
fn sanitize(num: f64) -> f64 {
    let cleaned: String = js_number_string(num)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Rounds to two decimal places, half-up.
fn round_two_places(dec: &mut fixed_decimal::Decimal) {
    dec.round_with_mode(
        -2,
        SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
    );
}

/// Abbreviates `num` with a locale-aware magnitude suffix.
///
/// Values below 1000 are returned unabbreviated: as-is, or with exactly two
/// decimal digits (and the locale's decimal separator) when
/// `options.precise` is set. Larger values are scaled by the largest
/// applicable unit of the locale's ladder, rounded half-up to two decimals,
/// and trailing fraction zeros are trimmed.
///
/// Never panics and never fails: unknown locale codes degrade to English,
/// NaN and infinity degrade to "0".
///
/// ```
/// use numify::{numify, NumifyOptions, Style};
///
/// assert_eq!(numify(1200.0, &NumifyOptions::default()), "1.2k");
/// assert_eq!(
///     numify(1234.0, &NumifyOptions { style: Style::Long, ..Default::default() }),
///     "1.23 thousand"
/// );
/// ```
pub fn numify(num: f64, options: &NumifyOptions) -> String {
    let value = sanitize(num);
    let config = LocaleConfig::resolve(options.format_type.as_deref());

    if value < 1000.0 {
        if options.precise {
            let mut dec = decimal_from_f64(value);
            round_two_places(&mut dec);
            dec.absolute.pad_end(-2);
            return dec.to_string().replace('.', config.decimal_separator);
        }
        return js_number_string(value);
    }

    let units = match config.number_system {
        NumberSystem::International => INTERNATIONAL_UNITS,
        NumberSystem::Indian => INDIAN_UNITS,
    };
    // unreachable given the < 1000 short-circuit, but keep the scan total
    let Some(&(threshold, suffix)) = units.iter().find(|&&(t, _)| value >= t) else {
        return js_number_string(value);
    };

    let mut dec = decimal_from_f64(value / threshold);
    round_two_places(&mut dec);
    dec.absolute.trim_end();
    let scaled = dec.to_string().replace('.', config.decimal_separator);

    match options.style {
        Style::Long => format!("{scaled} {}", long_suffix(suffix).unwrap_or(suffix)),
        Style::Short => format!("{scaled}{suffix}"),
    }
}
