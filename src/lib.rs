//! Locale-aware abbreviation and grouping of numbers.
//!
//! Two independent entry points over a shared locale registry:
//!
//! - [`numify`] reduces a number to a scaled value plus a magnitude suffix,
//!   using either the international (k/M/B/T/P/E) or the Indian (K/L/Cr)
//!   ladder depending on the locale.
//! - [`format_number`] inserts the locale's thousands separators and decimal
//!   separator without abbreviating.
//!
//! Both are pure, deterministic, and total: unrecognized locale codes fall
//! back to English, and no well-typed input makes them panic.
//!
//! ```
//! use numify::{format_number, numify, FormatOptions, NumifyOptions};
//!
//! assert_eq!(numify(23878437.0, &NumifyOptions::default()), "23.88M");
//! assert_eq!(
//!     numify(
//!         23878437.0,
//!         &NumifyOptions { format_type: Some("in".to_string()), ..Default::default() }
//!     ),
//!     "2.39Cr"
//! );
//! assert_eq!(
//!     format_number(
//!         1234567.89,
//!         &FormatOptions { format_type: Some("fr".to_string()) }
//!     ),
//!     "1 234 567,89"
//! );
//! ```

mod group;
mod locale;
mod magnitude;
mod numeric;

pub use group::{FormatOptions, format_number};
pub use locale::{LocaleConfig, NumberSystem};
pub use magnitude::{NumifyOptions, Style, numify};
