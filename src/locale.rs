//! Static locale registry: maps a format-type code to the separator and
//! number-system configuration both formatters consume.

/// Which magnitude ladder applies when abbreviating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberSystem {
    /// Powers of 1000: k / M / B / T / P / E.
    International,
    /// Thousand / lakh / crore: K / L / Cr at 1e3 / 1e5 / 1e7.
    Indian,
}

/// Separator and number-system triple for one locale.
///
/// Separators never influence which magnitude ladder is used; only
/// `number_system` does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocaleConfig {
    pub decimal_separator: &'static str,
    pub thousand_separator: &'static str,
    pub number_system: NumberSystem,
}

const ENGLISH: LocaleConfig = LocaleConfig {
    decimal_separator: ".",
    thousand_separator: ",",
    number_system: NumberSystem::International,
};

impl LocaleConfig {
    /// Total lookup: never fails, never panics.
    ///
    /// Bare system names ("international" / "indian") bypass locale-specific
    /// separators and return a '.' / ',' configuration with the requested
    /// ladder. Unknown codes, the empty string, and `None` all resolve to
    /// English.
    pub fn resolve(format_type: Option<&str>) -> LocaleConfig {
        match format_type {
            None | Some("") => ENGLISH,
            Some("international") => ENGLISH,
            Some("indian") => LocaleConfig {
                number_system: NumberSystem::Indian,
                ..ENGLISH
            },
            Some(code) => match code {
                "en" => ENGLISH,
                "de" => LocaleConfig {
                    decimal_separator: ",",
                    thousand_separator: ".",
                    number_system: NumberSystem::International,
                },
                "fr" => LocaleConfig {
                    decimal_separator: ",",
                    thousand_separator: " ",
                    number_system: NumberSystem::International,
                },
                "es" => LocaleConfig {
                    decimal_separator: ",",
                    thousand_separator: ".",
                    number_system: NumberSystem::International,
                },
                "in" => LocaleConfig {
                    decimal_separator: ".",
                    thousand_separator: ",",
                    number_system: NumberSystem::Indian,
                },
                "it" => LocaleConfig {
                    decimal_separator: ",",
                    thousand_separator: ".",
                    number_system: NumberSystem::International,
                },
                "ch" => LocaleConfig {
                    decimal_separator: ".",
                    thousand_separator: "'",
                    number_system: NumberSystem::International,
                },
                "se" => LocaleConfig {
                    decimal_separator: ",",
                    thousand_separator: " ",
                    number_system: NumberSystem::International,
                },
                _ => ENGLISH,
            },
        }
    }
}
