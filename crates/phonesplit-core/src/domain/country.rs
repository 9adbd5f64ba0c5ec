use crate::domain::phone::normalized_or_none;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryLabel {
    Uae,
    Australia,
    Uk,
    UsaCanada,
    Nepal,
    SriLanka,
    Malaysia,
    Bangladesh,
    Qatar,
    Bahrain,
    Germany,
    Singapore,
    SaudiArabia,
    /// Present but no known calling code matched.
    Other,
    /// Missing or empty input.
    Unknown,
}

impl CountryLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            CountryLabel::Uae => "UAE",
            CountryLabel::Australia => "Australia",
            CountryLabel::Uk => "UK",
            CountryLabel::UsaCanada => "USA/Canada",
            CountryLabel::Nepal => "Nepal",
            CountryLabel::SriLanka => "Sri Lanka",
            CountryLabel::Malaysia => "Malaysia",
            CountryLabel::Bangladesh => "Bangladesh",
            CountryLabel::Qatar => "Qatar",
            CountryLabel::Bahrain => "Bahrain",
            CountryLabel::Germany => "Germany",
            CountryLabel::Singapore => "Singapore",
            CountryLabel::SaudiArabia => "Saudi Arabia",
            CountryLabel::Other => "Other",
            CountryLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CountryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CountryLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Calling-code prefixes in lookup order. The first match wins, so entries
/// must not be reordered.
pub const COUNTRY_PREFIXES: [(&str, CountryLabel); 13] = [
    ("971", CountryLabel::Uae),
    ("61", CountryLabel::Australia),
    ("44", CountryLabel::Uk),
    ("1", CountryLabel::UsaCanada),
    ("977", CountryLabel::Nepal),
    ("94", CountryLabel::SriLanka),
    ("60", CountryLabel::Malaysia),
    ("880", CountryLabel::Bangladesh),
    ("974", CountryLabel::Qatar),
    ("973", CountryLabel::Bahrain),
    ("49", CountryLabel::Germany),
    ("65", CountryLabel::Singapore),
    ("966", CountryLabel::SaudiArabia),
];

pub fn get_country_from_phone(phone: Option<&str>) -> CountryLabel {
    let Some(normalized) = normalized_or_none(phone) else {
        return CountryLabel::Unknown;
    };
    resolve_prefix(&normalized)
}

fn resolve_prefix(normalized: &str) -> CountryLabel {
    let digits = normalized.strip_prefix('+').unwrap_or(normalized);
    COUNTRY_PREFIXES
        .iter()
        .find(|(prefix, _)| digits.starts_with(prefix))
        .map(|(_, label)| *label)
        .unwrap_or(CountryLabel::Other)
}
