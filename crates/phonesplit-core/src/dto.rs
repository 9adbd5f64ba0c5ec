use crate::domain::country::CountryLabel;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: CountryLabel,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartitionCounts {
    pub total: usize,
    pub indian: usize,
    pub international: usize,
    /// Descending by count.
    pub countries: Vec<CountryCount>,
}

impl PartitionCounts {
    pub fn indian_percent(&self) -> f64 {
        percent(self.indian, self.total)
    }

    pub fn international_percent(&self) -> f64 {
        percent(self.international, self.total)
    }

    pub fn country_percent(&self, entry: &CountryCount) -> f64 {
        percent(entry.count, self.international)
    }
}

pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
