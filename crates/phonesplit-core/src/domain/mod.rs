pub mod country;
pub mod phone;
pub mod table;

pub use country::{get_country_from_phone, CountryLabel, COUNTRY_PREFIXES};
pub use phone::{normalize_phone, normalized_or_none};
pub use table::{Record, Table};
