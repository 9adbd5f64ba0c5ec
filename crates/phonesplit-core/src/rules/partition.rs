use crate::domain::country::{get_country_from_phone, CountryLabel};
use crate::domain::table::Table;
use crate::dto::{CountryCount, PartitionCounts};
use crate::error::CoreError;
use crate::rules::india::is_indian_phone_number;

pub const COUNTRY_COLUMN: &str = "Country";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Indian rows, same schema as the source.
    pub indian: Table,
    /// Remaining rows with a trailing country column.
    pub international: Table,
    pub counts: PartitionCounts,
}

/// Splits `table` on the phone column. Row order is preserved within each
/// side and every source row lands on exactly one side.
pub fn partition_table(table: Table, phone_column: &str) -> Result<Partition, CoreError> {
    let column = table.column_index(phone_column)?;
    let Table { headers, rows } = table;
    let total = rows.len();

    let mut international_headers = headers.clone();
    international_headers.push(COUNTRY_COLUMN.to_string());

    let mut indian = Table::new(headers);
    let mut international = Table::new(international_headers);
    let mut countries: Vec<CountryCount> = Vec::new();

    for mut record in rows {
        let phone = record.value(column);
        if is_indian_phone_number(phone) {
            indian.rows.push(record);
            continue;
        }

        let country = get_country_from_phone(phone);
        tally(&mut countries, country);
        record.push(country.as_str());
        international.rows.push(record);
    }

    // Stable sort keeps first-seen order among equal counts.
    countries.sort_by(|a, b| b.count.cmp(&a.count));

    let counts = PartitionCounts {
        total,
        indian: indian.len(),
        international: international.len(),
        countries,
    };

    Ok(Partition {
        indian,
        international,
        counts,
    })
}

fn tally(countries: &mut Vec<CountryCount>, country: CountryLabel) {
    match countries.iter_mut().find(|entry| entry.country == country) {
        Some(entry) => entry.count += 1,
        None => countries.push(CountryCount { country, count: 1 }),
    }
}
