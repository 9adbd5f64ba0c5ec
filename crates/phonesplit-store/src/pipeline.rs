use crate::error::Result;
use crate::{output, paths, table};
use phonesplit_core::{partition_table, PartitionCounts};
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub const DEFAULT_INDIAN_OUTPUT: &str = "indian_numbers.csv";
pub const DEFAULT_INTERNATIONAL_OUTPUT: &str = "international_numbers.csv";
pub const DEFAULT_PHONE_COLUMN: &str = "Phone";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub indian_output: PathBuf,
    pub international_output: PathBuf,
    pub phone_column: String,
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            indian_output: PathBuf::from(DEFAULT_INDIAN_OUTPUT),
            international_output: PathBuf::from(DEFAULT_INTERNATIONAL_OUTPUT),
            phone_column: DEFAULT_PHONE_COLUMN.to_string(),
        }
    }
}

/// Reads the input table, splits it into Indian and international rows and
/// writes both outputs. Nothing is written when the input cannot be read or
/// lacks the phone column.
pub fn process_phone_numbers(config: &PipelineConfig) -> Result<PartitionCounts> {
    paths::validate_output_paths(
        &config.input,
        &[
            config.indian_output.as_path(),
            config.international_output.as_path(),
        ],
    )?;

    info!(path = %config.input.display(), "reading input");
    let source = table::read_table(&config.input)?;
    debug!(
        rows = source.len(),
        columns = source.headers.len(),
        "input loaded"
    );
    if source.is_empty() {
        warn!(path = %config.input.display(), "input has no data rows");
    }

    let partition = partition_table(source, &config.phone_column)?;

    output::write_tables(&[
        (config.indian_output.as_path(), &partition.indian),
        (
            config.international_output.as_path(),
            &partition.international,
        ),
    ])?;
    info!(
        total = partition.counts.total,
        indian = partition.counts.indian,
        international = partition.counts.international,
        "outputs written"
    );

    Ok(partition.counts)
}
