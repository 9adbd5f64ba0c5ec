pub mod india;
pub mod partition;

pub use india::is_indian_phone_number;
pub use partition::{partition_table, Partition, COUNTRY_COLUMN};
