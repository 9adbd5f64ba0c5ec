pub mod error;
pub mod output;
pub mod paths;
pub mod pipeline;
pub mod table;

pub use error::{Result, StoreError, StoreErrorKind};
pub use pipeline::{process_phone_numbers, PipelineConfig};
