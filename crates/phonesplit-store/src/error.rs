use phonesplit_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("input has no header row: {0}")]
    EmptyInput(PathBuf),
    #[error("{path}: line {line} has {found} fields, header has {expected}")]
    MalformedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("invalid output path: {0}")]
    InvalidOutputPath(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Csv,
    Core,
    EmptyInput,
    MalformedRow,
    InvalidOutputPath,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io { .. } => StoreErrorKind::Io,
            StoreError::Csv { .. } => StoreErrorKind::Csv,
            StoreError::Core(_) => StoreErrorKind::Core,
            StoreError::EmptyInput(_) => StoreErrorKind::EmptyInput,
            StoreError::MalformedRow { .. } => StoreErrorKind::MalformedRow,
            StoreError::InvalidOutputPath(_) => StoreErrorKind::InvalidOutputPath,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        StoreError::Csv {
            path: path.into(),
            source,
        }
    }
}
