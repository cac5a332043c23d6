use std::future::Future;

use thiserror::Error;

use crate::domain::entities::row::Dataset;

/// Why a dataset load produced no rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("failed to read dataset {location}: {message}")]
    Io { location: String, message: String },

    #[error("failed to fetch dataset {location}: {message}")]
    Fetch { location: String, message: String },

    #[error("malformed dataset: {message}")]
    Malformed { message: String },

    #[error("duplicate row id {id} at row {row}")]
    DuplicateId { id: String, row: usize },
}

impl LoadError {
    pub fn malformed(message: impl Into<String>) -> Self {
        LoadError::Malformed {
            message: message.into(),
        }
    }
}

/// A fixed location the dataset document is read from.
pub trait DatasetSource {
    fn location(&self) -> String;

    fn load(&self) -> impl Future<Output = Result<Dataset, LoadError>>;
}
