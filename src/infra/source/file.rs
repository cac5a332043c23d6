use std::path::PathBuf;

use crate::domain::entities::row::Dataset;
use crate::infra::source::json::parse_dataset;
use crate::usecase::ports::source::{DatasetSource, LoadError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Dataset, LoadError> {
        let text = std::fs::read_to_string(&self.path).map_err(|err| LoadError::Io {
            location: self.location(),
            message: err.to_string(),
        })?;
        parse_dataset(&text)
    }
}
