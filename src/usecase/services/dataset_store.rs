use crate::domain::entities::row::Dataset;
use crate::usecase::ports::source::{DatasetSource, LoadError};

/// Owns the loaded dataset. A failed load leaves the store empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetStore {
    dataset: Dataset,
    last_error: Option<LoadError>,
    loaded: bool,
}

impl DatasetStore {
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn last_error(&self) -> Option<&LoadError> {
        self.last_error.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub async fn load<S: DatasetSource>(&mut self, source: &S) -> Result<&Dataset, LoadError> {
        let location = source.location();
        tracing::info!(%location, "loading dataset");
        let result = source.load().await;
        self.apply(&location, result)
    }

    /// Replaces the dataset wholesale with the outcome of a load.
    pub fn apply(
        &mut self,
        location: &str,
        result: Result<Dataset, LoadError>,
    ) -> Result<&Dataset, LoadError> {
        self.loaded = true;
        match result {
            Ok(dataset) => {
                tracing::info!(%location, rows = dataset.len(), "dataset loaded");
                self.dataset = dataset;
                self.last_error = None;
                Ok(&self.dataset)
            }
            Err(err) => {
                tracing::warn!(%location, error = %err, "dataset load failed, continuing with no rows");
                self.dataset = Dataset::new();
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }
}
