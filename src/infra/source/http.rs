use crate::domain::entities::row::Dataset;
use crate::infra::source::json::parse_dataset;
use crate::usecase::ports::source::{DatasetSource, LoadError};

/// Fetches the dataset document from the page origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSource {
    pub url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn fetch_error(&self, err: impl std::fmt::Display) -> LoadError {
        LoadError::Fetch {
            location: self.url.clone(),
            message: err.to_string(),
        }
    }

    async fn absolute_url(&self) -> String {
        if !self.url.starts_with('/') {
            return self.url.clone();
        }
        let origin = dioxus::document::eval("return window.location.origin;")
            .join::<String>()
            .await
            .unwrap_or_default();
        format!("{origin}{}", self.url)
    }
}

impl DatasetSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<Dataset, LoadError> {
        let response = reqwest::get(self.absolute_url().await)
            .await
            .map_err(|err| self.fetch_error(err))?;
        let response = response
            .error_for_status()
            .map_err(|err| self.fetch_error(err))?;
        let text = response.text().await.map_err(|err| self.fetch_error(err))?;
        parse_dataset(&text)
    }
}
