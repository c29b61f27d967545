use thiserror::Error;

/// Errors that can occur while scraping the catalog
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to fetch a page or image
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// A node or attribute the page is assumed to always render is missing
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// Release date text is present but not in the `Jan 05, 2019` format
    #[error("Invalid release date {text:?}: {source}")]
    DateParseError {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Runtime text has an hour or minute count too large to represent
    #[error("Runtime out of range: {text:?}")]
    RuntimeParseError { text: String },

    /// A CSS selector failed to compile
    #[error("Invalid selector {0}")]
    SelectorError(String),

    /// Command line usage error
    #[error("{0}")]
    UsageError(String),

    /// Error parsing HTTP headers
    #[error("Header parse error: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to serialize output
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

impl ScrapeError {
    pub(crate) fn missing(what: impl Into<String>) -> Self {
        ScrapeError::MissingElement(what.into())
    }
}
