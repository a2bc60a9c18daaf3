use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    // Transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} failed with status {status}{}", reason_suffix(.message))]
    Status {
        status: reqwest::StatusCode,
        url: String,
        /// Reason given by the service, empty when it sent none
        message: String,
    },

    #[error("invalid API URL '{0}': {1}")]
    InvalidUrl(String, String),

    #[error("service at {url} reports status '{status}'")]
    Unhealthy { url: String, status: String },

    // Persistence errors
    #[error("storage error for key '{key}': {message}")]
    Storage { key: String, message: String },

    #[error("invalid sort column '{0}'")]
    InvalidSortColumn(String),

    #[error("invalid sort direction '{0}', expected 'asc' or 'desc'")]
    InvalidSortDirection(String),

    #[error("invalid facet '{0}'")]
    InvalidFacet(String),

    #[error("invalid page size '{0}', expected one of 10, 25, 50, 100")]
    InvalidPageSize(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExplorerError {
    pub fn invalid_sort_column(s: String) -> Self {
        ExplorerError::InvalidSortColumn(s)
    }

    pub fn invalid_sort_direction(s: String) -> Self {
        ExplorerError::InvalidSortDirection(s)
    }

    pub fn invalid_facet(s: String) -> Self {
        ExplorerError::InvalidFacet(s)
    }

    pub fn storage(key: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        ExplorerError::Storage {
            key: key.into(),
            message: cause.to_string(),
        }
    }

    /// Non-success HTTP status or network failure talking to the data service.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ExplorerError::Http(_)
                | ExplorerError::Status { .. }
                | ExplorerError::InvalidUrl(..)
                | ExplorerError::Unhealthy { .. }
        )
    }

    /// Durable storage read, write or parse failure.
    pub fn is_persistence(&self) -> bool {
        matches!(self, ExplorerError::Storage { .. })
    }

    /// HTTP status of a failed request, if the service answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ExplorerError::Status { status, .. } => Some(*status),
            ExplorerError::Http(e) => e.status(),
            _ => None,
        }
    }
}

fn reason_suffix(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {message}")
    }
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
