use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid mock data: {0}")]
    Json(#[from] serde_json::Error),
    /// Two conversations claim the same worker, so lookups would be ambiguous.
    #[error("Duplicate conversation for worker {0}")]
    DuplicateWorker(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JobPostingError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
