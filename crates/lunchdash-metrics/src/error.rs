use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("failed to serialize dashboard: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
