use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Failures while reading the reviews or posts documents.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {path}")]
    InputMissing { path: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be decoded, e.g. a score that is not a number.
    #[error("malformed input in {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
