use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum NameDayError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed name-day document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid key '{0}', expected a 1-based number")]
    InvalidKey(String),
}
