use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum EmitterError {
    #[error("synthesis of {file} failed: {message}")]
    Synthesis { file: PathBuf, message: String },
    #[error("cannot write {file}: {source}")]
    Write {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
