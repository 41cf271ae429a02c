use crate::domain::emitter::EmitterError;
use crate::domain::nameday::NameDayError;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Name-day table error: {0}")]
    NameDay(#[from] NameDayError),

    #[error("Synthesis failed: {0}")]
    Synthesis(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<EmitterError> for AppError {
    fn from(err: EmitterError) -> Self {
        match err {
            EmitterError::Synthesis { file, message } => {
                AppError::Synthesis(format!("{}: {}", file.display(), message))
            }
            EmitterError::Write { source, .. } => AppError::Io(source),
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
