pub mod error;
pub mod service;

pub use error::EmitterError;
pub use service::AudioFileEmitter;
