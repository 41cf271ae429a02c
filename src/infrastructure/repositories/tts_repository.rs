use crate::domain::locale::LanguageCode;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (Google Cloud, test doubles, etc.)
///
/// Implementations are responsible for:
/// - Provider-specific voice selection for the language
/// - Applying the fixed audio configuration (MP3, rate, pitch)
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize an SSML document for a given language
    ///
    /// Returns MP3 audio data
    ///
    /// # Arguments
    /// * `ssml` - Complete document, already wrapped in `<speak>`
    /// * `language` - The target language for synthesis
    ///
    /// # Errors
    /// Returns error if synthesis fails or provider is unavailable
    async fn synthesize(&self, ssml: &str, language: LanguageCode) -> Result<Vec<u8>, String>;
}
