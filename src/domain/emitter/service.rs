use super::error::EmitterError;
use crate::domain::locale::LanguageCode;
use crate::infrastructure::repositories::TtsRepository;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const AUDIO_EXTENSION: &str = "mp3";

/// Writes synthesized audio into `<root>/<lang>/<path>.mp3`
pub struct AudioFileEmitter {
    tts_repo: Arc<dyn TtsRepository>,
    output_root: PathBuf,
    language: LanguageCode,
    dry_run: bool,
}

impl AudioFileEmitter {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        output_root: impl Into<PathBuf>,
        language: LanguageCode,
        dry_run: bool,
    ) -> Self {
        Self {
            tts_repo,
            output_root: output_root.into(),
            language,
            dry_run,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Canonical file for a relative, `/`-separated path
    pub fn output_path(&self, path: &str) -> PathBuf {
        let mut file = self.output_root.join(self.language.as_str());
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            file.push(segment);
        }
        let mut file = file.into_os_string();
        file.push(".");
        file.push(AUDIO_EXTENSION);
        PathBuf::from(file)
    }

    /// Synthesize `text` (SSML paragraphs) and store it under `path`.
    ///
    /// In dry-run mode only the intended call is logged. Returns the file
    /// the audio belongs to either way.
    pub async fn create_audio_file(&self, path: &str, text: &str) -> Result<PathBuf, EmitterError> {
        let file = self.output_path(path);
        let speak = format!("<speak>{}</speak>", text);

        tracing::info!(
            file = %file.display(),
            ssml = %speak,
            "Calling synthesis API"
        );

        if self.dry_run {
            return Ok(file);
        }

        let audio = self
            .tts_repo
            .synthesize(&speak, self.language)
            .await
            .map_err(|message| {
                tracing::error!(
                    file = %file.display(),
                    error = %message,
                    language = %self.language,
                    "Synthesis failed"
                );
                EmitterError::Synthesis {
                    file: file.clone(),
                    message,
                }
            })?;

        write_audio(&file, &audio).await.map_err(|source| {
            tracing::error!(file = %file.display(), error = %source, "Failed to write audio file");
            EmitterError::Write {
                file: file.clone(),
                source,
            }
        })?;

        tracing::debug!(
            file = %file.display(),
            audio_size = audio.len(),
            "Audio file written"
        );

        Ok(file)
    }
}

async fn write_audio(file: &Path, audio: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = file.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(file, audio).await
}
