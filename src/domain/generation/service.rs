use crate::domain::calendar::Bank;
use crate::domain::emitter::{AudioFileEmitter, EmitterError};
use crate::domain::locale::LocaleRenderer;

/// File name used for free-form text given on the command line
pub const DIRECT_TEXT_PATH: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankSummary {
    pub bank: Bank,
    pub items: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub banks: Vec<BankSummary>,
    pub files_written: usize,
}

impl GenerationSummary {
    pub fn total_items(&self) -> usize {
        self.banks.iter().map(|b| b.items).sum()
    }
}

/// Renders banks for one locale and hands each item to the emitter
pub struct BankGenerator {
    renderer: Box<dyn LocaleRenderer>,
    emitter: AudioFileEmitter,
}

impl BankGenerator {
    pub fn new(renderer: Box<dyn LocaleRenderer>, emitter: AudioFileEmitter) -> Self {
        Self { renderer, emitter }
    }

    /// Generate every item of the given banks, in order.
    ///
    /// Stops at the first failure; files written before it stay on disk.
    pub async fn run(&self, banks: &[Bank]) -> Result<GenerationSummary, EmitterError> {
        let mut summary = GenerationSummary::default();

        for &bank in banks {
            let items = self.renderer.render_bank(bank);
            tracing::info!(
                bank = %bank,
                language = %self.renderer.language(),
                items = items.len(),
                "Generating bank"
            );

            for item in &items {
                if self.emitter.is_dry_run() {
                    tracing::info!("{} -> {}", item.path, item.text);
                }
                let path = format!("{}/{}", bank.as_str(), item.path);
                self.emitter.create_audio_file(&path, &item.text).await?;
                if !self.emitter.is_dry_run() {
                    summary.files_written += 1;
                }
            }

            summary.banks.push(BankSummary {
                bank,
                items: items.len(),
            });
        }

        tracing::info!(
            total_items = summary.total_items(),
            files_written = summary.files_written,
            "Generation finished"
        );

        Ok(summary)
    }

    /// Synthesize literal text into the locale's `file.mp3`
    pub async fn synthesize_direct(&self, text: &str) -> Result<(), EmitterError> {
        tracing::info!("Generating direct text input into {}.mp3", DIRECT_TEXT_PATH);
        self.emitter.create_audio_file(DIRECT_TEXT_PATH, text).await?;
        Ok(())
    }
}
