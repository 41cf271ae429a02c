use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use voicebank_gen::domain::emitter::AudioFileEmitter;
use voicebank_gen::domain::generation::BankGenerator;
use voicebank_gen::domain::locale::{renderer_for, LanguageCode};
use voicebank_gen::domain::nameday::NameDayTable;

pub mod tts_mocks;

use tts_mocks::MockTtsRepository;

/// A small excerpt of the Slovak name-day calendar
pub const NAMEDAY_FIXTURE: &str = r#"{
    "1": {"2": "Alexandra, Karina", "3": "Daniela"},
    "2": {"29": "Radomír"},
    "12": {"24": "Adam, Eva"}
}"#;

pub struct TestContext {
    pub dir: TempDir,
    pub tts: Arc<MockTtsRepository>,
}

impl TestContext {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
            tts: Arc::new(MockTtsRepository::default()),
        })
    }

    pub fn with_failure_after(successes: usize) -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
            tts: Arc::new(MockTtsRepository::failing_after(successes)),
        })
    }

    pub fn output_root(&self) -> &Path {
        self.dir.path()
    }

    pub fn locale_dir(&self, language: LanguageCode) -> PathBuf {
        self.dir.path().join(language.as_str())
    }

    /// Write the name-day fixture next to the output and load it back
    pub fn name_days(&self) -> Result<NameDayTable> {
        let path = self.dir.path().join("meniny.json");
        std::fs::write(&path, NAMEDAY_FIXTURE)?;
        Ok(NameDayTable::load(&path)?)
    }

    pub fn generator(
        &self,
        language: LanguageCode,
        name_days: Option<NameDayTable>,
        dry_run: bool,
    ) -> BankGenerator {
        let emitter = AudioFileEmitter::new(
            self.tts.clone(),
            self.output_root(),
            language,
            dry_run,
        );
        let renderer = renderer_for(language, name_days).expect("renderer for test language");
        BankGenerator::new(renderer, emitter)
    }
}

/// Count regular files below a directory
pub fn count_files(dir: &Path) -> usize {
    if !dir.exists() {
        return 0;
    }
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .map(|path| if path.is_dir() { count_files(&path) } else { 1 })
        .sum()
}
