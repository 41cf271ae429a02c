use async_trait::async_trait;
use std::sync::Mutex;
use voicebank_gen::domain::locale::LanguageCode;
use voicebank_gen::infrastructure::repositories::TtsRepository;

/// Records every request; optionally starts failing after a number of calls
#[derive(Default)]
pub struct MockTtsRepository {
    requests: Mutex<Vec<(String, LanguageCode)>>,
    fail_after: Option<usize>,
}

impl MockTtsRepository {
    pub fn failing_after(successes: usize) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_after: Some(successes),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<(String, LanguageCode)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TtsRepository for MockTtsRepository {
    async fn synthesize(&self, ssml: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        let mut requests = self.requests.lock().unwrap();
        requests.push((ssml.to_string(), language));

        match self.fail_after {
            Some(limit) if requests.len() > limit => Err("mock synthesis outage".to_string()),
            _ => Ok(mock_audio_bytes()),
        }
    }
}

pub fn mock_audio_bytes() -> Vec<u8> {
    // Minimal valid MP3 file (silence)
    vec![
        0xFF, 0xFB, 0x90, 0x00, // MP3 frame header
        0x00, 0x00, 0x00, 0x00, // Some padding
    ]
}
