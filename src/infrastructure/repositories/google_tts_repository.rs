use super::tts_repository::TtsRepository;
use crate::domain::locale::LanguageCode;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

const AUDIO_ENCODING: &str = "MP3";
const SPEAKING_RATE: f32 = 0.75;
const PITCH: f32 = -1.0;

const API_KEY_HEADER: &str = "X-Goog-Api-Key";

#[derive(Debug, Serialize)]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelectionParams<'a>,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    ssml: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelectionParams<'a> {
    language_code: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
    speaking_rate: f32,
    pitch: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

/// Google Cloud Text-to-Speech implementation of TTS repository
pub struct GoogleTtsRepository {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GoogleTtsRepository {
    pub fn new(api_key: String, endpoint: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }

    fn build_request(ssml: &str, language: LanguageCode) -> SynthesizeRequest<'_> {
        let voice = language.voice();
        SynthesizeRequest {
            input: SynthesisInput { ssml },
            voice: VoiceSelectionParams {
                language_code: voice.language_code,
                name: voice.name,
            },
            audio_config: AudioConfig {
                audio_encoding: AUDIO_ENCODING,
                speaking_rate: SPEAKING_RATE,
                pitch: PITCH,
            },
        }
    }

    fn decode_audio(body: &str) -> Result<Vec<u8>, String> {
        let response: SynthesizeResponse = serde_json::from_str(body)
            .map_err(|e| format!("Unexpected synthesis response: {}", e))?;
        STANDARD
            .decode(response.audio_content.as_bytes())
            .map_err(|e| format!("Invalid audioContent encoding: {}", e))
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, ssml: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();
        let request = Self::build_request(ssml, language);

        tracing::debug!(
            language = %language,
            voice = request.voice.name,
            output_format = AUDIO_ENCODING,
            text_length = ssml.len(),
            "Calling Google text:synthesize"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    language = %language,
                    "Google text:synthesize request failed"
                );
                format!("Google TTS request error: {}", e)
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read synthesis response: {}", e.without_url()))?;

        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                language = %language,
                "Google text:synthesize returned an error"
            );
            return Err(format!("Google TTS error {}: {}", status.as_u16(), body));
        }

        let audio = Self::decode_audio(&body)?;

        tracing::debug!(
            provider = "google",
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio.len(),
            "TTS synthesis completed"
        );

        Ok(audio)
    }
}
