use crate::domain::calendar::Bank;
use crate::domain::locale::LanguageCode;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::google_tts_repository::DEFAULT_ENDPOINT;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub language: LanguageCode,
    pub output_dir: PathBuf,
    pub nameday_path: PathBuf,
    pub banks: Vec<Bank>,
    pub dry_run: bool,
    pub log_format: LogFormat,
    // Google Cloud TTS
    pub google_api_key: Option<String>,
    pub google_endpoint: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            language: env::var("VOICE_LANGUAGE")
                .unwrap_or_else(|_| "sk".to_string())
                .parse()
                .map_err(AppError::Config)?,
            output_dir: env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "locales".to_string())
                .into(),
            nameday_path: env::var("NAMEDAY_PATH")
                .unwrap_or_else(|_| "meniny.json".to_string())
                .into(),
            banks: match env::var("BANKS") {
                Ok(list) => parse_banks(&list)?,
                Err(_) => Bank::DEFAULT_SEQUENCE.to_vec(),
            },
            dry_run: match env::var("DRY_RUN") {
                Ok(value) => parse_flag("DRY_RUN", &value)?,
                Err(_) => false,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            google_api_key: env::var("GOOGLE_TTS_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            google_endpoint: env::var("GOOGLE_TTS_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
        };

        if !config.dry_run && config.google_api_key.is_none() {
            return Err(AppError::Config(
                "GOOGLE_TTS_API_KEY is required unless DRY_RUN=true".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn needs_name_days(&self) -> bool {
        self.language == LanguageCode::Slovak
    }
}

/// Parse a boolean switch; only `true` and `false` are accepted
pub fn parse_flag(name: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" | "" => Ok(false),
        other => Err(AppError::Config(format!(
            "{} must be 'true' or 'false', got '{}'",
            name, other
        ))),
    }
}

/// Join command-line arguments into the literal text for direct synthesis.
///
/// Arguments that are not valid UTF-8 are converted lossily.
pub fn direct_text<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = OsString>,
{
    let words: Vec<String> = args
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Parse a comma-separated bank list, keeping the given order
pub fn parse_banks(list: &str) -> AppResult<Vec<Bank>> {
    let banks = list
        .split(',')
        .filter(|name| !name.trim().is_empty())
        .map(|name| name.parse::<Bank>().map_err(AppError::Config))
        .collect::<AppResult<Vec<_>>>()?;

    if banks.is_empty() {
        return Err(AppError::Config("BANKS must name at least one bank".to_string()));
    }

    Ok(banks)
}
