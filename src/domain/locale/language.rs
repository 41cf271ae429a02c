use std::str::FromStr;

/// ISO 639-1 codes of the locales we generate banks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageCode {
    English,
    Slovak,
}

/// Voice parameters sent to the synthesis provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceSelection {
    pub language_code: &'static str,
    pub name: &'static str,
}

impl LanguageCode {
    /// Get the ISO 639-1 code as a string, also the locale directory name
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::Slovak => "sk",
        }
    }

    /// Get the synthesis voice for the language
    pub fn voice(&self) -> VoiceSelection {
        match self {
            LanguageCode::English => VoiceSelection {
                language_code: "en-US",
                name: "en-US-Wavenet-D",
            },
            LanguageCode::Slovak => VoiceSelection {
                language_code: "sk-SK",
                name: "sk-SK-Wavenet-A",
            },
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(LanguageCode::English),
            "sk" => Ok(LanguageCode::Slovak),
            other => Err(format!("unsupported language '{}'", other)),
        }
    }
}
