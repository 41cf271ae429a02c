use super::english::EnglishRenderer;
use super::language::LanguageCode;
use super::slovak::SlovakRenderer;
use crate::domain::calendar::{Bank, CalendarUnit};
use crate::domain::nameday::NameDayTable;
use crate::error::{AppError, AppResult};
use std::collections::BTreeSet;

/// One file to synthesize: its path inside the bank and the SSML paragraphs
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RenderedItem {
    pub path: String,
    pub text: String,
}

impl RenderedItem {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// Turns calendar units into spoken text for one language.
///
/// Implementations must be pure: the same unit always renders to the same item.
pub trait LocaleRenderer: Send + Sync {
    fn language(&self) -> LanguageCode;

    fn render(&self, unit: CalendarUnit) -> RenderedItem;

    /// Render every unit of a bank, deduplicated on (path, text)
    fn render_bank(&self, bank: Bank) -> BTreeSet<RenderedItem> {
        bank.units()
            .into_iter()
            .map(|unit| self.render(unit))
            .collect()
    }
}

/// Select the renderer for a configured language.
///
/// Slovak dates announce name days, so the Slovak renderer requires a table.
pub fn renderer_for(
    language: LanguageCode,
    name_days: Option<NameDayTable>,
) -> AppResult<Box<dyn LocaleRenderer>> {
    match (language, name_days) {
        (LanguageCode::English, _) => Ok(Box::new(EnglishRenderer)),
        (LanguageCode::Slovak, Some(table)) => Ok(Box::new(SlovakRenderer::new(table))),
        (LanguageCode::Slovak, None) => Err(AppError::Config(
            "the Slovak renderer requires a name-day table".to_string(),
        )),
    }
}

pub(crate) fn two_level_path(first: u8, second: u8) -> String {
    format!("{:02}/{:02}", first, second)
}
