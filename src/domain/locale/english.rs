use super::language::LanguageCode;
use super::renderer::{two_level_path, LocaleRenderer, RenderedItem};
use crate::domain::calendar::CalendarUnit;

const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishRenderer;

impl LocaleRenderer for EnglishRenderer {
    fn language(&self) -> LanguageCode {
        LanguageCode::English
    }

    fn render(&self, unit: CalendarUnit) -> RenderedItem {
        match unit {
            CalendarUnit::Date { month, day } => RenderedItem::new(
                two_level_path(month + 1, day + 1),
                format!("<p>{} {}.</p>", MONTHS[month as usize], day + 1),
            ),
            CalendarUnit::Weekday(dow) => RenderedItem::new(
                (dow + 1).to_string(),
                format!("<p>Today is {}.</p>", DAYS_OF_WEEK[dow as usize]),
            ),
            CalendarUnit::Time { hour, minute } => RenderedItem::new(
                two_level_path(hour, minute),
                format!("<p>It is {:02}:{:02}.</p>", hour, minute),
            ),
        }
    }
}
