use super::language::LanguageCode;
use super::renderer::{two_level_path, LocaleRenderer, RenderedItem};
use crate::domain::calendar::CalendarUnit;
use crate::domain::nameday::NameDayTable;

const DAYS_OF_WEEK: [&str; 7] = [
    "Pondelok",
    "Utorok",
    "Streda",
    "Štvrtok",
    "Piatok",
    "Sobota",
    "Nedeľa",
];

/// Month names in the nominative, as read after the ordinal day
const MONTHS: [&str; 12] = [
    "Január",
    "Február",
    "Marec",
    "Apríl",
    "Máj",
    "Jún",
    "Júl",
    "August",
    "September",
    "Október",
    "November",
    "December",
];

/// Masculine ordinals agreeing with "deň"
const ORDINAL_DAYS: [&str; 31] = [
    "Prvý",
    "Druhý",
    "Tretí",
    "Štvrtý",
    "Piaty",
    "Šiesty",
    "Siedmy",
    "Ôsmy",
    "Deviaty",
    "Desiaty",
    "Jedenásty",
    "Dvanásty",
    "Trinásty",
    "Štrnásty",
    "Pätnásty",
    "Šestnásty",
    "Sedemnásty",
    "Osemnásty",
    "Devätnásty",
    "Dvadsiaty",
    "Dvadsiatyprvý",
    "Dvadsiatydruhý",
    "Dvadsiatytretí",
    "Dvadsiatyštvrtý",
    "Dvadsiatypiaty",
    "Dvadsiatyšiesty",
    "Dvadsiatysiedmy",
    "Dvadsiatyôsmy",
    "Dvadsiatydeviaty",
    "Tridsiaty",
    "Tridsiatyprvý",
];

const HOURS: [&str; 24] = [
    "polnoc",
    "jedna hodina",
    "dve hodiny",
    "tri hodiny",
    "štyri hodiny",
    "päť hodín",
    "šesť hodín",
    "sedem hodín",
    "osem hodín",
    "deväť hodín",
    "desať hodín",
    "jedenásť hodín",
    "dvanásť hodín",
    "trinásť hodín",
    "štrnásť hodín",
    "pätnásť hodín",
    "šestnásť hodín",
    "sedemnásť hodín",
    "osemnásť hodín",
    "devätnásť hodín",
    "dvadsať hodín",
    "dvadsaťjedna hodín",
    "dvadsaťdva hodín",
    "dvadsaťtri hodín",
];

/// Minute phrases; the full hour has none
const MINUTES: [&str; 60] = [
    "",
    "a jedna minúta",
    "a dve minúty",
    "a tri minúty",
    "a štyri minúty",
    "a päť minút",
    "a šesť minút",
    "a sedem minút",
    "a osem minút",
    "a deväť minút",
    "a desať minút",
    "a jedenásť minút",
    "a dvanásť minút",
    "a trinásť minút",
    "a štrnásť minút",
    "a pätnásť minút",
    "a šestnásť minút",
    "a sedemnásť minút",
    "a osemnásť minút",
    "a devätnásť minút",
    "a dvadsať minút",
    "a dvadsaťjeden minút",
    "a dvadsaťdva minút",
    "a dvadsaťtri minút",
    "a dvadsaťštyri minút",
    "a dvadsaťpäť minút",
    "a dvadsaťšesť minút",
    "a dvadsaťsedem minút",
    "a dvadsaťosem minút",
    "a dvadsaťdeväť minút",
    "a tridsať minút",
    "a tridsaťjeden minút",
    "a tridsaťdva minút",
    "a tridsaťtri minút",
    "a tridsaťštyri minút",
    "a tridsaťpäť minút",
    "a tridsaťšesť minút",
    "a tridsaťsedem minút",
    "a tridsaťosem minút",
    "a tridsaťdeväť minút",
    "a štyridsať minút",
    "a štyridsaťjeden minút",
    "a štyridsaťdva minút",
    "a štyridsaťtri minút",
    "a štyridsaťštyri minút",
    "a štyridsaťpäť minút",
    "a štyridsaťšesť minút",
    "a štyridsaťsedem minút",
    "a štyridsaťosem minút",
    "a štyridsaťdeväť minút",
    "a päťdesiat minút",
    "a päťdesiatjeden minút",
    "a päťdesiatdva minút",
    "a päťdesiattri minút",
    "a päťdesiatštyri minút",
    "a päťdesiatpäť minút",
    "a päťdesiatšesť minút",
    "a päťdesiatsedem minút",
    "a päťdesiatosem minút",
    "a päťdesiatdeväť minút",
];

/// Part-of-day qualifier appended to a spoken time.
///
/// Midnight is the only hour left unqualified; noon counts as afternoon.
pub fn daytime_qualifier(hour: u8) -> Option<&'static str> {
    match hour {
        1..=4 | 21..=23 => Some("v noci"),
        5..=11 => Some("ráno"),
        12..=16 => Some("poobede"),
        17..=20 => Some("večer"),
        _ => None,
    }
}

pub struct SlovakRenderer {
    name_days: NameDayTable,
}

impl SlovakRenderer {
    pub fn new(name_days: NameDayTable) -> Self {
        Self { name_days }
    }

    fn date(&self, month: u8, day: u8) -> RenderedItem {
        let mut text = format!(
            "<p>Dnes je {} {}.</p>",
            ORDINAL_DAYS[day as usize], MONTHS[month as usize]
        );
        if let Some(names) = self.name_days.lookup(month, day) {
            text.push_str(&format!("<p>Meniny má {}.</p>", names));
        }
        RenderedItem::new(two_level_path(month + 1, day + 1), text)
    }

    fn time(&self, hour: u8, minute: u8) -> RenderedItem {
        let mut spoken = HOURS[hour as usize].to_string();
        let minutes = MINUTES[minute as usize];
        if !minutes.is_empty() {
            spoken.push(' ');
            spoken.push_str(minutes);
        }
        if let Some(qualifier) = daytime_qualifier(hour) {
            spoken.push(' ');
            spoken.push_str(qualifier);
        }
        RenderedItem::new(
            two_level_path(hour, minute),
            format!("<p>Práve je {}.</p>", spoken),
        )
    }
}

impl LocaleRenderer for SlovakRenderer {
    fn language(&self) -> LanguageCode {
        LanguageCode::Slovak
    }

    fn render(&self, unit: CalendarUnit) -> RenderedItem {
        match unit {
            CalendarUnit::Date { month, day } => self.date(month, day),
            CalendarUnit::Weekday(dow) => RenderedItem::new(
                (dow + 1).to_string(),
                format!("<p>{}.</p>", DAYS_OF_WEEK[dow as usize]),
            ),
            CalendarUnit::Time { hour, minute } => self.time(hour, minute),
        }
    }
}
