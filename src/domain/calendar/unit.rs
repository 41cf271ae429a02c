use std::str::FromStr;

/// Number of months in the enumerated calendar
pub const MONTHS: u8 = 12;
/// Number of weekdays, Monday first
pub const WEEKDAYS: u8 = 7;
pub const HOURS: u8 = 24;
pub const MINUTES: u8 = 60;

/// A single enumerated unit of spoken content.
///
/// All indices are 0-based: `month` 0-11, `day` 0 up to the month length,
/// `Weekday` 0 (Monday) to 6 (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarUnit {
    Date { month: u8, day: u8 },
    Weekday(u8),
    Time { hour: u8, minute: u8 },
}

/// Category of generated files, also the output sub-directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bank {
    Date,
    Dow,
    Time,
}

impl Bank {
    /// Generation order used when nothing else is configured
    pub const DEFAULT_SEQUENCE: [Bank; 3] = [Bank::Time, Bank::Dow, Bank::Date];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bank::Date => "date",
            Bank::Dow => "dow",
            Bank::Time => "time",
        }
    }

    /// Enumerate every unit belonging to this bank
    pub fn units(&self) -> Vec<CalendarUnit> {
        match self {
            Bank::Date => (0..MONTHS)
                .flat_map(|month| {
                    (0..days_in_month(month)).map(move |day| CalendarUnit::Date { month, day })
                })
                .collect(),
            Bank::Dow => (0..WEEKDAYS).map(CalendarUnit::Weekday).collect(),
            Bank::Time => (0..HOURS)
                .flat_map(|hour| {
                    (0..MINUTES).map(move |minute| CalendarUnit::Time { hour, minute })
                })
                .collect(),
        }
    }
}

impl std::fmt::Display for Bank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Bank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Bank::Date),
            "dow" => Ok(Bank::Dow),
            "time" => Ok(Bank::Time),
            other => Err(format!("unknown bank '{}'", other)),
        }
    }
}

/// Length of a 0-based month. February always has 29 days so the
/// leap day gets its own recording.
pub fn days_in_month(month: u8) -> u8 {
    match month {
        1 => 29,
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        _ => 30,
    }
}
