use super::error::NameDayError;
use std::collections::HashMap;
use std::path::Path;

/// Slovak name-day calendar keyed by 1-based (month, day).
///
/// Loaded once at startup and handed to the renderer; never mutated.
#[derive(Debug, Clone, Default)]
pub struct NameDayTable {
    entries: HashMap<(u8, u8), String>,
}

impl NameDayTable {
    /// Read the table from a JSON file of the form
    /// `{"<month>": {"<day>": "<names>"}}`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NameDayError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "Failed to read name-day table");
            NameDayError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let table = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            entries = table.len(),
            "Name-day table loaded"
        );
        Ok(table)
    }

    pub fn from_json(raw: &str) -> Result<Self, NameDayError> {
        let document: HashMap<String, HashMap<String, String>> = serde_json::from_str(raw)?;

        let mut entries = HashMap::new();
        for (month, days) in document {
            let month_key = parse_key(&month)?;
            for (day, names) in days {
                let day_key = parse_key(&day)?;
                if !names.trim().is_empty() {
                    entries.insert((month_key, day_key), names);
                }
            }
        }

        Ok(Self { entries })
    }

    /// Names celebrated on a 0-based month and day, if any
    pub fn lookup(&self, month: u8, day: u8) -> Option<&str> {
        self.entries
            .get(&(month.saturating_add(1), day.saturating_add(1)))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_key(key: &str) -> Result<u8, NameDayError> {
    key.trim()
        .parse::<u8>()
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| NameDayError::InvalidKey(key.to_string()))
}
