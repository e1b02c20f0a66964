use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// A decimal digit found while scanning a row, keyed by its 1-based
/// character position in the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitEntry {
    pub position: usize,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowOutcome {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterOutcome {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobReport {
    pub job: String,
    pub rows: Vec<RowOutcome>,
    pub rosters: Vec<RosterOutcome>,
}

impl JobReport {
    pub fn has_failures(&self) -> bool {
        self.rows.iter().any(|r| r.error.is_some())
            || self.rosters.iter().any(|r| r.error.is_some())
    }

    pub fn failure_count(&self) -> usize {
        self.rows.iter().filter(|r| r.error.is_some()).count()
            + self.rosters.iter().filter(|r| r.error.is_some()).count()
    }

    /// Pretty-printed JSON; encode failures surface as `SerializationError`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text rendering, one line per row and per roster.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            match (&row.value, &row.error) {
                (Some(value), _) => out.push_str(&format!("{} => {}\n", row.input, value)),
                (None, Some(error)) => out.push_str(&format!("{} => error: {}\n", row.input, error)),
                (None, None) => out.push_str(&format!("{} => (not scored)\n", row.input)),
            }
        }
        for roster in &self.rosters {
            match (&roster.first_names, &roster.error) {
                (Some(names), _) => {
                    out.push_str(&format!("{}: [{}]\n", roster.name, names.join(", ")))
                }
                (None, Some(error)) => {
                    out.push_str(&format!("{}: error: {}\n", roster.name, error))
                }
                (None, None) => out.push_str(&format!("{}: (not parsed)\n", roster.name)),
            }
        }
        out
    }
}
