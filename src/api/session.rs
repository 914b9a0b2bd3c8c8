use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlotError, PlotResult};

/// Saved state of the function input form.
///
/// Numeric fields stay as the strings the user typed; they are not parsed
/// until the form is submitted. `choice_index` is `-1` when nothing is
/// selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub choice_index: i64,
    pub start: String,
    pub end: String,
    pub slices: String,
    pub color: String,
}

impl SessionRecord {
    /// Compact JSON followed by a newline.
    pub fn to_json_string(&self) -> PlotResult<String> {
        let mut json = serde_json::to_string(self).map_err(|e| {
            PlotError::Persistence(format!("failed to serialize session record: {e}"))
        })?;
        json.push('\n');
        Ok(json)
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::Persistence(format!("failed to parse session record: {e}")))
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?).map_err(|err| {
            PlotError::Persistence(format!("failed to write `{}`: {err}", path.display()))
        })?;
        debug!(path = %path.display(), "saved session record");
        Ok(())
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> PlotResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            PlotError::Persistence(format!("failed to read `{}`: {err}", path.display()))
        })?;
        let record = Self::from_json_str(&raw)?;
        debug!(path = %path.display(), choice_index = record.choice_index, "loaded session record");
        Ok(record)
    }
}
