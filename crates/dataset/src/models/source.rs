use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::DatasetError;

lazy_static! {
    /// Matches the spreadsheet id inside a Google Sheets URL
    /// Format: .../d/<id>/...
    static ref SPREADSHEET_ID_REGEX: Regex =
        Regex::new(r"/d/([a-zA-Z0-9_-]+)").expect("Invalid regex pattern");
}

/// Stable reference to one worksheet of a spreadsheet-backed data source.
///
/// `spreadsheet` is either a full Google Sheets URL or a bare spreadsheet
/// id; `worksheet` is the tab identifier (the `gid` query parameter in the
/// sheet's URL). For file-backed providers, `spreadsheet` is the file path
/// and `worksheet` is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetRef {
    pub spreadsheet: String,
    pub worksheet: String,
}

impl SheetRef {
    pub fn new(spreadsheet: impl Into<String>, worksheet: impl Into<String>) -> Self {
        Self {
            spreadsheet: spreadsheet.into(),
            worksheet: worksheet.into(),
        }
    }

    /// The bare spreadsheet id, extracted from the URL when one was given.
    pub fn spreadsheet_id(&self) -> Result<String, DatasetError> {
        if !self.spreadsheet.contains('/') {
            return Ok(self.spreadsheet.clone());
        }
        SPREADSHEET_ID_REGEX
            .captures(&self.spreadsheet)
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str().to_string())
            .ok_or_else(|| DatasetError::InvalidSheetRef(self.spreadsheet.clone()))
    }

    /// Key under which tables loaded from this reference are cached.
    pub fn cache_key(&self) -> String {
        format!("{}#{}", self.spreadsheet, self.worksheet)
    }
}
