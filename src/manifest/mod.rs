//! Manifest data model and loader
//!
//! The export pipeline writes a `manifest.json` next to the exported
//! screenshots: a JSON array of test results, each carrying zero or more
//! attachment records. Field access is best-effort: every field is
//! optional and unknown fields are ignored.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Manifest filename expected in the working directory
pub const MANIFEST_FILE: &str = "manifest.json";

/// One test result from the export manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestResult {
    /// Exported attachments for this test; missing key means none
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// One exported attachment record
///
/// `exported_file_name` is the file currently on disk (the rename source);
/// `suggested_human_readable_name` is the display name the rename target is
/// derived from. Either may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(default)]
    pub exported_file_name: Option<String>,

    #[serde(default)]
    pub suggested_human_readable_name: Option<String>,
}

/// Load and parse a manifest file
///
/// # Errors
/// Returns `RenamerError::Io` if the file cannot be read and
/// `RenamerError::MalformedManifest` if the content is not a valid JSON
/// array of test results. Neither is recovered from.
pub fn load(path: &Path) -> Result<Vec<TestResult>> {
    let contents = fs::read_to_string(path)?;
    let results = serde_json::from_str(&contents)?;
    Ok(results)
}
