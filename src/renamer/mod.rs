//! Single-pass screenshot renaming
//!
//! Reads the export manifest from the working directory, renames each
//! attachment's exported file to its clean name, then deletes the manifest.
//! The run is fully sequential in manifest order, prints one status line
//! per rename, and has no recovery path: any filesystem or parse failure
//! propagates and leaves already-renamed files in place.

use crate::error::{RenamerError, Result};
use crate::manifest::{self, MANIFEST_FILE};
use crate::naming;
use std::fs;
use std::path::PathBuf;

/// Summary of one renaming run
///
/// Skips are silent at the console; the report is the only place they are
/// visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Whether a manifest was found (a missing manifest is a successful
    /// no-op run)
    pub manifest_found: bool,

    /// Attachments renamed on disk
    pub renamed: usize,

    /// Attachments visited but left untouched (missing fields, missing
    /// source file, unchanged name, or target collision)
    pub skipped: usize,
}

/// One-shot renamer bound to a working directory
pub struct Renamer {
    dir: PathBuf,
}

impl Renamer {
    /// Create a renamer for the directory holding `manifest.json` and the
    /// exported screenshots
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Process the manifest and rename every eligible attachment
    ///
    /// Rules per attachment, in manifest order:
    /// - skipped when `exportedFileName` is absent/empty, the suggested
    ///   name is absent/empty, or the source file does not exist;
    /// - skipped when the clean name equals the exported name or a file
    ///   already exists at the clean name (never overwrites);
    /// - otherwise renamed, with a `Renamed <old> -> <new>` line.
    ///
    /// The manifest is deleted after processing, even when nothing was
    /// renamed.
    ///
    /// # Errors
    /// Propagates manifest read/parse failures and any rename or deletion
    /// failure. Attachments renamed before a failure stay renamed.
    pub fn run(&self) -> Result<RunReport> {
        let manifest_path = self.dir.join(MANIFEST_FILE);
        if !manifest_path.exists() {
            println!("No manifest.json found - skipping screenshot renaming");
            return Ok(RunReport::default());
        }

        let results = manifest::load(&manifest_path)?;

        let mut report = RunReport {
            manifest_found: true,
            ..RunReport::default()
        };

        for test_result in &results {
            for attachment in &test_result.attachments {
                let exported = attachment.exported_file_name.as_deref().unwrap_or("");
                let suggested = attachment
                    .suggested_human_readable_name
                    .as_deref()
                    .unwrap_or("");

                if exported.is_empty() || suggested.is_empty() {
                    report.skipped += 1;
                    continue;
                }

                let source = self.dir.join(exported);
                if !source.exists() {
                    report.skipped += 1;
                    continue;
                }

                let clean = naming::clean_name(suggested);
                let target = self.dir.join(&clean);

                // Never overwrite, and never churn a file already named
                // correctly.
                if clean == exported || target.exists() {
                    report.skipped += 1;
                    continue;
                }

                fs::rename(&source, &target).map_err(|e| RenamerError::Rename {
                    from: exported.to_string(),
                    to: clean.clone(),
                    source: e,
                })?;
                println!("Renamed {} -> {}", exported, clean);
                report.renamed += 1;
            }
        }

        fs::remove_file(&manifest_path)?;
        println!("Screenshot renaming complete");

        Ok(report)
    }
}
