//! Error types for screenshot renaming
//!
//! All fatal conditions surface as [`RenamerError`]; there is no local
//! recovery anywhere in the crate. A missing manifest is not an error and
//! never reaches this type.

use thiserror::Error;

/// Errors that abort a renaming run
#[derive(Error, Debug)]
pub enum RenamerError {
    /// Manifest could not be read or deleted
    #[error("manifest I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest content is not a valid JSON array of test results
    #[error("malformed manifest: {0}")]
    MalformedManifest(#[from] serde_json::Error),

    /// A screenshot rename failed partway through the run
    ///
    /// Attachments renamed before the failure stay renamed; there is no
    /// rollback.
    #[error("failed to rename {from} -> {to}: {source}")]
    Rename {
        from: String,
        to: String,
        source: std::io::Error,
    },
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, RenamerError>;
