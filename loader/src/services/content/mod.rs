//! Loads a content file, reports on it and exports the validated result.
//!
//! The provided operations are:
//! - `load`: reads the file named by `--content` (or `MOJITO_CONTENT`), takes
//!   an MD5 fingerprint of the raw bytes so a report can be matched to the
//!   revision that was checked, parses the JSON and runs the section-wise
//!   shape checks from `common::content`. Every section outcome is logged.
//!
//! - `verify`: builds a `VerificationReport` listing each section as loaded,
//!   absent or rejected, together with every shape error, and prints it as
//!   text or JSON. The `check` command exits non-zero when any section was
//!   rejected.
//!
//! - `export`: writes the typed `SiteContent` as JSON for a rendering layer.
//!   Rejected sections are written as their defaults unless `--strict` is
//!   set, in which case the export is refused.

use common::validation::ShapeErrors;
use std::path::PathBuf;
use thiserror::Error;

pub mod export;
pub mod load;
pub mod verify;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("content file {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("content document rejected: {0}")]
    Document(#[from] ShapeErrors),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("refusing to export, rejected section(s): {}", .sections.join(", "))]
    Rejected { sections: Vec<&'static str> },
}
