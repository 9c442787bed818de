use super::ContentError;
use common::content::{ContentLoad, SectionOutcome, SiteContent};
use log::{debug, info, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// A content file after section-wise validation.
#[derive(Debug)]
pub struct LoadedContent {
    pub source: PathBuf,
    /// Hex MD5 digest of the raw file bytes.
    pub content_md5: String,
    pub load: ContentLoad,
}

/// Reads, fingerprints and validates the content file at `path`.
///
/// Section problems do not fail the load; they are recorded in
/// `LoadedContent::load`. Only an unreadable file, invalid JSON or a
/// document that is not an object are errors.
pub fn load_content(path: &Path) -> Result<LoadedContent, ContentError> {
    let bytes = fs::read(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let content_md5 = format!("{:x}", md5::compute(&bytes));
    debug!(
        "Read {} bytes from {} (md5 {})",
        bytes.len(),
        path.display(),
        content_md5
    );

    let document: Value = serde_json::from_slice(&bytes).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let load = SiteContent::from_value(&document)?;
    log_outcomes(&load);

    Ok(LoadedContent {
        source: path.to_path_buf(),
        content_md5,
        load,
    })
}

fn log_outcomes(load: &ContentLoad) {
    for key in load.unknown_keys() {
        warn!("Unknown top-level key `{}` ignored", key);
    }
    for (section, outcome) in load.outcomes() {
        match outcome {
            SectionOutcome::Loaded { records } => {
                info!("Section {}: loaded {} record(s)", section, records)
            }
            SectionOutcome::Absent => debug!("Section {}: absent, using default", section),
            SectionOutcome::Rejected(errors) => {
                warn!(
                    "Section {}: rejected with {} error(s), using default",
                    section,
                    errors.len()
                );
                for error in errors {
                    warn!("  {}", error);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::content::Section;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SITE: &str = include_str!("../../../../content/site.json");

    fn content_file(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_sample_site() {
        let file = content_file(SITE);
        let loaded = load_content(file.path()).unwrap();

        assert_eq!(loaded.source, file.path());
        assert!(loaded.load.is_clean());
        assert_eq!(loaded.load.content.socials.len(), 3);
        assert_eq!(loaded.content_md5, format!("{:x}", md5::compute(SITE)));
        assert_eq!(loaded.content_md5.len(), 32);
    }

    #[test]
    fn fingerprint_follows_content() {
        let first = load_content(content_file(SITE).path()).unwrap();
        let second = load_content(content_file(&SITE.replace("$10", "$12")).path()).unwrap();
        assert_ne!(first.content_md5, second.content_md5);
    }

    #[test]
    fn rejected_sections_do_not_fail_the_load() {
        let file = content_file(r#"{ "openingHours": [{ "day": "Mon" }], "profile": { "imgPath": "/p.png" } }"#);
        let loaded = load_content(file.path()).unwrap();

        assert!(!loaded.load.is_clean());
        assert!(matches!(
            loaded.load.outcome(Section::OpeningHours),
            Some(SectionOutcome::Rejected(_))
        ));
        assert!(loaded.load.content.profile.is_some());
    }

    #[test]
    fn misspelt_section_key_is_surfaced() {
        let file = content_file(r#"{ "socail": [], "profile": { "imgPath": "/p.png" } }"#);
        let loaded = load_content(file.path()).unwrap();

        assert_eq!(loaded.load.unknown_keys(), ["socail"]);
        assert_eq!(loaded.load.outcome(Section::Socials), Some(&SectionOutcome::Absent));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = load_content(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(error, ContentError::Read { .. }));
        assert!(error.to_string().contains("missing.json"));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let file = content_file("{ \"navLinks\": [ ");
        let error = load_content(file.path()).unwrap_err();
        assert!(matches!(error, ContentError::Parse { .. }));
    }

    #[test]
    fn non_object_document_is_rejected() {
        let file = content_file("[]");
        let error = load_content(file.path()).unwrap_err();
        assert!(matches!(error, ContentError::Document(_)));
    }
}
