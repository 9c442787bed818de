use super::load::{load_content, LoadedContent};
use super::ContentError;
use crate::config::{CheckArgs, ReportFormat};
use common::content::{Section, SectionOutcome};
use common::validation::ContentShapeError;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStatus {
    Loaded,
    Absent,
    Rejected,
}

#[derive(Debug, Serialize)]
pub struct SectionReport {
    pub section: Section,
    pub entity: &'static str,
    pub status: SectionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ContentShapeError>,
}

/// Result of checking one content file, section by section.
#[derive(Debug, Serialize)]
pub struct VerificationReport {
    pub source: String,
    pub content_md5: String,
    pub sections: Vec<SectionReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unknown_keys: Vec<String>,
}

impl VerificationReport {
    pub fn new(loaded: &LoadedContent) -> Self {
        let sections = loaded
            .load
            .outcomes()
            .map(|(section, outcome)| match outcome {
                SectionOutcome::Loaded { records } => SectionReport {
                    section,
                    entity: loaded.load.entity(section).unwrap_or_default(),
                    status: SectionStatus::Loaded,
                    records: Some(*records),
                    errors: Vec::new(),
                },
                SectionOutcome::Absent => SectionReport {
                    section,
                    entity: loaded.load.entity(section).unwrap_or_default(),
                    status: SectionStatus::Absent,
                    records: None,
                    errors: Vec::new(),
                },
                SectionOutcome::Rejected(errors) => SectionReport {
                    section,
                    entity: loaded.load.entity(section).unwrap_or_default(),
                    status: SectionStatus::Rejected,
                    records: None,
                    errors: errors.iter().cloned().collect(),
                },
            })
            .collect();

        Self {
            source: loaded.source.display().to_string(),
            content_md5: loaded.content_md5.clone(),
            sections,
            unknown_keys: loaded.load.unknown_keys().to_vec(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.count(SectionStatus::Rejected) == 0
    }

    fn count(&self, status: SectionStatus) -> usize {
        self.sections.iter().filter(|s| s.status == status).count()
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, ContentError> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Content report for {} (md5 {})", self.source, self.content_md5)?;
        for report in &self.sections {
            let key = report.section.key();
            match report.status {
                SectionStatus::Loaded => {
                    let records = report.records.unwrap_or_default();
                    writeln!(f, "  {key:<18} loaded    {records} record(s)")?;
                }
                SectionStatus::Absent => writeln!(f, "  {key:<18} absent")?,
                SectionStatus::Rejected => {
                    writeln!(f, "  {key:<18} rejected  {} error(s)", report.errors.len())?;
                    for error in &report.errors {
                        writeln!(f, "    - {error}")?;
                    }
                }
            }
        }
        if !self.unknown_keys.is_empty() {
            writeln!(f, "Unknown keys ignored: {}", self.unknown_keys.join(", "))?;
        }
        write!(
            f,
            "Summary: {} loaded, {} absent, {} rejected",
            self.count(SectionStatus::Loaded),
            self.count(SectionStatus::Absent),
            self.count(SectionStatus::Rejected)
        )
    }
}

/// Runs `mojito check`. Returns whether every section passed.
pub fn process(args: &CheckArgs) -> Result<bool, ContentError> {
    let loaded = load_content(&args.source.content)?;
    let report = VerificationReport::new(&loaded);
    println!("{}", report.render(args.format)?);
    Ok(report.is_clean())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContentSource;
    use serde_json::{json, Value};
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    const SITE: &str = include_str!("../../../../content/site.json");

    fn loaded(document: &Value) -> (NamedTempFile, LoadedContent) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(document.to_string().as_bytes()).unwrap();
        let loaded = load_content(file.path()).unwrap();
        (file, loaded)
    }

    fn broken_site() -> Value {
        let mut document: Value = serde_json::from_str(SITE).unwrap();
        document["socials"][1]["url"] = json!("x.com/jsmcocktail");
        document["cocktails"][0] = json!({ "name": "Mojito", "country": "Cuba" });
        document.as_object_mut().unwrap().remove("profile");
        document
    }

    #[test]
    fn clean_site_report() {
        let (_file, loaded) = loaded(&serde_json::from_str(SITE).unwrap());
        let report = VerificationReport::new(&loaded);

        assert!(report.is_clean());
        assert_eq!(report.sections.len(), Section::ALL.len());
        assert!(report.sections.iter().all(|s| s.status == SectionStatus::Loaded));

        let text = report.render(ReportFormat::Text).unwrap();
        assert!(text.contains("featuredCocktails"));
        assert!(text.ends_with("Summary: 8 loaded, 0 absent, 0 rejected"));
    }

    #[test]
    fn text_report_lists_every_error() {
        let (_file, loaded) = loaded(&broken_site());
        let report = VerificationReport::new(&loaded);
        assert!(!report.is_clean());

        let text = report.render(ReportFormat::Text).unwrap();
        assert!(text.contains("DrinkListItem cocktails[0].detail: required field is missing"));
        assert!(text.contains("DrinkListItem cocktails[0].price: required field is missing"));
        assert!(text.contains("Social socials[1].url: is not a valid http(s) url"));
        assert!(text.contains("Summary: 5 loaded, 1 absent, 2 rejected"));
    }

    #[test]
    fn reports_list_unknown_keys() {
        let mut document: Value = serde_json::from_str(SITE).unwrap();
        document["openingHour"] = json!([]);
        let (_file, loaded) = loaded(&document);
        let report = VerificationReport::new(&loaded);

        assert!(report.is_clean());
        let text = report.render(ReportFormat::Text).unwrap();
        assert!(text.contains("Unknown keys ignored: openingHour\n"));

        let value: Value = serde_json::from_str(&report.render(ReportFormat::Json).unwrap()).unwrap();
        assert_eq!(value["unknown_keys"], json!(["openingHour"]));
    }

    #[test]
    fn json_report_shape() {
        let (_file, loaded) = loaded(&broken_site());
        let report = VerificationReport::new(&loaded);
        let value: Value = serde_json::from_str(&report.render(ReportFormat::Json).unwrap()).unwrap();

        assert_eq!(value["content_md5"], loaded.content_md5.as_str());
        let sections = value["sections"].as_array().unwrap();
        let socials = sections.iter().find(|s| s["section"] == "socials").unwrap();
        assert_eq!(
            socials["errors"],
            json!([{
                "entity": "Social",
                "path": "socials[1].url",
                "issue": "malformed",
                "format": "http(s) url"
            }])
        );
        let profile = sections.iter().find(|s| s["section"] == "profile").unwrap();
        assert_eq!(profile, &json!({ "section": "profile", "entity": "Profile", "status": "absent" }));
        let nav = sections.iter().find(|s| s["section"] == "navLinks").unwrap();
        assert_eq!(nav["records"], json!(4));
    }

    #[test]
    fn process_reports_rejections() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(broken_site().to_string().as_bytes()).unwrap();
        let args = CheckArgs {
            source: ContentSource {
                content: file.path().to_path_buf(),
            },
            format: ReportFormat::Json,
        };
        assert!(!process(&args).unwrap());
    }
}
