use super::path::FieldPath;
use serde::Serialize;
use thiserror::Error;

/// What is wrong with a single field of a content record.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum IssueKind {
    #[error("required field is missing")]
    Missing,
    #[error("expected {expected}, found {found}")]
    WrongKind {
        expected: &'static str,
        found: &'static str,
    },
    #[error("must not be empty")]
    Empty,
    #[error("is not a valid {format}")]
    Malformed { format: &'static str },
    #[error("duplicate id `{id}`")]
    DuplicateId { id: String },
    #[error("could not decode record: {message}")]
    Decode { message: String },
}

/// A single shape violation found in a content record.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{entity} {path}: {issue}")]
pub struct ContentShapeError {
    pub entity: &'static str,
    pub path: FieldPath,
    #[serde(flatten)]
    pub issue: IssueKind,
}

impl ContentShapeError {
    pub fn new(entity: &'static str, path: FieldPath, issue: IssueKind) -> Self {
        Self {
            entity,
            path,
            issue,
        }
    }
}

/// Every shape violation found in one pass over a record or a section.
///
/// Checks never stop at the first problem, so a content author sees the
/// whole list at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[serde(transparent)]
#[error("content failed {} shape check(s)", .0.len())]
pub struct ShapeErrors(Vec<ContentShapeError>);

impl ShapeErrors {
    pub fn push(&mut self, error: ContentShapeError) {
        self.0.push(error);
    }

    pub fn extend(&mut self, other: ShapeErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentShapeError> {
        self.0.iter()
    }

    /// Names of the fields reported as missing, in the order they were found.
    pub fn missing_fields(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|error| error.issue == IssueKind::Missing)
            .filter_map(|error| error.path.field_name())
            .collect()
    }

    pub fn into_result(self) -> Result<(), ShapeErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<ContentShapeError> for ShapeErrors {
    fn from(error: ContentShapeError) -> Self {
        Self(vec![error])
    }
}

impl<'a> IntoIterator for &'a ShapeErrors {
    type Item = &'a ContentShapeError;
    type IntoIter = std::slice::Iter<'a, ContentShapeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
