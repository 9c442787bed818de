//! Runtime shape checks for content records.
//!
//! The record types in [`crate::model`] describe content at compile time, but
//! content arrives at runtime as untyped JSON. Each entity implements [`Shape`]
//! with a static field table; the same table drives the check for a single
//! record, for arrays of records ([`check_list`]) and for nested records such
//! as `StoreInfo.contact`.
//!
//! All checks are collect-all: they report every missing or mismatched field
//! in one [`ShapeErrors`] instead of stopping at the first problem.

mod error;
pub mod format;
mod path;

pub use error::{ContentShapeError, IssueKind, ShapeErrors};
pub use path::FieldPath;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashSet;

/// The kind of value a field must hold.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Non-empty string.
    Text,
    Email,
    Phone,
    Url,
    /// Integer in `0..=u32::MAX`.
    UnsignedInt,
    /// Nested record with its own field table.
    Record(&'static [FieldSpec]),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// A content record with a runtime shape check.
pub trait Shape: DeserializeOwned {
    /// Entity label used in error messages.
    const ENTITY: &'static str;

    /// Required fields, in declaration order.
    fn fields() -> &'static [FieldSpec];

    /// Checks an untyped record against this entity's fields.
    fn check(value: &Value) -> Result<(), ShapeErrors> {
        let mut errors = ShapeErrors::default();
        check_record(Self::ENTITY, value, &FieldPath::root(), Self::fields(), &mut errors);
        errors.into_result()
    }

    /// Checks, then decodes the record.
    fn parse(value: &Value) -> Result<Self, ShapeErrors> {
        parse_record(value, &FieldPath::root())
    }
}

/// A record whose key field must be unique inside its collection.
pub trait Keyed: Shape {
    const KEY_FIELD: &'static str;
}

/// Checks and decodes a single record found at `path` inside a document.
pub fn parse_record<T: Shape>(value: &Value, path: &FieldPath) -> Result<T, ShapeErrors> {
    let mut errors = ShapeErrors::default();
    check_record(T::ENTITY, value, path, T::fields(), &mut errors);
    errors.into_result()?;
    decode(T::ENTITY, value, path.clone())
}

/// Checks that `value` is an array whose every element conforms to `T`.
///
/// Element errors carry their index under `path`.
pub fn check_list<T: Shape>(value: &Value, path: &FieldPath) -> Result<(), ShapeErrors> {
    let mut errors = ShapeErrors::default();
    match value.as_array() {
        Some(items) => {
            for (index, item) in items.iter().enumerate() {
                check_record(T::ENTITY, item, &path.index(index), T::fields(), &mut errors);
            }
        }
        None => errors.push(ContentShapeError::new(
            T::ENTITY,
            path.clone(),
            IssueKind::WrongKind {
                expected: "array",
                found: kind_name(value),
            },
        )),
    }
    errors.into_result()
}

/// Checks and decodes an array of `T`.
pub fn parse_list<T: Shape>(value: &Value, path: &FieldPath) -> Result<Vec<T>, ShapeErrors> {
    check_list::<T>(value, path)?;
    decode(T::ENTITY, value, path.clone())
}

/// Checks and decodes an array of `T` whose key field must be unique.
///
/// Shape errors and duplicate keys are reported together.
pub fn parse_keyed_list<T: Keyed>(value: &Value, path: &FieldPath) -> Result<Vec<T>, ShapeErrors> {
    let mut errors = ShapeErrors::default();
    if let Err(shape) = check_list::<T>(value, path) {
        errors.extend(shape);
    }
    if let Err(duplicates) = check_unique::<T>(value, path) {
        errors.extend(duplicates);
    }
    errors.into_result()?;
    decode(T::ENTITY, value, path.clone())
}

/// Reports every element whose key repeats an earlier element's key.
///
/// Elements whose key field is itself malformed are skipped; the shape check
/// reports those.
pub fn check_unique<T: Keyed>(value: &Value, path: &FieldPath) -> Result<(), ShapeErrors> {
    let mut errors = ShapeErrors::default();
    let (Some(items), Some(key_spec)) = (
        value.as_array(),
        T::fields().iter().find(|spec| spec.name == T::KEY_FIELD),
    ) else {
        return Ok(());
    };

    let mut seen = HashSet::new();
    for (index, item) in items.iter().enumerate() {
        let Some(key) = item.get(T::KEY_FIELD).filter(|key| !key.is_null()) else {
            continue;
        };
        let key_path = path.index(index).key(T::KEY_FIELD);
        let mut key_errors = ShapeErrors::default();
        check_field(T::ENTITY, key, &key_path, key_spec.kind, &mut key_errors);
        if !key_errors.is_empty() {
            continue;
        }

        let id = match key {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        if !seen.insert(id.clone()) {
            errors.push(ContentShapeError::new(T::ENTITY, key_path, IssueKind::DuplicateId { id }));
        }
    }
    errors.into_result()
}

fn decode<T: DeserializeOwned>(
    entity: &'static str,
    value: &Value,
    path: FieldPath,
) -> Result<T, ShapeErrors> {
    serde_json::from_value(value.clone()).map_err(|e| {
        ContentShapeError::new(
            entity,
            path,
            IssueKind::Decode {
                message: e.to_string(),
            },
        )
        .into()
    })
}

fn check_record(
    entity: &'static str,
    value: &Value,
    path: &FieldPath,
    fields: &[FieldSpec],
    errors: &mut ShapeErrors,
) {
    let Some(record) = value.as_object() else {
        errors.push(ContentShapeError::new(
            entity,
            path.clone(),
            IssueKind::WrongKind {
                expected: "object",
                found: kind_name(value),
            },
        ));
        return;
    };

    for spec in fields {
        let field_path = path.key(spec.name);
        match record.get(spec.name) {
            None | Some(Value::Null) => {
                errors.push(ContentShapeError::new(entity, field_path, IssueKind::Missing));
            }
            Some(field) => check_field(entity, field, &field_path, spec.kind, errors),
        }
    }
}

fn check_field(
    entity: &'static str,
    value: &Value,
    path: &FieldPath,
    kind: FieldKind,
    errors: &mut ShapeErrors,
) {
    let issue = match kind {
        FieldKind::Record(fields) => {
            check_record(entity, value, path, fields, errors);
            None
        }
        FieldKind::UnsignedInt => match value.as_u64() {
            Some(n) if n <= u64::from(u32::MAX) => None,
            _ => Some(IssueKind::WrongKind {
                expected: "non-negative integer",
                found: kind_name(value),
            }),
        },
        FieldKind::Text | FieldKind::Email | FieldKind::Phone | FieldKind::Url => {
            match value.as_str() {
                None => Some(IssueKind::WrongKind {
                    expected: "string",
                    found: kind_name(value),
                }),
                Some(text) if text.trim().is_empty() => Some(IssueKind::Empty),
                Some(text) => check_format(kind, text),
            }
        }
    };

    if let Some(issue) = issue {
        errors.push(ContentShapeError::new(entity, path.clone(), issue));
    }
}

fn check_format(kind: FieldKind, text: &str) -> Option<IssueKind> {
    let (valid, format) = match kind {
        FieldKind::Email => (format::is_email(text), "email address"),
        FieldKind::Phone => (format::is_phone(text), "phone number"),
        FieldKind::Url => (format::is_url(text), "http(s) url"),
        _ => return None,
    };
    (!valid).then_some(IssueKind::Malformed { format })
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_u64() => "non-negative integer",
        Value::Number(n) if n.is_i64() => "negative integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
