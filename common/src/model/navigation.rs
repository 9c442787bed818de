use crate::validation::{FieldKind, FieldSpec, Keyed, Shape};
use serde::{Deserialize, Serialize};

/// A single entry of the main menu or footer navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Short anchor identifier, unique within a navigation list.
    pub id: String,
    pub title: String,
}

impl Shape for NavLink {
    const ENTITY: &'static str = "NavLink";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("id", FieldKind::Text),
            FieldSpec::new("title", FieldKind::Text),
        ];
        FIELDS
    }
}

impl Keyed for NavLink {
    const KEY_FIELD: &'static str = "id";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trips_through_json() {
        let link = NavLink {
            id: "cocktails".to_string(),
            title: "Cocktails".to_string(),
        };
        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(value, json!({ "id": "cocktails", "title": "Cocktails" }));
        assert_eq!(NavLink::parse(&value).unwrap(), link);
    }
}
