//! Section-wise loading of a content document.
//!
//! A document is one JSON object keyed by [`Section::key`]. Sections are
//! checked independently: a malformed section is rejected as a whole and
//! replaced by its default (empty list, no record), while every other section
//! still loads. Partially-shaped records are never kept.

mod section;

pub use section::Section;

use crate::model::cocktail::{Cocktail, DrinkKind, DrinkListItem};
use crate::model::navigation::NavLink;
use crate::model::store::{OpeningHour, Profile, Social, StoreInfo};
use crate::validation::{
    kind_name, parse_keyed_list, parse_list, parse_record, ContentShapeError, FieldPath,
    IssueKind, Shape, ShapeErrors,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Every displayable section of the site, typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    pub nav_links: Vec<NavLink>,
    pub cocktails: Vec<DrinkListItem>,
    pub mocktails: Vec<DrinkListItem>,
    pub featured_cocktails: Vec<Cocktail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_info: Option<StoreInfo>,
    pub opening_hours: Vec<OpeningHour>,
    pub socials: Vec<Social>,
}

/// What happened to one section while loading a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    /// The section conformed; `records` is the number of records kept.
    Loaded { records: usize },
    /// The key was missing or `null`; the default is used.
    Absent,
    /// The section failed its checks; the default is used.
    Rejected(ShapeErrors),
}

/// Typed content plus the per-section outcome of loading it.
#[derive(Debug, Clone, Default)]
pub struct ContentLoad {
    pub content: SiteContent,
    outcomes: BTreeMap<Section, SectionEntry>,
    unknown_keys: Vec<String>,
}

#[derive(Debug, Clone)]
struct SectionEntry {
    entity: &'static str,
    outcome: SectionOutcome,
}

impl SiteContent {
    /// Loads every section of `document`.
    ///
    /// Fails only when the document itself is not an object; section problems
    /// are reported through [`ContentLoad::outcome`].
    pub fn from_value(document: &Value) -> Result<ContentLoad, ShapeErrors> {
        let Some(root) = document.as_object() else {
            return Err(ContentShapeError::new(
                "SiteContent",
                FieldPath::root(),
                IssueKind::WrongKind {
                    expected: "object",
                    found: kind_name(document),
                },
            )
            .into());
        };

        let mut load = ContentLoad {
            unknown_keys: root
                .keys()
                .filter(|key| !Section::ALL.iter().any(|section| section.key() == key.as_str()))
                .cloned()
                .collect(),
            ..ContentLoad::default()
        };
        let content = SiteContent {
            nav_links: load.settle_list(root, Section::NavLinks, parse_keyed_list::<NavLink>),
            cocktails: load.settle_list(root, Section::Cocktails, parse_list::<DrinkListItem>),
            mocktails: load.settle_list(root, Section::Mocktails, parse_list::<DrinkListItem>),
            featured_cocktails: load.settle_list(
                root,
                Section::FeaturedCocktails,
                parse_keyed_list::<Cocktail>,
            ),
            profile: load.settle_record::<Profile>(root, Section::Profile),
            store_info: load.settle_record::<StoreInfo>(root, Section::StoreInfo),
            opening_hours: load.settle_list(root, Section::OpeningHours, parse_list::<OpeningHour>),
            socials: load.settle_list(root, Section::Socials, parse_list::<Social>),
        };
        load.content = content;
        Ok(load)
    }

    /// The menu list for one kind of drink.
    pub fn drinks(&self, kind: DrinkKind) -> &[DrinkListItem] {
        match kind {
            DrinkKind::Cocktail => &self.cocktails,
            DrinkKind::Mocktail => &self.mocktails,
        }
    }
}

type ListReader<T> = fn(&Value, &FieldPath) -> Result<Vec<T>, ShapeErrors>;

impl ContentLoad {
    pub fn outcome(&self, section: Section) -> Option<&SectionOutcome> {
        self.outcomes.get(&section).map(|entry| &entry.outcome)
    }

    /// Entity label of the records a section holds.
    pub fn entity(&self, section: Section) -> Option<&'static str> {
        self.outcomes.get(&section).map(|entry| entry.entity)
    }

    /// Outcomes in [`Section::ALL`] order.
    pub fn outcomes(&self) -> impl Iterator<Item = (Section, &SectionOutcome)> {
        self.outcomes.iter().map(|(section, entry)| (*section, &entry.outcome))
    }

    pub fn rejected(&self) -> impl Iterator<Item = (Section, &ShapeErrors)> {
        self.outcomes().filter_map(|(section, outcome)| match outcome {
            SectionOutcome::Rejected(errors) => Some((section, errors)),
            _ => None,
        })
    }

    /// Top-level keys that name no section, usually a misspelt section key.
    pub fn unknown_keys(&self) -> &[String] {
        &self.unknown_keys
    }

    /// True when no section was rejected.
    pub fn is_clean(&self) -> bool {
        self.rejected().next().is_none()
    }

    fn settle_list<T: Shape>(
        &mut self,
        root: &Map<String, Value>,
        section: Section,
        read: ListReader<T>,
    ) -> Vec<T> {
        let read = section_value(root, section)
            .map(|value| read(value, &FieldPath::root().key(section.key())))
            .transpose();
        self.settle(section, T::ENTITY, read, Vec::len)
            .unwrap_or_default()
    }

    fn settle_record<T: Shape>(&mut self, root: &Map<String, Value>, section: Section) -> Option<T> {
        let read = section_value(root, section)
            .map(|value| parse_record(value, &FieldPath::root().key(section.key())))
            .transpose();
        self.settle(section, T::ENTITY, read, |_| 1)
    }

    fn settle<V>(
        &mut self,
        section: Section,
        entity: &'static str,
        read: Result<Option<V>, ShapeErrors>,
        records: fn(&V) -> usize,
    ) -> Option<V> {
        let (outcome, value) = match read {
            Ok(Some(value)) => (
                SectionOutcome::Loaded {
                    records: records(&value),
                },
                Some(value),
            ),
            Ok(None) => (SectionOutcome::Absent, None),
            Err(errors) => (SectionOutcome::Rejected(errors), None),
        };
        self.outcomes.insert(section, SectionEntry { entity, outcome });
        value
    }
}

fn section_value(root: &Map<String, Value>, section: Section) -> Option<&Value> {
    root.get(section.key()).filter(|value| !value.is_null())
}
