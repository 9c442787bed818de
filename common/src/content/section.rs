use crate::model::cocktail::DrinkKind;
use serde::Serialize;
use std::fmt;

/// Top-level grouping of a content document, one per area of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    NavLinks,
    Cocktails,
    Mocktails,
    FeaturedCocktails,
    Profile,
    StoreInfo,
    OpeningHours,
    Socials,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::NavLinks,
        Section::Cocktails,
        Section::Mocktails,
        Section::FeaturedCocktails,
        Section::Profile,
        Section::StoreInfo,
        Section::OpeningHours,
        Section::Socials,
    ];

    /// Key of the section in a content document.
    pub fn key(self) -> &'static str {
        match self {
            Section::NavLinks => "navLinks",
            Section::Cocktails => "cocktails",
            Section::Mocktails => "mocktails",
            Section::FeaturedCocktails => "featuredCocktails",
            Section::Profile => "profile",
            Section::StoreInfo => "storeInfo",
            Section::OpeningHours => "openingHours",
            Section::Socials => "socials",
        }
    }

    pub fn drink_kind(self) -> Option<DrinkKind> {
        match self {
            Section::Cocktails => Some(DrinkKind::Cocktail),
            Section::Mocktails => Some(DrinkKind::Mocktail),
            _ => None,
        }
    }
}

impl From<DrinkKind> for Section {
    fn from(kind: DrinkKind) -> Self {
        match kind {
            DrinkKind::Cocktail => Section::Cocktails,
            DrinkKind::Mocktail => Section::Mocktails,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
