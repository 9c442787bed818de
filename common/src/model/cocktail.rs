use crate::validation::{FieldKind, FieldSpec, Keyed, Shape};
use serde::{Deserialize, Serialize};

/// Tells alcoholic and non-alcoholic menu entries apart.
///
/// Both kinds share the [`DrinkListItem`] shape; the kind belongs to the
/// content section a list lives in (`cocktails` or `mocktails`), not to the
/// record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrinkKind {
    /// Alcoholic drink, listed under `cocktails`.
    Cocktail,
    /// Non-alcoholic drink, listed under `mocktails`.
    Mocktail,
}

/// Compact representation of a drink for menu list views.
///
/// A content document holds two arrays of these, one per [`DrinkKind`]. The
/// menu renders each entry as a row with the drink name, its origin, a short
/// description and the price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkListItem {
    pub name: String,
    /// Country or region the drink comes from.
    pub country: String,
    /// Free-text description shown under the name, e.g. ingredients.
    pub detail: String,
    /// Price exactly as it should be displayed, currency symbol included.
    pub price: String,
}

pub type CocktailListItem = DrinkListItem;
pub type MocktailListItem = DrinkListItem;

impl Shape for DrinkListItem {
    const ENTITY: &'static str = "DrinkListItem";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("name", FieldKind::Text),
            FieldSpec::new("country", FieldKind::Text),
            FieldSpec::new("detail", FieldKind::Text),
            FieldSpec::new("price", FieldKind::Text),
        ];
        FIELDS
    }
}

/// Detailed cocktail used by the featured slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cocktail {
    /// Unique within the featured collection.
    pub id: u32,
    pub name: String,
    /// Image path or URL.
    pub image: String,
    pub title: String,
    pub description: String,
}

impl Shape for Cocktail {
    const ENTITY: &'static str = "Cocktail";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("id", FieldKind::UnsignedInt),
            FieldSpec::new("name", FieldKind::Text),
            FieldSpec::new("image", FieldKind::Text),
            FieldSpec::new("title", FieldKind::Text),
            FieldSpec::new("description", FieldKind::Text),
        ];
        FIELDS
    }
}

impl Keyed for Cocktail {
    const KEY_FIELD: &'static str = "id";
}
