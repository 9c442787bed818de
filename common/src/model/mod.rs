pub mod cocktail;
pub mod navigation;
pub mod store;
