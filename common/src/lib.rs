//! Content model for the Mojito site: typed records, runtime shape checks
//! and section-wise loading of a content document.

pub mod content;
pub mod model;
pub mod validation;
