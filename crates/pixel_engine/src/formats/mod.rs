//! Persisted representations of an artwork.

mod artwork_document;
pub use artwork_document::*;
