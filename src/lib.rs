//! # kgsolr
//!
//! Builders for documents identified by a URI, destined for a Solr-style
//! search index.
//!
//! ## Features
//!
//! - URI-keyed document builder with per-value boosts
//! - Boosts on multi-valued fields applied once per call
//! - Nested child documents shared with their parents
//! - Solr JSON update bodies and request parameters
//! - JSONL record conversion and a small CLI

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod update;

pub mod prelude {
    pub use crate::config::IndexingConfig;
    pub use crate::document::field_value::FieldValue;
    pub use crate::document::input::{IndexableDocument, InputDocument, InputField};
    pub use crate::document::uri_document::{FieldOutcome, IgnoreReason, KgDocument, UriDocument};
    pub use crate::error::{KgSolrError, Result};
    pub use crate::update::UpdateRequest;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
