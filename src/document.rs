//! Documents destined for a Solr-style search index.
//!
//! This module provides the builder applications use to describe a resource
//! identified by a URI, and the index-bound representation it writes into.
//!
//! # Core Components
//!
//! - [`uri_document::UriDocument`] - Builder holding the URI, field data and
//!   nested documents
//! - [`input::InputDocument`] - Shared, mutable representation submitted by
//!   an indexing client
//! - [`field_value::FieldValue`] - Enum of the value types a field can carry
//! - [`converter`] - Reading URI document records from files
//!
//! # Examples
//!
//! ```
//! use kgsolr::document::uri_document::UriDocument;
//!
//! let mut city = UriDocument::new("http://dbpedia.org/resource/Berlin");
//! city.add_field("label", "Berlin");
//! city.add_field_values_with_boost("type", ["City", "Place"], 2.0);
//!
//! let mut district = UriDocument::new("http://dbpedia.org/resource/Mitte");
//! district.add_field("label", "Mitte");
//! city.add_child_document(&district);
//!
//! assert!(city.has_child_documents());
//! assert_eq!(city.input_document().child_count(), 1);
//! ```

pub mod converter;
pub mod field_value;
pub mod input;
pub mod uri_document;
