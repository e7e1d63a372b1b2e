//! Documents identified by a URI.
//!
//! A [`UriDocument`] is the builder callers work with: it carries the URI
//! the document is mapped to and forwards field data into an
//! [`IndexableDocument`] that is later submitted by an indexing client.
//!
//! # Boosting multi-valued fields
//!
//! The index folds the boosts of all values of a field into a single
//! field-level weight. When a set of values is added in one call, the boost
//! is therefore applied to the first value only and the remaining values use
//! [`DEFAULT_BOOST`]. The rule is evaluated per call, so separate calls each
//! apply their own boost once.
//!
//! ```
//! use kgsolr::document::uri_document::UriDocument;
//!
//! let mut doc = UriDocument::new("http://dbpedia.org/resource/Berlin");
//! doc.add_field_with_boost("label", "Berlin", 2.0);
//! doc.add_field_values("type", ["City", "Place"]);
//!
//! let label = doc.input_document().get_field("label").unwrap();
//! assert_eq!(label.boost(), 2.0);
//! ```

use std::fmt;

use log::debug;

use crate::document::field_value::FieldValue;
use crate::document::input::{DEFAULT_BOOST, IndexableDocument, InputDocument};

/// A document that can be linked as a child of another document.
///
/// Only the id and the index-bound representation are needed.
pub trait KgDocument {
    /// The index-bound representation type.
    type Indexable: IndexableDocument;

    /// The document's id.
    fn id(&self) -> &str;

    /// The representation handed to the indexing client.
    fn indexable(&self) -> &Self::Indexable;
}

/// Why a field assignment was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The field name was empty.
    EmptyName,
    /// The single value was null.
    NullValue,
    /// The value set was empty or held only null values.
    EmptyValues,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::EmptyName => write!(f, "empty field name"),
            IgnoreReason::NullValue => write!(f, "null value"),
            IgnoreReason::EmptyValues => write!(f, "empty value set"),
        }
    }
}

/// The result of a field assignment.
///
/// Assignments never fail. Callers that do not care whether input was
/// dropped can discard the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The given number of values was written.
    Added { values: usize },
    /// Nothing was written.
    Ignored(IgnoreReason),
}

impl FieldOutcome {
    /// Whether the assignment changed the document.
    pub fn is_added(&self) -> bool {
        matches!(self, FieldOutcome::Added { .. })
    }

    /// Whether the assignment was dropped.
    pub fn is_ignored(&self) -> bool {
        matches!(self, FieldOutcome::Ignored(_))
    }
}

/// A document mapped to a URI, destined for a search index.
#[derive(Debug, Clone)]
pub struct UriDocument<D: IndexableDocument = InputDocument> {
    /// The URI this document is mapped to.
    uri: String,
    /// The document that will be sent to the index.
    document: D,
}

impl UriDocument {
    /// Create a document for `uri` with an empty [`InputDocument`].
    ///
    /// The URI is not validated; an empty string is accepted.
    pub fn new<S: Into<String>>(uri: S) -> Self {
        Self::with_representation(uri)
    }
}

impl<D: IndexableDocument> UriDocument<D> {
    /// Create a document for `uri` over an empty representation of type `D`.
    pub fn with_representation<S: Into<String>>(uri: S) -> Self {
        UriDocument {
            uri: uri.into(),
            document: D::default(),
        }
    }

    /// The URI given at construction.
    pub fn id(&self) -> &str {
        &self.uri
    }

    /// Add a single value with the default boost.
    pub fn add_field<V: Into<FieldValue>>(&mut self, name: &str, value: V) -> FieldOutcome {
        self.add_field_with_boost(name, value, DEFAULT_BOOST)
    }

    /// Add a single value with the given boost.
    ///
    /// Adding to an existing field appends another value to it.
    pub fn add_field_with_boost<V: Into<FieldValue>>(
        &mut self,
        name: &str,
        value: V,
        boost: f32,
    ) -> FieldOutcome {
        if name.is_empty() {
            return self.ignore(name, IgnoreReason::EmptyName);
        }
        let value = value.into();
        if value.is_null() {
            return self.ignore(name, IgnoreReason::NullValue);
        }

        self.document.add_field_value(name, value, boost);
        FieldOutcome::Added { values: 1 }
    }

    /// Add a set of values to a multi-valued field with the default boost.
    pub fn add_field_values<I, V>(&mut self, name: &str, values: I) -> FieldOutcome
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        self.add_field_values_with_boost(name, values, DEFAULT_BOOST)
    }

    /// Add a set of values to a multi-valued field.
    ///
    /// `boost` is applied to the first value added by this call; every later
    /// value gets [`DEFAULT_BOOST`]. Null entries are skipped and do not take
    /// the boost.
    pub fn add_field_values_with_boost<I, V>(
        &mut self,
        name: &str,
        values: I,
        boost: f32,
    ) -> FieldOutcome
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        if name.is_empty() {
            return self.ignore(name, IgnoreReason::EmptyName);
        }

        let mut added = 0;
        for value in values {
            let value = value.into();
            if value.is_null() {
                continue;
            }
            let value_boost = if added == 0 { boost } else { DEFAULT_BOOST };
            self.document.add_field_value(name, value, value_boost);
            added += 1;
        }

        if added == 0 {
            return self.ignore(name, IgnoreReason::EmptyValues);
        }
        FieldOutcome::Added { values: added }
    }

    /// Link `child`'s representation into this document's nested documents.
    ///
    /// The child stays usable through its own handle. Linking a document
    /// into its own descendants is not detected.
    pub fn add_child_document<C>(&mut self, child: &C)
    where
        C: KgDocument<Indexable = D>,
    {
        self.document.add_child_document(child.indexable().clone());
    }

    /// Whether at least one child document has been linked.
    pub fn has_child_documents(&self) -> bool {
        self.document.has_child_documents()
    }

    /// The representation handed to the indexing client.
    pub fn input_document(&self) -> &D {
        &self.document
    }

    /// Consume the builder, returning its representation.
    pub fn into_input_document(self) -> D {
        self.document
    }

    fn ignore(&self, name: &str, reason: IgnoreReason) -> FieldOutcome {
        debug!(
            "ignoring assignment to field {:?} of <{}>: {}",
            name, self.uri, reason
        );
        FieldOutcome::Ignored(reason)
    }
}

impl<D: IndexableDocument> KgDocument for UriDocument<D> {
    type Indexable = D;

    fn id(&self) -> &str {
        &self.uri
    }

    fn indexable(&self) -> &D {
        &self.document
    }
}
