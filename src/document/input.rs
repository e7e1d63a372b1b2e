//! Input documents handed to the indexing client.
//!
//! An [`InputDocument`] is the mutable, index-bound representation that a
//! [`UriDocument`](crate::document::uri_document::UriDocument) writes into.
//! It mirrors the input document of a Solr client: fields hold an ordered
//! list of values, every value may carry an index-time boost, and the boosts
//! of one field fold into a single field-level boost by multiplication.
//!
//! `InputDocument` is a shared handle. Cloning it does not copy the
//! document; both clones observe and mutate the same fields and children.
//! Linking a child therefore keeps the child usable through its own handle.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::document::field_value::FieldValue;

/// Boost weight applied when a caller does not supply one.
pub const DEFAULT_BOOST: f32 = 1.0;

/// Key under which nested documents are rendered by default.
pub const DEFAULT_CHILD_DOCUMENTS_KEY: &str = "_childDocuments_";

/// Capability set of an index-bound document representation.
///
/// The document builder only needs to add boosted values, link children and
/// ask whether children exist. Keeping it behind a trait lets the builder
/// run against alternative representations in tests.
pub trait IndexableDocument: Clone + Default {
    /// Append `value` to the field `name` with the given boost.
    ///
    /// Repeated calls for the same field accumulate values.
    fn add_field_value(&mut self, name: &str, value: FieldValue, boost: f32);

    /// Append `child` to the nested document collection.
    fn add_child_document(&mut self, child: Self);

    /// Whether at least one nested document has been linked.
    fn has_child_documents(&self) -> bool;
}

/// A single value of a field together with the boost it was added with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoostedValue {
    pub value: FieldValue,
    pub boost: f32,
}

/// A named field of an input document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputField {
    name: String,
    values: Vec<BoostedValue>,
    boost: f32,
}

impl InputField {
    fn new(name: &str) -> Self {
        InputField {
            name: name.to_string(),
            values: Vec::new(),
            boost: DEFAULT_BOOST,
        }
    }

    fn push(&mut self, value: FieldValue, boost: f32) {
        self.values.push(BoostedValue { value, boost });
        self.boost *= boost;
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values in insertion order, with the boost each was added with.
    pub fn values(&self) -> &[BoostedValue] {
        &self.values
    }

    /// The first value, if any.
    pub fn first_value(&self) -> Option<&FieldValue> {
        self.values.first().map(|v| &v.value)
    }

    /// Number of values stored under this field.
    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// Field-level boost: the product of every per-value boost.
    pub fn boost(&self) -> f32 {
        self.boost
    }

    /// Render this field's value as it appears in a Solr JSON document.
    pub fn to_json_value(&self) -> Value {
        let value = match self.values.as_slice() {
            [single] => single.value.to_json_value(),
            values => Value::Array(values.iter().map(|v| v.value.to_json_value()).collect()),
        };

        if self.boost == DEFAULT_BOOST {
            value
        } else {
            let mut boosted = Map::new();
            boosted.insert("value".to_string(), value);
            boosted.insert("boost".to_string(), boost_to_json(self.boost));
            Value::Object(boosted)
        }
    }
}

/// Render a boost from its shortest `f32` form, so 1.2 stays 1.2 instead of
/// picking up the widening error of `f32 as f64`.
fn boost_to_json(boost: f32) -> Value {
    boost
        .to_string()
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map_or(Value::Null, Value::Number)
}

#[derive(Debug, Default)]
struct InputDocumentData {
    fields: Vec<InputField>,
    children: Vec<InputDocument>,
}

/// Shared handle to a mutable input document.
#[derive(Debug, Clone, Default)]
pub struct InputDocument {
    inner: Arc<RwLock<InputDocumentData>>,
}

impl InputDocument {
    /// Create a new empty input document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a snapshot of a field.
    pub fn get_field(&self, name: &str) -> Option<InputField> {
        self.inner
            .read()
            .fields
            .iter()
            .find(|f| f.name == name)
            .cloned()
    }

    /// Check if the document has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.inner.read().fields.iter().any(|f| f.name == name)
    }

    /// Field names in the order they were first added.
    pub fn field_names(&self) -> Vec<String> {
        self.inner
            .read()
            .fields
            .iter()
            .map(|f| f.name.clone())
            .collect()
    }

    /// Snapshot of all fields.
    pub fn fields(&self) -> Vec<InputField> {
        self.inner.read().fields.clone()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.inner.read().fields.len()
    }

    /// Check if the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.inner.read().fields.is_empty()
    }

    /// Handles to the nested documents, in insertion order.
    pub fn child_documents(&self) -> Vec<InputDocument> {
        self.inner.read().children.clone()
    }

    /// Number of directly nested documents.
    pub fn child_count(&self) -> usize {
        self.inner.read().children.len()
    }

    /// Whether two handles point at the same document.
    pub fn ptr_eq(&self, other: &InputDocument) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Render the document as a Solr JSON document.
    ///
    /// Nested documents are rendered recursively under `child_key`. A
    /// document linked into one of its own descendants never finishes
    /// rendering.
    pub fn to_json_value(&self, child_key: &str) -> Value {
        let data = self.inner.read();

        let mut object = Map::new();
        for field in &data.fields {
            object.insert(field.name.clone(), field.to_json_value());
        }
        if !data.children.is_empty() {
            let children = data
                .children
                .iter()
                .map(|child| child.to_json_value(child_key))
                .collect();
            object.insert(child_key.to_string(), Value::Array(children));
        }

        Value::Object(object)
    }
}

impl IndexableDocument for InputDocument {
    fn add_field_value(&mut self, name: &str, value: FieldValue, boost: f32) {
        let mut data = self.inner.write();
        match data.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => field.push(value, boost),
            None => {
                let mut field = InputField::new(name);
                field.push(value, boost);
                data.fields.push(field);
            }
        }
    }

    fn add_child_document(&mut self, child: Self) {
        self.inner.write().children.push(child);
    }

    fn has_child_documents(&self) -> bool {
        !self.inner.read().children.is_empty()
    }
}

impl Serialize for InputDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_value(DEFAULT_CHILD_DOCUMENTS_KEY)
            .serialize(serializer)
    }
}
