//! Update requests for submitting documents to a Solr-style index.
//!
//! An [`UpdateRequest`] gathers input documents and renders what an
//! indexing client posts to the index: a JSON array of documents as the
//! body plus `overwrite` / `commitWithin` query parameters. Sending the
//! request is left to the client.
//!
//! # Examples
//!
//! ```
//! use kgsolr::document::uri_document::UriDocument;
//! use kgsolr::update::UpdateRequest;
//!
//! let mut doc = UriDocument::new("http://dbpedia.org/resource/Berlin");
//! doc.add_field("id", "http://dbpedia.org/resource/Berlin");
//!
//! let mut request = UpdateRequest::new();
//! request.add(&doc);
//!
//! let body = request.to_json_string(false).unwrap();
//! assert_eq!(body, r#"[{"id":"http://dbpedia.org/resource/Berlin"}]"#);
//! assert_eq!(request.params(), vec![("overwrite", "true".to_string())]);
//! ```

use serde_json::Value;

use crate::config::IndexingConfig;
use crate::document::input::{DEFAULT_CHILD_DOCUMENTS_KEY, InputDocument};
use crate::document::uri_document::KgDocument;
use crate::error::Result;

/// Path of the update handler, relative to the collection URL.
pub const UPDATE_PATH: &str = "/update";

/// A batch of documents to add to the index.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    documents: Vec<InputDocument>,
    child_documents_key: String,
    overwrite: bool,
    commit_within_ms: Option<u64>,
}

impl Default for UpdateRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateRequest {
    /// Create an empty request with default settings.
    pub fn new() -> Self {
        UpdateRequest {
            documents: Vec::new(),
            child_documents_key: DEFAULT_CHILD_DOCUMENTS_KEY.to_string(),
            overwrite: true,
            commit_within_ms: None,
        }
    }

    /// Create an empty request using the settings of `config`.
    pub fn with_config(config: &IndexingConfig) -> Self {
        UpdateRequest {
            documents: Vec::new(),
            child_documents_key: config.child_documents_key.clone(),
            overwrite: config.overwrite,
            commit_within_ms: config.commit_within_ms,
        }
    }

    /// Add a document. Its representation is shared, not copied, so later
    /// changes to the document show up in the rendered body.
    pub fn add<D>(&mut self, document: &D)
    where
        D: KgDocument<Indexable = InputDocument>,
    {
        self.documents.push(document.indexable().clone());
    }

    /// Add an input document directly.
    pub fn add_input_document(&mut self, document: InputDocument) {
        self.documents.push(document);
    }

    /// Set the commit deadline in milliseconds.
    pub fn set_commit_within_ms(&mut self, commit_within_ms: Option<u64>) {
        self.commit_within_ms = commit_within_ms;
    }

    /// Set whether documents replace existing ones with the same key.
    pub fn set_overwrite(&mut self, overwrite: bool) {
        self.overwrite = overwrite;
    }

    /// The documents in this request.
    pub fn documents(&self) -> &[InputDocument] {
        &self.documents
    }

    /// Number of top-level documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the request holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Query parameters to send along with the body.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("overwrite", self.overwrite.to_string())];
        if let Some(ms) = self.commit_within_ms {
            params.push(("commitWithin", ms.to_string()));
        }
        params
    }

    /// Render the request body.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.documents
                .iter()
                .map(|doc| doc.to_json_value(&self.child_documents_key))
                .collect(),
        )
    }

    /// Render the request body as a string.
    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let body = self.to_json();
        let rendered = if pretty {
            serde_json::to_string_pretty(&body)?
        } else {
            serde_json::to_string(&body)?
        };
        Ok(rendered)
    }
}
