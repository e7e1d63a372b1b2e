//! Configuration for turning URI documents into index updates.
//!
//! # Examples
//!
//! ```
//! use kgsolr::config::IndexingConfig;
//!
//! let config = IndexingConfig::default();
//! assert_eq!(config.uri_field.as_deref(), Some("id"));
//! assert_eq!(config.child_documents_key, "_childDocuments_");
//! assert!(config.overwrite);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::input::DEFAULT_CHILD_DOCUMENTS_KEY;
use crate::error::{KgSolrError, Result};

/// Settings shared by the record converter and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexingConfig {
    /// Field the converter copies each record's URI into, usually the
    /// index's unique key. `None` leaves the URI out of the fields.
    #[serde(default = "default_uri_field")]
    pub uri_field: Option<String>,

    /// Key under which nested documents are rendered.
    #[serde(default = "default_child_documents_key")]
    pub child_documents_key: String,

    /// Whether documents replace existing ones with the same unique key.
    #[serde(default = "default_true")]
    pub overwrite: bool,

    /// Ask the index to commit within this many milliseconds.
    #[serde(default)]
    pub commit_within_ms: Option<u64>,
}

fn default_uri_field() -> Option<String> {
    Some("id".to_string())
}

fn default_child_documents_key() -> String {
    DEFAULT_CHILD_DOCUMENTS_KEY.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            uri_field: default_uri_field(),
            child_documents_key: default_child_documents_key(),
            overwrite: true,
            commit_within_ms: None,
        }
    }
}

impl IndexingConfig {
    /// Load a configuration from a JSON file. Missing keys take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: IndexingConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the index would reject.
    pub fn validate(&self) -> Result<()> {
        if self.child_documents_key.is_empty() {
            return Err(KgSolrError::config("child_documents_key must not be empty"));
        }
        if self.uri_field.as_deref() == Some("") {
            return Err(KgSolrError::config("uri_field must not be empty"));
        }
        Ok(())
    }
}
