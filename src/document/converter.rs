//! Document converter for creating URI documents from files.

use std::path::Path;

use crate::document::uri_document::UriDocument;
use crate::error::Result;

pub mod jsonl;

/// A trait for converting record files into URI document iterators.
///
/// # Example
///
/// ```no_run
/// use kgsolr::document::converter::DocumentConverter;
/// use kgsolr::document::converter::jsonl::JsonlDocumentConverter;
///
/// let converter = JsonlDocumentConverter::new();
/// for doc in converter.convert("resources.jsonl").unwrap() {
///     let doc = doc.unwrap();
///     println!("{}", doc.id());
/// }
/// ```
pub trait DocumentConverter {
    /// The iterator type that yields documents.
    type Iter: Iterator<Item = Result<UriDocument>>;

    /// Convert a file into an iterator of documents.
    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter>;
}
