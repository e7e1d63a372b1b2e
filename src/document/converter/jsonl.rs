//! JSONL format document converter.
//!
//! Converts JSONL (JSON Lines) files of URI document records into
//! [`UriDocument`]s. Each line holds one record:
//! ```jsonl
//! {"uri": "http://dbpedia.org/resource/Berlin", "fields": {"label": "Berlin", "type": ["City", "Place"]}, "boosts": {"label": 2.0}}
//! {"uri": "http://dbpedia.org/resource/Paris", "fields": {"label": "Paris"}, "children": [{"uri": "http://dbpedia.org/resource/Montmartre"}]}
//! ```
//!
//! `fields`, `boosts` and `children` are optional. Array values become
//! multi-valued assignments and the field's boost is applied the same way
//! [`UriDocument::add_field_values_with_boost`] applies it.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::IndexingConfig;
use crate::document::converter::DocumentConverter;
use crate::document::field_value::FieldValue;
use crate::document::input::DEFAULT_BOOST;
use crate::document::uri_document::{FieldOutcome, UriDocument};
use crate::error::{KgSolrError, Result};

#[derive(Debug, Deserialize)]
struct DocumentRecord {
    uri: String,
    #[serde(default)]
    fields: Map<String, Value>,
    #[serde(default)]
    boosts: HashMap<String, f32>,
    #[serde(default)]
    children: Vec<DocumentRecord>,
}

/// Counters collected while converting records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Top-level documents produced.
    pub documents: usize,
    /// Documents nested below a top-level document, at any depth.
    pub nested_documents: usize,
    /// Field values written.
    pub values_added: usize,
    /// Field assignments dropped (null values, empty arrays).
    pub assignments_ignored: usize,
}

impl ConversionStats {
    fn record(&mut self, outcome: FieldOutcome) {
        match outcome {
            FieldOutcome::Added { values } => self.values_added += values,
            FieldOutcome::Ignored(_) => self.assignments_ignored += 1,
        }
    }
}

/// A document converter for JSONL format.
#[derive(Debug, Clone, Default)]
pub struct JsonlDocumentConverter {
    config: IndexingConfig,
}

impl JsonlDocumentConverter {
    /// Create a new JSONL converter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSONL converter with a custom configuration.
    pub fn with_config(config: IndexingConfig) -> Self {
        JsonlDocumentConverter { config }
    }

    /// Map a JSON value onto a field value. Strings stay text.
    fn to_field_value(value: &Value) -> FieldValue {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Boolean(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    FieldValue::Float(f)
                } else {
                    FieldValue::Text(n.to_string())
                }
            }
            Value::String(s) => FieldValue::Text(s.clone()),
            _ => FieldValue::Text(value.to_string()),
        }
    }

    /// Parse a single JSON line into a document.
    pub fn parse_json_line(&self, line: &str) -> Result<UriDocument> {
        let mut stats = ConversionStats::default();
        self.parse_line_with_stats(line, &mut stats)
    }

    fn parse_line_with_stats(&self, line: &str, stats: &mut ConversionStats) -> Result<UriDocument> {
        let record: DocumentRecord = serde_json::from_str(line)
            .map_err(|e| KgSolrError::parse(format!("Failed to parse record: {e}")))?;

        let document = self.build(record, stats);
        stats.documents += 1;
        Ok(document)
    }

    fn build(&self, record: DocumentRecord, stats: &mut ConversionStats) -> UriDocument {
        let mut doc = UriDocument::new(record.uri);

        // A unique key already present in the record wins over the copied URI.
        if let Some(uri_field) = self
            .config
            .uri_field
            .as_ref()
            .filter(|field| !record.fields.contains_key(field.as_str()))
        {
            let uri = doc.id().to_string();
            stats.record(doc.add_field(uri_field, uri));
        }

        for (name, value) in &record.fields {
            let boost = record.boosts.get(name).copied().unwrap_or(DEFAULT_BOOST);
            let outcome = match value {
                Value::Array(items) => doc.add_field_values_with_boost(
                    name,
                    items.iter().map(Self::to_field_value),
                    boost,
                ),
                _ => doc.add_field_with_boost(name, Self::to_field_value(value), boost),
            };
            stats.record(outcome);
        }

        for child in record.children {
            let child = self.build(child, stats);
            doc.add_child_document(&child);
            stats.nested_documents += 1;
        }

        doc
    }
}

/// Iterator over JSONL documents.
pub struct JsonlDocumentIterator {
    reader: BufReader<File>,
    converter: JsonlDocumentConverter,
    line_number: usize,
    stats: ConversionStats,
}

impl JsonlDocumentIterator {
    /// Counters for the records read so far.
    pub fn stats(&self) -> &ConversionStats {
        &self.stats
    }
}

impl Iterator for JsonlDocumentIterator {
    type Item = Result<UriDocument>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    self.line_number += 1;
                    let line = line.trim();
                    if line.is_empty() {
                        continue; // Skip empty lines
                    }
                    let result = self
                        .converter
                        .parse_line_with_stats(line, &mut self.stats)
                        .map_err(|e| match e {
                            KgSolrError::Parse(msg) => {
                                KgSolrError::parse(format!("line {}: {msg}", self.line_number))
                            }
                            other => other,
                        });
                    return Some(result);
                }
                Err(e) => return Some(Err(KgSolrError::Io(e))),
            }
        }
    }
}

impl DocumentConverter for JsonlDocumentConverter {
    type Iter = JsonlDocumentIterator;

    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter> {
        let file = File::open(path.as_ref())?;

        Ok(JsonlDocumentIterator {
            reader: BufReader::new(file),
            converter: self.clone(),
            line_number: 0,
            stats: ConversionStats::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BERLIN: &str = "http://dbpedia.org/resource/Berlin";

    #[test]
    fn test_jsonl_parsing() {
        let converter = JsonlDocumentConverter::new();
        let doc = converter
            .parse_json_line(
                r#"{"uri": "http://dbpedia.org/resource/Berlin", "fields": {"label": "Berlin", "population": 3645000}}"#,
            )
            .unwrap();

        let input = doc.input_document();
        assert_eq!(doc.id(), BERLIN);
        assert_eq!(input.get_field("id").unwrap().first_value(), Some(&FieldValue::from(BERLIN)));
        assert_eq!(
            input.get_field("population").unwrap().first_value(),
            Some(&FieldValue::Integer(3645000))
        );
    }

    #[test]
    fn test_strings_are_not_inferred() {
        let converter = JsonlDocumentConverter::new();
        let doc = converter
            .parse_json_line(r#"{"uri": "u", "fields": {"label": "1984", "flag": "true"}}"#)
            .unwrap();

        let input = doc.input_document();
        assert_eq!(input.get_field("label").unwrap().first_value(), Some(&FieldValue::from("1984")));
        assert_eq!(input.get_field("flag").unwrap().first_value(), Some(&FieldValue::from("true")));
    }

    #[test]
    fn test_array_boost_applies_once() {
        let converter = JsonlDocumentConverter::new();
        let doc = converter
            .parse_json_line(r#"{"uri": "u", "fields": {"type": ["City", "Place"]}, "boosts": {"type": 2.0}}"#)
            .unwrap();

        let field = doc.input_document().get_field("type").unwrap();
        let boosts: Vec<f32> = field.values().iter().map(|v| v.boost).collect();
        assert_eq!(boosts, vec![2.0, 1.0]);
        assert_eq!(field.boost(), 2.0);
    }

    #[test]
    fn test_uri_field_disabled() {
        let config = IndexingConfig {
            uri_field: None,
            ..Default::default()
        };
        let converter = JsonlDocumentConverter::with_config(config);
        let doc = converter.parse_json_line(r#"{"uri": "u"}"#).unwrap();

        assert!(doc.input_document().is_empty());
    }

    #[test]
    fn test_nested_children() {
        let converter = JsonlDocumentConverter::new();
        let doc = converter
            .parse_json_line(
                r#"{"uri": "a", "children": [{"uri": "b", "children": [{"uri": "c"}]}, {"uri": "d"}]}"#,
            )
            .unwrap();

        assert!(doc.has_child_documents());
        let children = doc.input_document().child_documents();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].get_field("id").unwrap().first_value(), Some(&FieldValue::from("b")));
        assert_eq!(children[0].child_count(), 1);
        assert_eq!(children[1].get_field("id").unwrap().first_value(), Some(&FieldValue::from("d")));
    }

    #[test]
    fn test_invalid_record() {
        let converter = JsonlDocumentConverter::new();
        assert!(converter.parse_json_line(r#"{"fields": {}}"#).is_err());
        assert!(converter.parse_json_line("not json").is_err());
    }

    #[test]
    fn test_jsonl_file_with_stats() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"uri": "a", "fields": {{"label": "A", "note": null, "tags": []}}}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"uri": "b", "fields": {{"tags": ["x", "y"]}}, "children": [{{"uri": "c"}}]}}"#).unwrap();
        file.flush().unwrap();

        let converter = JsonlDocumentConverter::new();
        let mut iter = converter.convert(file.path()).unwrap();
        let docs: Vec<_> = iter.by_ref().collect::<Result<_>>().unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].id(), "b");
        assert_eq!(
            iter.stats(),
            &ConversionStats {
                documents: 2,
                nested_documents: 1,
                // a: id + label, b: id + x + y, c: id
                values_added: 6,
                assignments_ignored: 2,
            }
        );
    }

    #[test]
    fn test_error_reports_line_number() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"uri": "a"}}"#).unwrap();
        writeln!(file, "{{broken").unwrap();
        file.flush().unwrap();

        let converter = JsonlDocumentConverter::new();
        let results: Vec<_> = converter.convert(file.path()).unwrap().collect();

        assert!(results[0].is_ok());
        let error = results[1].as_ref().unwrap_err().to_string();
        assert!(error.starts_with("Parse error: line 2: Failed to parse record"), "{error}");
        assert_eq!(error.matches("Parse error").count(), 1, "{error}");
    }

    #[test]
    fn test_unreadable_line_is_io_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, b'\n']).unwrap();
        file.flush().unwrap();

        let converter = JsonlDocumentConverter::new();
        let mut iter = converter.convert(file.path()).unwrap();

        assert!(matches!(iter.next(), Some(Err(KgSolrError::Io(_)))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let converter = JsonlDocumentConverter::new();
        let result = converter.convert("/nonexistent/records.jsonl");

        assert!(matches!(result, Err(KgSolrError::Io(_))));
    }

    #[test]
    fn test_record_unique_key_is_not_duplicated() {
        let converter = JsonlDocumentConverter::new();
        let doc = converter
            .parse_json_line(r#"{"uri": "http://x/a", "fields": {"id": "http://x/a", "label": "A"}}"#)
            .unwrap();

        let input = doc.input_document();
        assert_eq!(input.get_field("id").unwrap().value_count(), 1);
        assert_eq!(
            input.to_json_value("_childDocuments_"),
            serde_json::json!({"id": "http://x/a", "label": "A"})
        );
    }

    #[test]
    fn test_fields_keep_record_order() {
        let converter = JsonlDocumentConverter::new();
        let doc = converter
            .parse_json_line(r#"{"uri": "u", "fields": {"b": 1, "a": 2}}"#)
            .unwrap();

        assert_eq!(doc.input_document().field_names(), vec!["id", "b", "a"]);
    }
}
