//! Command implementations for the kgsolr CLI.

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::IndexingConfig;
use crate::document::converter::DocumentConverter;
use crate::document::converter::jsonl::JsonlDocumentConverter;
use crate::document::input::InputDocument;
use crate::error::Result;
use crate::update::{UPDATE_PATH, UpdateRequest};

/// Execute a CLI command.
pub fn execute_command(args: KgSolrArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Convert(convert_args) => convert(convert_args, &config, &args),
        Command::Inspect(inspect_args) => inspect(inspect_args, &config, &args),
    }
}

/// Load the configuration named on the command line, or the defaults.
fn load_config(args: &KgSolrArgs) -> Result<IndexingConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            IndexingConfig::from_file(path)
        }
        None => Ok(IndexingConfig::default()),
    }
}

/// Convert a record file into an update request body.
fn convert(args: &ConvertArgs, config: &IndexingConfig, cli_args: &KgSolrArgs) -> Result<()> {
    info!("Converting records from: {}", args.input.display());

    let converter = JsonlDocumentConverter::with_config(config.clone());
    let mut documents = converter.convert(&args.input)?;
    let mut request = UpdateRequest::with_config(config);
    for document in documents.by_ref() {
        request.add(&document?);
    }

    let stats = documents.stats();
    if stats.assignments_ignored > 0 {
        warn!(
            "{} field assignments were ignored (null values or empty arrays)",
            stats.assignments_ignored
        );
    }

    let body = request.to_json_string(cli_args.pretty)?;
    match &args.output {
        Some(path) => {
            fs::write(path, body)?;
            output_result(
                "Update request written",
                &ConversionResult {
                    output: Some(path.to_string_lossy().to_string()),
                    path: UPDATE_PATH.to_string(),
                    documents: stats.documents,
                    nested_documents: stats.nested_documents,
                    params: request
                        .params()
                        .into_iter()
                        .map(|(k, v)| (k.to_string(), v))
                        .collect(),
                },
                cli_args,
            )?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{body}")?;
            info!(
                "Wrote {} documents ({} nested) for {UPDATE_PATH}",
                stats.documents, stats.nested_documents
            );
        }
    }

    Ok(())
}

/// Report what a record file would produce without rendering it.
fn inspect(args: &InspectArgs, config: &IndexingConfig, cli_args: &KgSolrArgs) -> Result<()> {
    let converter = JsonlDocumentConverter::with_config(config.clone());
    let mut documents = converter.convert(&args.input)?;

    let mut fields = BTreeSet::new();
    for document in documents.by_ref() {
        collect_field_names(document?.input_document(), &mut fields);
    }

    output_result(
        "Record file summary",
        &InspectionResult {
            input: args.input.to_string_lossy().to_string(),
            stats: documents.stats().clone(),
            fields: fields.into_iter().collect(),
        },
        cli_args,
    )
}

fn collect_field_names(document: &InputDocument, names: &mut BTreeSet<String>) {
    names.extend(document.field_names());
    for child in document.child_documents() {
        collect_field_names(&child, names);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn write_records(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("records.jsonl");
        fs::write(
            &path,
            concat!(
                r#"{"uri": "a", "fields": {"label": "A"}, "boosts": {"label": 2.0}}"#,
                "\n",
                r#"{"uri": "b", "children": [{"uri": "c", "fields": {"kind": "part"}}]}"#,
                "\n",
            ),
        )
        .unwrap();
        path
    }

    #[test]
    fn test_convert_to_file() {
        let dir = TempDir::new().unwrap();
        let input = write_records(&dir);
        let output = dir.path().join("body.json");

        let args = KgSolrArgs::parse_from([
            "kgsolr",
            "-q",
            "convert",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]);
        execute_command(args).unwrap();

        let body: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!([
                {"id": "a", "label": {"value": "A", "boost": 2.0}},
                {"id": "b", "_childDocuments_": [{"id": "c", "kind": "part"}]}
            ])
        );
    }

    #[test]
    fn test_convert_with_config_file() {
        let dir = TempDir::new().unwrap();
        let input = write_records(&dir);
        let output = dir.path().join("body.json");
        let config = dir.path().join("config.json");
        fs::write(&config, r#"{"uri_field": "uri", "child_documents_key": "parts"}"#).unwrap();

        let args = KgSolrArgs::parse_from([
            "kgsolr",
            "-q",
            "--config",
            config.to_str().unwrap(),
            "convert",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);
        execute_command(args).unwrap();

        let body: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(body[1]["parts"][0]["uri"], "c");
    }

    #[test]
    fn test_inspect_missing_file() {
        let args = KgSolrArgs::parse_from(["kgsolr", "inspect", "/nonexistent/records.jsonl"]);
        assert!(execute_command(args).is_err());
    }

    #[test]
    fn test_collect_field_names_includes_children() {
        let converter = JsonlDocumentConverter::new();
        let doc = converter
            .parse_json_line(r#"{"uri": "b", "fields": {"label": "B"}, "children": [{"uri": "c", "fields": {"kind": "part"}}]}"#)
            .unwrap();

        let mut names = BTreeSet::new();
        collect_field_names(doc.input_document(), &mut names);
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["id", "kind", "label"]);
    }
}
