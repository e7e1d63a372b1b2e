//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{KgSolrArgs, OutputFormat};
use crate::document::converter::jsonl::ConversionStats;
use crate::error::Result;

/// Result structure for the convert command.
#[derive(Debug, Serialize)]
pub struct ConversionResult {
    pub output: Option<String>,
    pub path: String,
    pub documents: usize,
    pub nested_documents: usize,
    pub params: Vec<(String, String)>,
}

/// Result structure for the inspect command.
#[derive(Debug, Serialize)]
pub struct InspectionResult {
    pub input: String,
    #[serde(flatten)]
    pub stats: ConversionStats,
    pub fields: Vec<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &KgSolrArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &KgSolrArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(&val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(&value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &KgSolrArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join(", "),
        _ => value.to_string(),
    }
}
