//! Command line argument parsing for the kgsolr CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// kgsolr - Build Solr update payloads from URI document records
#[derive(Parser, Debug, Clone)]
#[command(name = "kgsolr")]
#[command(about = "Build Solr update payloads from URI document records")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KgSolrArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Indexing configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "KGSOLR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KgSolrArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert JSONL records into an update request body
    Convert(ConvertArgs),

    /// Report what a JSONL record file would produce
    Inspect(InspectArgs),
}

/// Arguments for converting records
#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// Record file path (JSONL)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the body to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Arguments for inspecting records
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Record file path (JSONL)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert() {
        let args = KgSolrArgs::parse_from(["kgsolr", "-vv", "convert", "in.jsonl", "-o", "out.json"]);
        assert_eq!(args.verbosity(), 2);
        match args.command {
            Command::Convert(convert) => {
                assert_eq!(convert.input, PathBuf::from("in.jsonl"));
                assert_eq!(convert.output, Some(PathBuf::from("out.json")));
            }
            _ => panic!("Expected convert command"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = KgSolrArgs::parse_from(["kgsolr", "-q", "-v", "--format", "json", "inspect", "in.jsonl"]);
        assert_eq!(args.verbosity(), 0);
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
