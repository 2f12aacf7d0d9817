//! Command line argument parsing for Mutaradif CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::similarity::JaccardSelection;

/// Mutaradif - synonym-graph expansion and synset evaluation
#[derive(Parser, Debug, Clone)]
#[command(name = "mutaradif")]
#[command(about = "Synonym-graph expansion and fuzzy synset scoring")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Mutaradif Contributors")]
#[command(long_about = None)]
pub struct MutaradifArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, env = "MUTARADIF_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Level 2 chain table (JSON), overrides the configuration file
    #[arg(long, env = "MUTARADIF_LEVEL2_GRAPH", global = true)]
    pub level2_graph: Option<PathBuf>,

    /// Level 3 chain table (JSON), overrides the configuration file
    #[arg(long, env = "MUTARADIF_LEVEL3_GRAPH", global = true)]
    pub level3_graph: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MutaradifArgs {
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
    /// Propose new members for a synset
    Extend(ExtendArgs),

    /// Score each synset member against the others
    Evaluate(EvaluateArgs),

    /// Extend or evaluate every synset of a file
    Batch(BatchArgs),

    /// Derive a chain table from an adjacency graph
    Derive(DeriveArgs),

    /// Compare two word lists with Jaccard similarity
    Jaccard(JaccardArgs),
}

/// Arguments for synset expansion
#[derive(Parser, Debug, Clone)]
pub struct ExtendArgs {
    /// Synset members separated by the configured delimiter ('|' by default)
    #[arg(value_name = "SYNSET")]
    pub synset: String,

    /// Relation graph level (2 or 3)
    #[arg(short, long)]
    pub level: Option<u32>,

    /// Maximum number of candidates to show
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Minimum candidate score
    #[arg(long)]
    pub min_score: Option<f64>,
}

/// Arguments for synset evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Synset members separated by the configured delimiter ('|' by default)
    #[arg(value_name = "SYNSET")]
    pub synset: String,

    /// Relation graph level (2 or 3)
    #[arg(short, long)]
    pub level: Option<u32>,
}

/// Arguments for batch processing
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// File with one synset per line; blank lines and '#' comments are skipped
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// What to compute for each synset
    #[arg(short = 'm', long, default_value = "extend")]
    pub mode: BatchMode,

    /// Relation graph level (2 or 3)
    #[arg(short, long)]
    pub level: Option<u32>,
}

/// Batch modes
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchMode {
    /// Expand each synset
    Extend,
    /// Evaluate each synset
    Evaluate,
}

/// Arguments for chain table derivation
#[derive(Parser, Debug, Clone)]
pub struct DeriveArgs {
    /// Adjacency graph (JSON object of word -> neighbour list)
    #[arg(value_name = "ADJACENCY_FILE")]
    pub adjacency_file: PathBuf,

    /// Maximum chain length in words, both endpoints included
    #[arg(long)]
    pub max_len: usize,

    /// Write the chain table here instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for Jaccard comparison
#[derive(Parser, Debug, Clone)]
pub struct JaccardArgs {
    /// First word list (delimiter-separated)
    #[arg(long, requires = "list2", conflicts_with_all = ["file1", "file2"])]
    pub list1: Option<String>,

    /// Second word list (delimiter-separated)
    #[arg(long, requires = "list1")]
    pub list2: Option<String>,

    /// File holding the first word list, one or more entries per line
    #[arg(long, requires = "file2")]
    pub file1: Option<PathBuf>,

    /// File holding the second word list, one or more entries per line
    #[arg(long, requires = "file1")]
    pub file2: Option<PathBuf>,

    /// Delimiter between words
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,

    /// jaccardAll, intersection, union or similarity
    #[arg(short, long, default_value = "jaccardAll")]
    pub selection: JaccardSelection,

    /// Ignore all diacritics except shadda
    #[arg(long)]
    pub ignore_all_diacritics_but_not_shadda: bool,

    /// Ignore the shadda diacritic
    #[arg(long)]
    pub ignore_shadda_diacritic: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extend() {
        let args =
            MutaradifArgs::try_parse_from(["mutaradif", "extend", "A|B", "-l", "3", "-n", "5"])
                .unwrap();

        assert_eq!(args.verbosity(), 1);
        match args.command {
            Command::Extend(extend) => {
                assert_eq!(extend.synset, "A|B");
                assert_eq!(extend.level, Some(3));
                assert_eq!(extend.limit, Some(5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            MutaradifArgs::try_parse_from(["mutaradif", "evaluate", "A|B", "-q", "-f", "json"])
                .unwrap();

        assert_eq!(args.verbosity(), 0);
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_jaccard_selection() {
        let args = MutaradifArgs::try_parse_from([
            "mutaradif",
            "jaccard",
            "--list1",
            "a,b",
            "--list2",
            "b",
            "--selection",
            "union",
        ])
        .unwrap();

        match args.command {
            Command::Jaccard(jaccard) => {
                assert_eq!(jaccard.selection, JaccardSelection::Union);
                assert_eq!(jaccard.delimiter, ",");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_jaccard_list_requires_pair() {
        let result = MutaradifArgs::try_parse_from(["mutaradif", "jaccard", "--list1", "a"]);
        assert!(result.is_err());
    }
}
