//! Command implementations for Mutaradif CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ExpanderConfig;
use crate::error::{MutaradifError, Result};
use crate::similarity::{DiacriticFilter, jaccard};
use crate::synonym::level::SUPPORTED_LEVELS;
use crate::synonym::{AdjacencyGraph, LevelOutcome, RelationGraph, SynonymExpander};

/// Execute a CLI command.
pub fn execute_command(args: MutaradifArgs) -> Result<()> {
    match &args.command {
        Command::Extend(extend_args) => extend(extend_args.clone(), &args),
        Command::Evaluate(evaluate_args) => evaluate(evaluate_args.clone(), &args),
        Command::Batch(batch_args) => batch(batch_args.clone(), &args),
        Command::Derive(derive_args) => derive(derive_args.clone(), &args),
        Command::Jaccard(jaccard_args) => compare(jaccard_args.clone(), &args),
    }
}

/// Build the expander configuration from the config file and global flags.
pub fn load_config(cli_args: &MutaradifArgs) -> Result<ExpanderConfig> {
    let mut config = match &cli_args.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            ExpanderConfig::load_from_file(path)?
        }
        None => ExpanderConfig::default(),
    };

    if let Some(path) = &cli_args.level2_graph {
        config.level2_graph = Some(path.clone());
    }
    if let Some(path) = &cli_args.level3_graph {
        config.level3_graph = Some(path.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Fail when a supported level has no chain table configured.
fn require_graph(config: &ExpanderConfig, level: u32) -> Result<()> {
    if SUPPORTED_LEVELS.contains(&level) && config.graph_path(level).is_none() {
        return Err(MutaradifError::config(format!(
            "no chain table configured for level {level}; \
             pass --level{level}-graph or set level{level}_graph in the configuration file"
        )));
    }
    Ok(())
}

/// Expand a synset.
fn extend(args: ExtendArgs, cli_args: &MutaradifArgs) -> Result<()> {
    let mut config = load_config(cli_args)?;
    if let Some(limit) = args.limit {
        config.max_results = Some(limit);
    }
    if let Some(min_score) = args.min_score {
        config.min_score = min_score;
    }
    config.validate()?;

    let level = args.level.unwrap_or(config.default_level);
    require_graph(&config, level)?;
    let expander = SynonymExpander::from_config(config)?;
    let candidates = expander.extend(&args.synset, level).into_result()?;

    output_result(
        "Synset expansion",
        &ExpansionResult {
            synset: args.synset,
            level,
            candidates,
        },
        cli_args,
    )
}

/// Evaluate the members of a synset.
fn evaluate(args: EvaluateArgs, cli_args: &MutaradifArgs) -> Result<()> {
    let config = load_config(cli_args)?;
    let level = args.level.unwrap_or(config.default_level);
    require_graph(&config, level)?;
    let expander = SynonymExpander::from_config(config)?;
    let members = expander.evaluate(&args.synset, level).into_result()?;

    output_result(
        "Synset evaluation",
        &EvaluationResult {
            synset: args.synset,
            level,
            members,
        },
        cli_args,
    )
}

/// Read the synsets of a batch file.
fn read_synsets(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read synset file {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Extend or evaluate every synset of a file.
fn batch(args: BatchArgs, cli_args: &MutaradifArgs) -> Result<()> {
    let config = load_config(cli_args)?;
    let level = args.level.unwrap_or(config.default_level);
    require_graph(&config, level)?;
    let synsets = read_synsets(&args.input_file)?;
    let expander = SynonymExpander::from_config(config)?;

    if cli_args.verbosity() > 1 {
        println!("Processing {} synsets from: {}", synsets.len(), args.input_file.display());
    }

    let start_time = Instant::now();
    let outcomes: Vec<LevelOutcome<Option<_>>> = match args.mode {
        BatchMode::Extend => expander
            .extend_batch(&synsets, level)
            .into_iter()
            .map(|outcome| outcome.map(Some))
            .collect(),
        BatchMode::Evaluate => expander.evaluate_batch(&synsets, level),
    };

    let mut entries = Vec::with_capacity(synsets.len());
    for (synset, outcome) in synsets.into_iter().zip(outcomes) {
        entries.push(BatchEntry {
            synset,
            scores: outcome.into_result()?,
        });
    }
    let duration = start_time.elapsed();
    info!("processed {} synsets in {:?}", entries.len(), duration);

    output_result(
        "Batch results",
        &BatchResult {
            mode: args.mode,
            level,
            entries,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Derive a chain table from an adjacency graph.
fn derive(args: DeriveArgs, cli_args: &MutaradifArgs) -> Result<()> {
    let adjacency = AdjacencyGraph::load_from_file(&args.adjacency_file)?;
    let graph = RelationGraph::derive(&adjacency, args.max_len);
    let json = graph.to_json(cli_args.pretty)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write chain table {}", path.display()))?;
            output_result(
                "Chain table derived",
                &DerivationResult {
                    words: graph.len(),
                    chains: graph.chain_count(),
                    output: path.to_string_lossy().to_string(),
                },
                cli_args,
            )
        }
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

/// Read a word list file, joining its lines with the delimiter.
///
/// Every line is a separate entry, even when it holds no delimiter.
fn read_word_list(path: &Path, delimiter: &str) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    Ok(content.lines().collect::<Vec<_>>().join(delimiter))
}

/// Compare two word lists.
fn compare(args: JaccardArgs, cli_args: &MutaradifArgs) -> Result<()> {
    let (list1, list2) = match (&args.file1, &args.file2, &args.list1, &args.list2) {
        (Some(file1), Some(file2), _, _) => (
            read_word_list(file1, &args.delimiter)?,
            read_word_list(file2, &args.delimiter)?,
        ),
        (_, _, Some(list1), Some(list2)) => (list1.clone(), list2.clone()),
        _ => {
            return Err(anyhow::anyhow!(
                "either --file1 and --file2 or --list1 and --list2 must be provided"
            )
            .into());
        }
    };

    let filter = DiacriticFilter::new(
        args.ignore_all_diacritics_but_not_shadda,
        args.ignore_shadda_diacritic,
    );
    let result = jaccard(&args.delimiter, &list1, &list2, args.selection, filter)?;

    output_result("Jaccard result", &result, cli_args)
}
