//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{BatchMode, MutaradifArgs, OutputFormat};
use crate::error::Result;
use crate::synonym::FuzzyScore;

/// Result structure for synset expansion.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpansionResult {
    pub synset: String,
    pub level: u32,
    pub candidates: Vec<FuzzyScore>,
}

/// Result structure for synset evaluation.
///
/// `members` is absent when fewer than two synset members are known.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub synset: String,
    pub level: u32,
    pub members: Option<Vec<FuzzyScore>>,
}

/// One line of a batch run.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchEntry {
    pub synset: String,
    pub scores: Option<Vec<FuzzyScore>>,
}

/// Result structure for batch processing.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResult {
    pub mode: BatchMode,
    pub level: u32,
    pub entries: Vec<BatchEntry>,
    pub duration_ms: u64,
}

/// Result structure for chain table derivation.
#[derive(Debug, Serialize, Deserialize)]
pub struct DerivationResult {
    pub words: usize,
    pub chains: usize,
    pub output: String,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &MutaradifArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &MutaradifArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    let Some(obj) = value.as_object() else {
        println!("{}", format_value(&value));
        return Ok(());
    };

    if let Some(entries) = obj.get("entries").and_then(|e| e.as_array()) {
        for entry in entries {
            let synset = entry.get("synset").and_then(|s| s.as_str()).unwrap_or("");
            println!("{synset}");
            println!("{}", "─".repeat(synset.chars().count().max(1)));
            print_scores_human(entry.get("scores"));
            println!();
        }
        if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
            println!("Processed {} synsets in {duration}ms", entries.len());
        }
        return Ok(());
    }

    if let Some(scores) = obj.get("candidates").or_else(|| obj.get("members")) {
        print_scores_human(Some(scores));
        return Ok(());
    }

    for (key, val) in obj {
        println!("{key}: {}", format_value(val));
    }
    Ok(())
}

/// Print a ranked score list, one word per line.
fn print_scores_human(scores: Option<&serde_json::Value>) {
    match scores.and_then(|s| s.as_array()) {
        Some(rows) if !rows.is_empty() => {
            let width = rows
                .iter()
                .filter_map(|row| row.get("word").and_then(|w| w.as_str()))
                .map(|word| word.chars().count())
                .max()
                .unwrap_or(0);
            for (rank, row) in rows.iter().enumerate() {
                let word = row.get("word").and_then(|w| w.as_str()).unwrap_or("");
                let score = row.get("score").and_then(|s| s.as_f64()).unwrap_or(0.0);
                println!("{:>3}. {word:<width$}  {score:.4}", rank + 1);
            }
        }
        Some(_) => println!("(no candidates)"),
        None => println!("(fewer than two known members)"),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &MutaradifArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output in CSV format.
///
/// Score lists become `synset,word,score` rows; other results are printed as
/// key-value pairs.
fn output_csv<T: Serialize>(result: &T, _args: &MutaradifArgs) -> Result<()> {
    let value = serde_json::to_value(result)?;
    let Some(obj) = value.as_object() else {
        println!("value");
        println!("{}", format_csv_value(&value));
        return Ok(());
    };

    let null = serde_json::Value::Null;
    let score_rows: Vec<(&serde_json::Value, Option<&serde_json::Value>)> =
        if let Some(entries) = obj.get("entries").and_then(|e| e.as_array()) {
            entries
                .iter()
                .map(|entry| (entry.get("synset").unwrap_or(&null), entry.get("scores")))
                .collect()
        } else if let Some(scores) = obj.get("candidates").or_else(|| obj.get("members")) {
            vec![(obj.get("synset").unwrap_or(&null), Some(scores))]
        } else {
            println!("key,value");
            for (key, value) in obj {
                println!("{key},{}", format_csv_value(value));
            }
            return Ok(());
        };

    println!("synset,word,score");
    for (synset, scores) in score_rows {
        let synset = format_csv_value(synset);
        for row in scores.and_then(|s| s.as_array()).into_iter().flatten() {
            let word = row.get("word").map(format_csv_value).unwrap_or_default();
            let score = row.get("score").map(format_csv_value).unwrap_or_default();
            println!("{synset},{word},{score}");
        }
    }
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

/// Format a JSON value for CSV output.
fn format_csv_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                let escaped = s.replace('"', "\"\"");
                format!("\"{escaped}\"")
            } else {
                s.clone()
            }
        }
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join("; ");
            format!("\"[{formatted_values}]\"")
        }
        serde_json::Value::Object(_) => "\"[object]\"".to_string(),
        serde_json::Value::Null => "".to_string(),
    }
}
