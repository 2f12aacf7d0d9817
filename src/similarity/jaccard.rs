//! Jaccard comparison of two delimited word lists.

use std::fmt;
use std::str::FromStr;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{MutaradifError, Result};
use crate::similarity::diacritics::DiacriticFilter;

/// What a Jaccard comparison reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JaccardSelection {
    /// Intersection, union and similarity together.
    JaccardAll,
    Intersection,
    Union,
    Similarity,
}

impl FromStr for JaccardSelection {
    type Err = MutaradifError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "jaccardAll" => Ok(JaccardSelection::JaccardAll),
            "intersection" => Ok(JaccardSelection::Intersection),
            "union" => Ok(JaccardSelection::Union),
            "similarity" => Ok(JaccardSelection::Similarity),
            other => Err(MutaradifError::invalid_argument(format!(
                "unknown Jaccard selection '{other}', expected one of \
                 jaccardAll, intersection, union, similarity"
            ))),
        }
    }
}

impl fmt::Display for JaccardSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JaccardSelection::JaccardAll => "jaccardAll",
            JaccardSelection::Intersection => "intersection",
            JaccardSelection::Union => "union",
            JaccardSelection::Similarity => "similarity",
        };
        f.write_str(name)
    }
}

/// Outcome of a Jaccard comparison. Only the selected parts are filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JaccardResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intersection: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub union: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

/// Split a delimited list into a set of trimmed, filtered, non-empty words.
pub fn word_set(list: &str, delimiter: &str, filter: &DiacriticFilter) -> AHashSet<String> {
    list.split(delimiter)
        .map(|word| filter.filter(word.trim()))
        .filter(|word| !word.is_empty())
        .collect()
}

fn sorted(words: impl Iterator<Item = String>) -> Vec<String> {
    let mut words: Vec<String> = words.collect();
    words.sort();
    words
}

/// Compare two `delimiter`-separated word lists.
///
/// Similarity is `|intersection| / |union|`, and `0.0` when both lists are
/// empty. Set results are sorted.
pub fn jaccard(
    delimiter: &str,
    list1: &str,
    list2: &str,
    selection: JaccardSelection,
    filter: DiacriticFilter,
) -> Result<JaccardResult> {
    if delimiter.is_empty() {
        return Err(MutaradifError::invalid_argument("delimiter must not be empty"));
    }

    let first = word_set(list1, delimiter, &filter);
    let second = word_set(list2, delimiter, &filter);

    let intersection_size = first.intersection(&second).count();
    let union_size = first.union(&second).count();

    let mut result = JaccardResult::default();
    if matches!(
        selection,
        JaccardSelection::JaccardAll | JaccardSelection::Intersection
    ) {
        result.intersection = Some(sorted(first.intersection(&second).cloned()));
    }
    if matches!(
        selection,
        JaccardSelection::JaccardAll | JaccardSelection::Union
    ) {
        result.union = Some(sorted(first.union(&second).cloned()));
    }
    if matches!(
        selection,
        JaccardSelection::JaccardAll | JaccardSelection::Similarity
    ) {
        result.similarity = Some(if union_size == 0 {
            0.0
        } else {
            intersection_size as f64 / union_size as f64
        });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_parsing() {
        assert_eq!(
            "jaccardAll".parse::<JaccardSelection>().unwrap(),
            JaccardSelection::JaccardAll
        );
        assert_eq!(
            " union ".parse::<JaccardSelection>().unwrap(),
            JaccardSelection::Union
        );
        assert!("overlap".parse::<JaccardSelection>().is_err());
        assert_eq!(JaccardSelection::Similarity.to_string(), "similarity");
    }

    #[test]
    fn test_jaccard_all() {
        let result = jaccard(
            ",",
            "kitab, qalam, daftar",
            "qalam,kitab ,mimhat",
            JaccardSelection::JaccardAll,
            DiacriticFilter::default(),
        )
        .unwrap();

        assert_eq!(result.intersection.unwrap(), vec!["kitab", "qalam"]);
        assert_eq!(
            result.union.unwrap(),
            vec!["daftar", "kitab", "mimhat", "qalam"]
        );
        assert_eq!(result.similarity, Some(0.5));
    }

    #[test]
    fn test_single_selection() {
        let result = jaccard(
            "|",
            "a|b",
            "b|c",
            JaccardSelection::Similarity,
            DiacriticFilter::default(),
        )
        .unwrap();

        assert!(result.intersection.is_none());
        assert!(result.union.is_none());
        assert!((result.similarity.unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_diacritics_ignored() {
        let plain = jaccard(
            ",",
            "\u{0643}\u{064E}\u{062A}\u{064E}\u{0628}\u{064E}",
            "\u{0643}\u{062A}\u{0628}",
            JaccardSelection::Similarity,
            DiacriticFilter::default(),
        )
        .unwrap();
        assert_eq!(plain.similarity, Some(0.0));

        let normalized = jaccard(
            ",",
            "\u{0643}\u{064E}\u{062A}\u{064E}\u{0628}\u{064E}",
            "\u{0643}\u{062A}\u{0628}",
            JaccardSelection::Similarity,
            DiacriticFilter::new(true, false),
        )
        .unwrap();
        assert_eq!(normalized.similarity, Some(1.0));
    }

    #[test]
    fn test_empty_lists() {
        let result = jaccard(
            ",",
            " , ",
            "",
            JaccardSelection::JaccardAll,
            DiacriticFilter::default(),
        )
        .unwrap();

        assert_eq!(result.intersection, Some(Vec::new()));
        assert_eq!(result.similarity, Some(0.0));
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let result = jaccard(
            "",
            "a",
            "a",
            JaccardSelection::Union,
            DiacriticFilter::default(),
        );
        assert!(result.is_err());
    }
}
