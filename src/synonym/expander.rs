//! Entry points for synonym expansion and synset evaluation.

use std::sync::Arc;

use log::{debug, warn};
use rayon::prelude::*;

use crate::config::ExpanderConfig;
use crate::error::Result;
use crate::synonym::aggregate::aggregate;
use crate::synonym::evaluate::evaluate_synset;
use crate::synonym::graph::{LeveledGraphs, RelationGraph, RelationGraphProvider};
use crate::synonym::level::LevelOutcome;
use crate::synonym::scoring::{FuzzyScore, score_candidates};
use crate::synonym::synset::{DEFAULT_DELIMITER, effective_synset, parse_synset};

fn resolve<'g, P>(
    provider: &'g P,
    synset: &str,
    level: u32,
    delimiter: char,
) -> LevelOutcome<(&'g RelationGraph, Vec<String>)>
where
    P: RelationGraphProvider + ?Sized,
{
    let Some(graph) = provider.graph_for_level(level) else {
        return LevelOutcome::InvalidLevel(level);
    };

    let members = parse_synset(synset, delimiter);
    let effective = effective_synset(&members, graph);
    debug!(
        "resolved {} of {} synset members at level {level}",
        effective.len(),
        members.len()
    );
    LevelOutcome::Ok((graph, effective))
}

/// Rank the candidate synonyms of a `|`-delimited synset.
///
/// The result never contains a member of the effective synset.
pub fn extend_synonyms<P>(provider: &P, synset: &str, level: u32) -> LevelOutcome<Vec<FuzzyScore>>
where
    P: RelationGraphProvider + ?Sized,
{
    resolve(provider, synset, level, DEFAULT_DELIMITER).map(|(graph, effective)| {
        let aggregation = aggregate(graph, &effective);
        score_candidates(level, &effective, &aggregation)
    })
}

/// Score each member of a `|`-delimited synset against the others.
///
/// `Ok(None)` when fewer than two members are known to the level's graph.
pub fn evaluate_synonyms<P>(
    provider: &P,
    synset: &str,
    level: u32,
) -> LevelOutcome<Option<Vec<FuzzyScore>>>
where
    P: RelationGraphProvider + ?Sized,
{
    resolve(provider, synset, level, DEFAULT_DELIMITER)
        .map(|(graph, effective)| evaluate_synset(graph, level, &effective))
}

/// Synonym expansion service over a shared graph provider.
///
/// Applies the configured delimiter and result limits on top of
/// [`extend_synonyms`] and [`evaluate_synonyms`], and fans batches out over
/// the rayon thread pool.
#[derive(Clone)]
pub struct SynonymExpander {
    provider: Arc<dyn RelationGraphProvider>,
    config: ExpanderConfig,
}

impl SynonymExpander {
    pub fn new(provider: Arc<dyn RelationGraphProvider>, config: ExpanderConfig) -> Self {
        SynonymExpander { provider, config }
    }

    /// Load the level 2 and level 3 chain tables named by `config`.
    ///
    /// A level without a configured path gets an empty table.
    pub fn from_config(config: ExpanderConfig) -> Result<Self> {
        let level2 = match &config.level2_graph {
            Some(path) => RelationGraph::load_from_file(path)?,
            None => {
                warn!("no level 2 chain table configured; level 2 expansions will be empty");
                RelationGraph::new()
            }
        };
        let level3 = match &config.level3_graph {
            Some(path) => RelationGraph::load_from_file(path)?,
            None => {
                warn!("no level 3 chain table configured; level 3 expansions will be empty");
                RelationGraph::new()
            }
        };

        Ok(Self::new(Arc::new(LeveledGraphs::new(level2, level3)), config))
    }

    pub fn config(&self) -> &ExpanderConfig {
        &self.config
    }

    /// Expand a synset, dropping candidates below `min_score` and keeping at
    /// most `max_results` of them.
    pub fn extend(&self, synset: &str, level: u32) -> LevelOutcome<Vec<FuzzyScore>> {
        resolve(self.provider.as_ref(), synset, level, self.config.delimiter).map(
            |(graph, effective)| {
                let aggregation = aggregate(graph, &effective);
                let scores = score_candidates(level, &effective, &aggregation);
                self.limit(scores)
            },
        )
    }

    /// Evaluate the members of a synset.
    pub fn evaluate(&self, synset: &str, level: u32) -> LevelOutcome<Option<Vec<FuzzyScore>>> {
        resolve(self.provider.as_ref(), synset, level, self.config.delimiter)
            .map(|(graph, effective)| evaluate_synset(graph, level, &effective))
    }

    /// Expand many synsets in parallel. Results follow input order.
    pub fn extend_batch<S>(&self, synsets: &[S], level: u32) -> Vec<LevelOutcome<Vec<FuzzyScore>>>
    where
        S: AsRef<str> + Sync,
    {
        synsets
            .par_iter()
            .map(|synset| self.extend(synset.as_ref(), level))
            .collect()
    }

    /// Evaluate many synsets in parallel. Results follow input order.
    pub fn evaluate_batch<S>(
        &self,
        synsets: &[S],
        level: u32,
    ) -> Vec<LevelOutcome<Option<Vec<FuzzyScore>>>>
    where
        S: AsRef<str> + Sync,
    {
        synsets
            .par_iter()
            .map(|synset| self.evaluate(synset.as_ref(), level))
            .collect()
    }

    fn limit(&self, scores: Vec<FuzzyScore>) -> Vec<FuzzyScore> {
        let max_results = self.config.max_results.unwrap_or(usize::MAX);
        scores
            .into_iter()
            .filter(|candidate| candidate.score >= self.config.min_score)
            .take(max_results)
            .collect()
    }
}
