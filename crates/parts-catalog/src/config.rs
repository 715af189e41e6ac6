//! Search configuration.

use crate::search::ScoreWeights;
use serde::{Deserialize, Serialize};

/// Tunables for search, suggestions and popular searches.
///
/// Every field has a default, so a partial `[search]` table is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Relevance weights.
    pub weights: ScoreWeights,
    /// Queries shorter than this (in characters) get no suggestions.
    pub suggestion_min_len: usize,
    /// Maximum number of suggestions returned.
    pub suggestion_limit: usize,
    /// How many products are sampled for name suggestions.
    pub suggestion_product_sample: usize,
    /// Top brands and top categories taken for popular searches.
    pub popular_per_source: usize,
    /// Maximum number of popular searches returned.
    pub popular_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            suggestion_min_len: 2,
            suggestion_limit: 10,
            suggestion_product_sample: 5,
            popular_per_source: 5,
            popular_limit: 10,
        }
    }
}
