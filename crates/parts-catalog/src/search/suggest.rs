//! Type-ahead suggestions.

use crate::config::SearchConfig;
use crate::search::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Brand,
    Model,
    Category,
    Product,
}

impl SuggestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Brand => "brand",
            SuggestionKind::Model => "model",
            SuggestionKind::Category => "category",
            SuggestionKind::Product => "product",
        }
    }
}

/// A single suggestion: the original (un-normalized) name and its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
}

impl Suggestion {
    pub fn new(text: impl Into<String>, kind: SuggestionKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Candidate names to suggest from, one list per source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionSources<'a> {
    pub brands: &'a [String],
    pub models: &'a [String],
    pub categories: &'a [String],
    /// Product names; only the first `suggestion_product_sample` are used.
    pub products: &'a [String],
}

/// Suggest names containing the query.
///
/// Sources are scanned brand, model, category, product. Duplicate texts are
/// dropped (first one wins regardless of kind) and the list is capped at
/// `suggestion_limit`. Queries shorter than `suggestion_min_len` characters
/// return nothing.
pub fn suggest(q: &str, sources: SuggestionSources<'_>, config: &SearchConfig) -> Vec<Suggestion> {
    if q.chars().count() < config.suggestion_min_len {
        return Vec::new();
    }

    let needle = normalize(q);
    let sample_len = sources.products.len().min(config.suggestion_product_sample);
    let product_sample = &sources.products[..sample_len];
    let scan = [
        (SuggestionKind::Brand, sources.brands),
        (SuggestionKind::Model, sources.models),
        (SuggestionKind::Category, sources.categories),
        (SuggestionKind::Product, product_sample),
    ];

    let mut seen = HashSet::new();
    scan.iter()
        .flat_map(|(kind, names)| names.iter().map(move |name| (*kind, name)))
        .filter(|(_, name)| normalize(name).contains(&needle))
        .filter(|(_, name)| seen.insert(*name))
        .take(config.suggestion_limit)
        .map(|(kind, name)| Suggestion::new(name.clone(), kind))
        .collect()
}
