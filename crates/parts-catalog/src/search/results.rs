//! Search results.

use crate::catalog::FlatProduct;
use serde::{Deserialize, Serialize};

/// One product in a result list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    /// The denormalized product.
    #[serde(flatten)]
    pub product: FlatProduct,
    /// Relevance score; only set when a text search was performed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<u32>,
}

impl SearchHit {
    /// A hit that was not scored.
    pub fn unscored(product: FlatProduct) -> Self {
        Self {
            product,
            relevance_score: None,
        }
    }

    /// A hit with a relevance score.
    pub fn scored(product: FlatProduct, score: u32) -> Self {
        Self {
            product,
            relevance_score: Some(score),
        }
    }

    /// Product id shortcut.
    pub fn id(&self) -> i64 {
        self.product.product.id.get()
    }

    /// Product name shortcut.
    pub fn name(&self) -> &str {
        &self.product.product.name
    }

    /// Product price shortcut.
    pub fn price(&self) -> f64 {
        self.product.product.price
    }
}

/// Ordered search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResults {
    /// The hits, in final order.
    pub hits: Vec<SearchHit>,
    /// Normalized terms the query was split into (empty without a query).
    pub terms: Vec<String>,
    /// Whether a text search was performed.
    pub searched: bool,
}

impl SearchResults {
    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Number of hits.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Ids of the hits in order.
    pub fn ids(&self) -> Vec<i64> {
        self.hits.iter().map(SearchHit::id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, ProductRecord};

    #[test]
    fn test_score_only_serialized_when_scored() {
        let flat = ProductRecord::new(Product::new(1, "Pad", 2.0)).flatten();

        let json = serde_json::to_value(SearchHit::unscored(flat.clone())).unwrap();
        assert!(json.get("relevance_score").is_none());
        assert_eq!(json["name"], "Pad");

        let json = serde_json::to_value(SearchHit::scored(flat, 15)).unwrap();
        assert_eq!(json["relevance_score"], 15);
    }
}
