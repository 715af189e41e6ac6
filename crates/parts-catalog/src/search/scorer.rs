//! Relevance scoring.

use crate::catalog::FlatProduct;
use crate::search::normalize;
use serde::{Deserialize, Serialize};

/// Points awarded per term and field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Term contained in the product name.
    pub name_contains: u32,
    /// Product name starts with the term.
    pub name_prefix: u32,
    /// Term contained in the description.
    pub description_contains: u32,
    /// Term contained in the brand name.
    pub brand_contains: u32,
    /// Brand name equals the term.
    pub brand_exact: u32,
    /// Term contained in the model name.
    pub model_contains: u32,
    /// Model name equals the term.
    pub model_exact: u32,
    /// Term contained in the category name.
    pub category_contains: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            name_contains: 10,
            name_prefix: 5,
            description_contains: 3,
            brand_contains: 8,
            brand_exact: 5,
            model_contains: 8,
            model_exact: 5,
            category_contains: 5,
        }
    }
}

/// Computes how well a product matches a set of search terms.
///
/// Every term is scored against every field independently and the points
/// add up, so term order never changes the total.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    weights: ScoreWeights,
}

/// Normalized searchable fields of one product.
struct Fields {
    name: String,
    description: String,
    brand: Option<String>,
    model: Option<String>,
    category: Option<String>,
}

impl Fields {
    fn of(product: &FlatProduct) -> Self {
        Self {
            name: normalize(&product.product.name),
            description: product
                .product
                .description
                .as_deref()
                .map(normalize)
                .unwrap_or_default(),
            brand: product.brand_name.as_deref().map(normalize),
            model: product.model_name.as_deref().map(normalize),
            category: product.category_name.as_deref().map(normalize),
        }
    }
}

impl Scorer {
    /// Create a scorer with custom weights.
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Score a product against already-normalized terms.
    ///
    /// Absent relations contribute nothing. Returns 0 for no match.
    pub fn score(&self, product: &FlatProduct, terms: &[String]) -> u32 {
        let fields = Fields::of(product);
        terms
            .iter()
            .filter(|t| !t.is_empty())
            .map(|term| self.score_term(&fields, term))
            .fold(0u32, u32::saturating_add)
    }

    fn score_term(&self, fields: &Fields, term: &str) -> u32 {
        let w = &self.weights;
        let mut score = 0u32;

        if fields.name.contains(term) {
            score = score.saturating_add(w.name_contains);
            if fields.name.starts_with(term) {
                score = score.saturating_add(w.name_prefix);
            }
        }

        if fields.description.contains(term) {
            score = score.saturating_add(w.description_contains);
        }

        if let Some(brand) = &fields.brand {
            if brand.contains(term) {
                score = score.saturating_add(w.brand_contains);
                if brand == term {
                    score = score.saturating_add(w.brand_exact);
                }
            }
        }

        if let Some(model) = &fields.model {
            if model.contains(term) {
                score = score.saturating_add(w.model_contains);
                if model == term {
                    score = score.saturating_add(w.model_exact);
                }
            }
        }

        if let Some(category) = &fields.category {
            if category.contains(term) {
                score = score.saturating_add(w.category_contains);
            }
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Brand, CarModel, Category, Product, ProductRecord};
    use crate::search::terms;

    fn pad() -> FlatProduct {
        ProductRecord::new(
            Product::new(1, "Brake Pad Set", 40.0).with_description("Ceramic brake pads"),
        )
        .with_brand(&Brand::new(1, "Toyota"))
        .with_model(&CarModel::new(2, 1, "Corolla"))
        .with_category(&Category::new(3, "Brakes"))
        .flatten()
    }

    #[test]
    fn test_name_exact_single_term_scores_at_least_15() {
        let product = ProductRecord::new(Product::new(1, "Alternator", 90.0)).flatten();
        assert_eq!(Scorer::default().score(&product, &terms("alternator")), 15);
    }

    #[test]
    fn test_all_fields_accumulate() {
        // name 10+5, description 3, category 5
        assert_eq!(Scorer::default().score(&pad(), &terms("brake")), 23);
        // brand 8+5
        assert_eq!(Scorer::default().score(&pad(), &terms("toyota")), 13);
        // model 8 only, not exact
        assert_eq!(Scorer::default().score(&pad(), &terms("corol")), 8);
    }

    #[test]
    fn test_term_order_invariant() {
        let scorer = Scorer::default();
        let a = scorer.score(&pad(), &terms("brake toyota"));
        let b = scorer.score(&pad(), &terms("toyota brake"));
        assert_eq!(a, b);
        assert_eq!(a, 23 + 13);
    }

    #[test]
    fn test_accent_insensitive() {
        let product = ProductRecord::new(Product::new(1, "Motör Mount", 10.0)).flatten();
        assert_eq!(Scorer::default().score(&product, &terms("MOTOR")), 15);
    }

    #[test]
    fn test_absent_relations_score_zero() {
        let product = ProductRecord::new(Product::new(1, "Wiper", 10.0)).flatten();
        assert_eq!(Scorer::default().score(&product, &terms("toyota")), 0);
        assert_eq!(Scorer::default().score(&product, &[]), 0);
    }

    #[test]
    fn test_empty_brand_name_is_present() {
        let mut product = ProductRecord::new(Product::new(1, "Wiper", 10.0)).flatten();
        product.brand_name = Some(String::new());
        // An empty name contains only the empty term, which is skipped.
        assert_eq!(Scorer::default().score(&product, &terms("wiper")), 15);
    }

    #[test]
    fn test_custom_weights() {
        let scorer = Scorer::new(ScoreWeights {
            name_prefix: 0,
            ..ScoreWeights::default()
        });
        let product = ProductRecord::new(Product::new(1, "Alternator", 90.0)).flatten();
        assert_eq!(scorer.score(&product, &terms("alternator")), 10);
    }

    #[test]
    fn test_huge_weights_saturate() {
        let scorer = Scorer::new(ScoreWeights {
            name_contains: u32::MAX,
            name_prefix: 1,
            ..ScoreWeights::default()
        });
        let product = ProductRecord::new(Product::new(1, "Alternator", 90.0)).flatten();
        assert_eq!(scorer.score(&product, &terms("alternator")), u32::MAX);

        let all_max = Scorer::new(ScoreWeights {
            name_contains: u32::MAX,
            name_prefix: u32::MAX,
            description_contains: u32::MAX,
            brand_contains: u32::MAX,
            brand_exact: u32::MAX,
            model_contains: u32::MAX,
            model_exact: u32::MAX,
            category_contains: u32::MAX,
        });
        assert_eq!(all_max.score(&pad(), &terms("brake toyota corolla")), u32::MAX);
    }
}
