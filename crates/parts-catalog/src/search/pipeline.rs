//! The search pipeline: filter, flatten, score, sort.

use crate::catalog::ProductRecord;
use crate::search::{normalize, terms, Scorer, SearchHit, SearchQuery, SearchResults, SortOption};

/// Rank an in-memory product collection.
///
/// 1. Keep records passing every filter, in input order.
/// 2. Flatten relation names onto each record.
/// 3. With a text query: score every record, drop zero scores, and sort by
///    score (best first) unless another sort key was requested.
/// 4. With `PriceAsc`, `PriceDesc` or `Name`: re-sort, overriding relevance.
///
/// Every sort is stable, so ties keep their previous relative order.
/// `Relevance` without a text query leaves the order unchanged.
pub fn rank(
    records: impl IntoIterator<Item = ProductRecord>,
    query: &SearchQuery,
    scorer: &Scorer,
) -> SearchResults {
    let flat = records
        .into_iter()
        .filter(|r| query.filter.matches(&r.product))
        .map(ProductRecord::flatten);

    let mut results = match query.text() {
        Some(text) => {
            let terms = terms(text);
            let hits = flat
                .filter_map(|product| {
                    let score = scorer.score(&product, &terms);
                    (score > 0).then(|| SearchHit::scored(product, score))
                })
                .collect::<Vec<_>>();

            tracing::debug!(query = text, ?terms, matches = hits.len(), "scored products");
            SearchResults {
                hits,
                terms,
                searched: true,
            }
        }
        None => SearchResults {
            hits: flat.map(SearchHit::unscored).collect(),
            terms: Vec::new(),
            searched: false,
        },
    };

    sort_hits(&mut results.hits, query.sort, results.searched);
    results
}

/// Apply the requested ordering in place.
fn sort_hits(hits: &mut [SearchHit], sort: Option<SortOption>, searched: bool) {
    match sort {
        None | Some(SortOption::Relevance) if searched => {
            hits.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        }
        None | Some(SortOption::Relevance) => {}
        Some(SortOption::PriceAsc) => hits.sort_by(|a, b| a.price().total_cmp(&b.price())),
        Some(SortOption::PriceDesc) => hits.sort_by(|a, b| b.price().total_cmp(&a.price())),
        Some(SortOption::Name) => {
            // Normalize once per hit rather than once per comparison.
            hits.sort_by_cached_key(|h| normalize(h.name()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Brand, Category, Product};
    use crate::search::ProductFilter;

    fn record(id: i64, name: &str, price: f64, category: &Category) -> ProductRecord {
        ProductRecord::new(Product::new(id, name, price)).with_category(category)
    }

    fn fixture() -> Vec<ProductRecord> {
        let brakes = Category::new(3, "Brakes");
        let filters = Category::new(4, "Filters");
        let brembo = Brand::new(1, "Brembo");

        vec![
            record(1, "Oil Filter", 15.0, &filters),
            record(2, "Brake Disc", 80.0, &brakes).with_brand(&brembo),
            record(3, "Air Filter", 12.0, &filters),
            record(4, "Brake Pad", 40.0, &brakes),
            record(5, "Rear brake cable", 25.0, &brakes),
        ]
    }

    fn run(query: SearchQuery) -> SearchResults {
        rank(fixture(), &query, &Scorer::default())
    }

    #[test]
    fn test_no_query_no_filter_returns_all_in_order() {
        let results = run(SearchQuery::new());
        assert_eq!(results.ids(), vec![1, 2, 3, 4, 5]);
        assert!(!results.searched);
        assert!(results.hits.iter().all(|h| h.relevance_score.is_none()));
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let results = run(SearchQuery::new().with_filter(ProductFilter::new().category(3)));
        assert_eq!(results.ids(), vec![2, 4, 5]);
    }

    #[test]
    fn test_text_query_sorts_by_score() {
        let results = run(SearchQuery::new().with_text("brake"));

        // 2: name 15 + category 5 = 20, 4: same 20, 5: name 10 + category 5 = 15
        assert_eq!(results.ids(), vec![2, 4, 5]);
        assert_eq!(results.terms, vec!["brake"]);
        let scores: Vec<_> = results.hits.iter().map(|h| h.relevance_score).collect();
        assert_eq!(scores, vec![Some(20), Some(20), Some(15)]);
    }

    #[test]
    fn test_explicit_sort_overrides_relevance() {
        let results = run(SearchQuery::new().with_text("brake").with_sort(SortOption::PriceAsc));
        assert_eq!(results.ids(), vec![5, 4, 2]);
        assert!(results.hits.iter().all(|h| h.relevance_score.is_some()));

        let results = run(SearchQuery::new().with_text("brake").with_sort(SortOption::PriceDesc));
        assert_eq!(results.ids(), vec![2, 4, 5]);
    }

    #[test]
    fn test_name_sort_uses_normalized_names() {
        let results = run(SearchQuery::new().with_sort(SortOption::Name));
        assert_eq!(results.ids(), vec![3, 2, 4, 1, 5]);
    }

    #[test]
    fn test_price_sort_is_stable() {
        let c = Category::new(1, "Misc");
        let records = vec![
            record(1, "A", 10.0, &c),
            record(2, "B", 5.0, &c),
            record(3, "C", 10.0, &c),
            record(4, "D", 5.0, &c),
        ];

        let scorer = Scorer::default();
        let asc = rank(
            records.clone(),
            &SearchQuery::new().with_sort(SortOption::PriceAsc),
            &scorer,
        );
        assert_eq!(asc.ids(), vec![2, 4, 1, 3]);

        let desc = rank(
            records,
            &SearchQuery::new().with_sort(SortOption::PriceDesc),
            &scorer,
        );
        assert_eq!(desc.ids(), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_name_sort_is_stable() {
        let c = Category::new(1, "Misc");
        let records = vec![
            record(1, "Motör", 10.0, &c),
            record(2, "Alternator", 5.0, &c),
            record(3, "motor", 7.0, &c),
            record(4, "MOTOR", 3.0, &c),
        ];

        let results = rank(
            records,
            &SearchQuery::new().with_sort(SortOption::Name),
            &Scorer::default(),
        );
        assert_eq!(results.ids(), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_relevance_without_query_is_noop() {
        let results = run(SearchQuery::new().with_sort(SortOption::Relevance));
        assert_eq!(results.ids(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        assert!(run(SearchQuery::new().with_text("turbocharger")).is_empty());
        // Whitespace-only text is a query with zero terms.
        let results = run(SearchQuery::new().with_text("   "));
        assert!(results.is_empty());
        assert!(results.searched);
    }

    #[test]
    fn test_filter_and_query_combined() {
        let query = SearchQuery::new()
            .with_text("filter")
            .with_filter(ProductFilter::new().category(4));
        let results = run(query);
        // Neither name starts with the term; both score 15 and keep input order.
        assert_eq!(results.ids(), vec![1, 3]);
    }

    #[test]
    fn test_empty_collection() {
        let results = rank(Vec::new(), &SearchQuery::new().with_text("brake"), &Scorer::default());
        assert!(results.is_empty());
    }
}
