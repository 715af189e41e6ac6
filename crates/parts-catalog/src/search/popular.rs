//! Popular searches derived from catalog contents.

use crate::catalog::ProductRecord;
use crate::config::SearchConfig;
use std::collections::HashMap;

/// Occurrence counts that remember first-seen order.
#[derive(Debug, Default)]
struct Tally<'a> {
    index: HashMap<&'a str, usize>,
    counts: Vec<(&'a str, usize)>,
}

impl<'a> Tally<'a> {
    fn add(&mut self, name: &'a str) {
        match self.index.get(name) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(name, self.counts.len());
                self.counts.push((name, 1));
            }
        }
    }

    /// The `n` most frequent names; ties keep first-seen order.
    fn top(mut self, n: usize) -> Vec<&'a str> {
        self.counts.sort_by(|a, b| b.1.cmp(&a.1));
        self.counts.into_iter().take(n).map(|(name, _)| name).collect()
    }
}

/// Most common brand names followed by most common category names.
///
/// Products without a brand (or category) are skipped for that tally.
/// Category names already listed as a brand are not repeated.
pub fn popular_searches<'a>(
    records: impl IntoIterator<Item = &'a ProductRecord>,
    config: &SearchConfig,
) -> Vec<String> {
    let mut brands = Tally::default();
    let mut categories = Tally::default();

    for record in records {
        if let Some(brand) = &record.brand {
            brands.add(&brand.name);
        }
        if let Some(category) = &record.category {
            categories.add(&category.name);
        }
    }

    let mut popular: Vec<&str> = brands.top(config.popular_per_source);
    for name in categories.top(config.popular_per_source) {
        if !popular.contains(&name) {
            popular.push(name);
        }
    }

    popular
        .into_iter()
        .take(config.popular_limit)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Brand, Category, Product};

    fn with_brand(id: i64, brand: &str) -> ProductRecord {
        ProductRecord::new(Product::new(id, "Part", 1.0)).with_brand(&Brand::new(id, brand))
    }

    #[test]
    fn test_brands_ranked_by_count() {
        let records = vec![with_brand(1, "X"), with_brand(2, "X"), with_brand(3, "Y")];
        assert_eq!(popular_searches(&records, &SearchConfig::default()), vec!["X", "Y"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let records = vec![
            with_brand(1, "B"),
            with_brand(2, "A"),
            with_brand(3, "C"),
            with_brand(4, "C"),
        ];
        assert_eq!(
            popular_searches(&records, &SearchConfig::default()),
            vec!["C", "B", "A"]
        );
    }

    #[test]
    fn test_brands_then_categories_without_duplicates() {
        let brakes = Category::new(1, "Brakes");
        let shared = Category::new(2, "Bosch");
        let records = vec![
            with_brand(1, "Bosch").with_category(&brakes),
            with_brand(2, "Bosch").with_category(&shared),
            ProductRecord::new(Product::new(3, "Part", 1.0)).with_category(&brakes),
        ];
        assert_eq!(
            popular_searches(&records, &SearchConfig::default()),
            vec!["Bosch", "Brakes"]
        );
    }

    #[test]
    fn test_top_five_per_source_and_cap() {
        let mut records = Vec::new();
        for i in 0..7 {
            let category = Category::new(i, format!("Cat {}", i));
            records.push(with_brand(i, &format!("Brand {}", i)).with_category(&category));
        }

        let popular = popular_searches(&records, &SearchConfig::default());
        assert_eq!(popular.len(), 10);
        assert_eq!(popular[0], "Brand 0");
        assert_eq!(popular[4], "Brand 4");
        assert_eq!(popular[5], "Cat 0");
        assert_eq!(popular[9], "Cat 4");
    }

    #[test]
    fn test_empty_catalog() {
        let records = Vec::<ProductRecord>::new();
        assert!(popular_searches(&records, &SearchConfig::default()).is_empty());
    }
}
