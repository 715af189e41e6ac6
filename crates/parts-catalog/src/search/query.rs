//! Search query builder.

use crate::error::CatalogError;
use crate::search::ProductFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Sort by relevance score, best first. Only meaningful with a text query.
    Relevance,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by normalized name A-Z.
    Name,
}

impl SortOption {
    /// The wire key (e.g., "price_asc").
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::Name => "name",
        }
    }

    /// Parse a sort key, treating unknown keys as "no sort".
    pub fn parse_lenient(key: &str) -> Option<Self> {
        key.parse().ok()
    }
}

impl FromStr for SortOption {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortOption::Relevance),
            "price_asc" => Ok(SortOption::PriceAsc),
            "price_desc" => Ok(SortOption::PriceDesc),
            "name" => Ok(SortOption::Name),
            other => Err(CatalogError::UnknownSort(other.to_string())),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Exact-id filters.
    #[serde(default)]
    pub filter: ProductFilter,
    /// Free-text query.
    #[serde(default)]
    pub text: Option<String>,
    /// Explicit sort key.
    #[serde(default)]
    pub sort: Option<SortOption>,
}

impl SearchQuery {
    /// Create an unfiltered, unsorted query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query. Empty text is treated as no query.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = if text.is_empty() { None } else { Some(text) };
        self
    }

    /// Set the filters.
    pub fn with_filter(mut self, filter: ProductFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = Some(sort);
        self
    }

    /// The text query, if one is present and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_keys_round_trip_through_strings() {
        for sort in [
            SortOption::Relevance,
            SortOption::PriceAsc,
            SortOption::PriceDesc,
            SortOption::Name,
        ] {
            assert_eq!(sort.as_str().parse::<SortOption>().unwrap(), sort);
        }
    }

    #[test]
    fn test_unknown_sort_key() {
        assert!(matches!(
            "rating".parse::<SortOption>(),
            Err(CatalogError::UnknownSort(_))
        ));
        assert_eq!(SortOption::parse_lenient("rating"), None);
        assert_eq!(SortOption::parse_lenient("name"), Some(SortOption::Name));
    }

    #[test]
    fn test_serde_uses_wire_keys() {
        let json = serde_json::to_string(&SortOption::PriceDesc).unwrap();
        assert_eq!(json, "\"price_desc\"");
    }

    #[test]
    fn test_query_builder() {
        let query = SearchQuery::new()
            .with_text("brake")
            .with_filter(ProductFilter::new().category(3))
            .with_sort(SortOption::PriceAsc);

        assert_eq!(query.text(), Some("brake"));
        assert_eq!(query.sort, Some(SortOption::PriceAsc));
        assert!(!query.filter.is_empty());
    }

    #[test]
    fn test_empty_text_is_no_query() {
        assert_eq!(SearchQuery::new().with_text("").text(), None);
        let mut query = SearchQuery::new();
        query.text = Some(String::new());
        assert_eq!(query.text(), None);
    }
}
