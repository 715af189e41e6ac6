//! Equality filters on product relations.

use crate::catalog::Product;
use crate::ids::{BrandId, CategoryId, ModelId};
use parts_store::Select;
use serde::{Deserialize, Serialize};

/// Exact-id filters. Every present filter must match (AND).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Only products in this category.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Only products for this brand.
    #[serde(default)]
    pub brand_id: Option<BrandId>,
    /// Only products for this model.
    #[serde(default)]
    pub model_id: Option<ModelId>,
}

impl ProductFilter {
    /// A filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn category(mut self, id: impl Into<CategoryId>) -> Self {
        self.category_id = Some(id.into());
        self
    }

    /// Restrict to a brand.
    pub fn brand(mut self, id: impl Into<BrandId>) -> Self {
        self.brand_id = Some(id.into());
        self
    }

    /// Restrict to a model.
    pub fn model(mut self, id: impl Into<ModelId>) -> Self {
        self.model_id = Some(id.into());
        self
    }

    /// Check if no filter is set.
    pub fn is_empty(&self) -> bool {
        self.category_id.is_none() && self.brand_id.is_none() && self.model_id.is_none()
    }

    /// Check whether a product passes every present filter.
    ///
    /// Ids the store can never assign (zero, negative) match nothing.
    pub fn matches(&self, product: &Product) -> bool {
        fn check<T: PartialEq + Copy>(
            want: Option<T>,
            have: Option<T>,
            valid: fn(T) -> bool,
        ) -> bool {
            match want {
                None => true,
                Some(id) => valid(id) && have == Some(id),
            }
        }

        check(self.category_id, product.category_id, CategoryId::is_valid)
            && check(self.brand_id, product.brand_id, BrandId::is_valid)
            && check(self.model_id, product.model_id, ModelId::is_valid)
    }

    /// Push the filters down into a store select.
    pub fn apply(&self, mut select: Select) -> Select {
        if let Some(id) = self.category_id {
            select = select.eq("category_id", id);
        }
        if let Some(id) = self.brand_id {
            select = select.eq("brand_id", id);
        }
        if let Some(id) = self.model_id {
            select = select.eq("model_id", id);
        }
        select
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parts_store::Value;

    fn product(category: i64, brand: Option<i64>) -> Product {
        let mut p = Product::new(1, "Part", 1.0);
        p.category_id = Some(CategoryId::new(category));
        p.brand_id = brand.map(BrandId::new);
        p
    }

    #[test]
    fn test_empty_filter_matches_all() {
        assert!(ProductFilter::new().is_empty());
        assert!(ProductFilter::new().matches(&product(3, None)));
    }

    #[test]
    fn test_filters_are_anded() {
        let filter = ProductFilter::new().category(3).brand(1);
        assert!(filter.matches(&product(3, Some(1))));
        assert!(!filter.matches(&product(3, Some(2))));
        assert!(!filter.matches(&product(3, None)));
        assert!(!filter.matches(&product(4, Some(1))));
    }

    #[test]
    fn test_malformed_id_matches_nothing() {
        let mut p = product(3, None);
        p.category_id = Some(CategoryId::new(-1));
        assert!(!ProductFilter::new().category(-1).matches(&p));
    }

    #[test]
    fn test_apply_to_select() {
        let select = ProductFilter::new()
            .category(3)
            .model(9)
            .apply(Select::from("products"));

        assert_eq!(select.conditions.len(), 2);
        assert_eq!(select.conditions[0].column, "category_id");
        assert_eq!(select.conditions[0].value, Value::Integer(3));
        assert_eq!(select.conditions[1].column, "model_id");
    }
}
