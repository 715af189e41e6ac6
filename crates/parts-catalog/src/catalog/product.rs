//! Product types and search views.

use crate::catalog::{Brand, BrandRef, CarModel, Category, CategoryRef, ModelRef};
use crate::ids::{BrandId, CategoryId, ModelId, ProductId};
use serde::{Deserialize, Serialize};

fn default_rating() -> f64 {
    4.5
}

/// A part listed in the catalog, as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price in the store currency.
    pub price: f64,
    /// Category this part belongs to.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Brand the part fits.
    #[serde(default)]
    pub brand_id: Option<BrandId>,
    /// Model the part fits.
    #[serde(default)]
    pub model_id: Option<ModelId>,
    /// Primary image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Additional gallery images.
    #[serde(default)]
    pub images: Vec<String>,
    /// Average review rating.
    #[serde(default = "default_rating")]
    pub rating: f64,
    /// Number of reviews.
    #[serde(default)]
    pub reviews_count: i64,
    /// Units in stock.
    #[serde(default)]
    pub stock_quantity: i64,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// Create a product with only the fields search needs.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category_id: None,
            brand_id: None,
            model_id: None,
            image_url: None,
            images: Vec::new(),
            rating: default_rating(),
            reviews_count: 0,
            stock_quantity: 0,
            description: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check if the part can currently be ordered.
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

/// A product together with its related brand, model and category, as the
/// store returns it for search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default)]
    pub brand: Option<BrandRef>,
    #[serde(default)]
    pub model: Option<ModelRef>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

impl ProductRecord {
    /// Wrap a product with no relations attached.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            brand: None,
            model: None,
            category: None,
        }
    }

    /// Attach a brand, also setting the product's `brand_id`.
    pub fn with_brand(mut self, brand: &Brand) -> Self {
        self.product.brand_id = Some(brand.id);
        self.brand = Some(BrandRef::from(brand));
        self
    }

    /// Attach a model, also setting the product's `model_id`.
    pub fn with_model(mut self, model: &CarModel) -> Self {
        self.product.model_id = Some(model.id);
        self.model = Some(ModelRef::from(model));
        self
    }

    /// Attach a category, also setting the product's `category_id`.
    pub fn with_category(mut self, category: &Category) -> Self {
        self.product.category_id = Some(category.id);
        self.category = Some(CategoryRef::from(category));
        self
    }

    /// Copy the relation display fields onto a flat record.
    pub fn flatten(self) -> FlatProduct {
        let (brand_name, brand_logo) = match self.brand {
            Some(brand) => (Some(brand.name), brand.logo_url),
            None => (None, None),
        };

        FlatProduct {
            product: self.product,
            brand_name,
            brand_logo,
            model_name: self.model.map(|m| m.name),
            category_name: self.category.map(|c| c.name),
        }
    }
}

/// A denormalized product: relation names copied onto the top level.
///
/// A `None` name means the relation is absent. `Some("")` is a present
/// relation with an empty name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlatProduct {
    #[serde(flatten)]
    pub product: Product,
    pub brand_name: Option<String>,
    pub brand_logo: Option<String>,
    pub model_name: Option<String>,
    pub category_name: Option<String>,
}

impl From<ProductRecord> for FlatProduct {
    fn from(record: ProductRecord) -> Self {
        record.flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_defaults_from_json() {
        let product: Product =
            serde_json::from_str(r#"{"id": 1, "name": "Brake Pad", "price": 120.5}"#).unwrap();

        assert_eq!(product.rating, 4.5);
        assert_eq!(product.reviews_count, 0);
        assert!(product.images.is_empty());
        assert!(product.category_id.is_none());
        assert!(!product.in_stock());
    }

    #[test]
    fn test_flatten_copies_relation_names() {
        let brand = Brand::new(1, "Toyota").with_logo("toyota.png");
        let model = CarModel::new(4, 1, "Corolla");
        let category = Category::new(3, "Brakes");

        let flat = ProductRecord::new(Product::new(10, "Brake Pad", 50.0))
            .with_brand(&brand)
            .with_model(&model)
            .with_category(&category)
            .flatten();

        assert_eq!(flat.brand_name.as_deref(), Some("Toyota"));
        assert_eq!(flat.brand_logo.as_deref(), Some("toyota.png"));
        assert_eq!(flat.model_name.as_deref(), Some("Corolla"));
        assert_eq!(flat.category_name.as_deref(), Some("Brakes"));
        assert_eq!(flat.product.brand_id, Some(BrandId::new(1)));
        assert_eq!(flat.product.category_id, Some(CategoryId::new(3)));
    }

    #[test]
    fn test_flatten_without_relations() {
        let flat = ProductRecord::new(Product::new(10, "Wiper", 5.0)).flatten();
        assert!(flat.brand_name.is_none());
        assert!(flat.brand_logo.is_none());
        assert!(flat.model_name.is_none());
        assert!(flat.category_name.is_none());
    }

    #[test]
    fn test_flat_product_serializes_top_level_fields() {
        let flat = ProductRecord::new(Product::new(10, "Wiper", 5.0))
            .with_category(&Category::new(2, "Glass"))
            .flatten();
        let json = serde_json::to_value(&flat).unwrap();

        assert_eq!(json["name"], "Wiper");
        assert_eq!(json["category_name"], "Glass");
        assert_eq!(json["brand_name"], serde_json::Value::Null);
    }
}
