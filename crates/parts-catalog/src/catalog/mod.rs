//! Product catalog module.
//!
//! Contains the persisted shapes of brands, car models, categories and
//! products, plus the denormalized search views built from them.

mod brand;
mod category;
mod model;
mod product;

pub use brand::{Brand, BrandRef};
pub use category::{Category, CategoryRef};
pub use model::{CarModel, ModelRef};
pub use product::{FlatProduct, Product, ProductRecord};

/// Store table holding brands.
pub const BRANDS_TABLE: &str = "car_brands";
/// Store table holding car models.
pub const MODELS_TABLE: &str = "car_models";
/// Store table holding categories.
pub const CATEGORIES_TABLE: &str = "categories";
/// Store table holding products.
pub const PRODUCTS_TABLE: &str = "products";
