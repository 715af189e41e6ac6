//! Auto parts catalog: domain types, product search and order quoting.
//!
//! - **Catalog**: brands, car models, categories, products and their
//!   denormalized search views
//! - **Search**: text normalization, relevance scoring, filtering and
//!   sorting, type-ahead suggestions, popular searches
//! - **Checkout**: pricing a cart into an order quote
//!
//! The search core is pure: [`search::rank`] and friends take records that
//! are already in memory. [`Catalog`] wires them to a [`parts_store::Store`].
//!
//! # Example
//!
//! ```rust
//! use parts_catalog::prelude::*;
//! use parts_store::MemoryStore;
//!
//! let store = MemoryStore::from_json(r#"{
//!     "car_brands": [{"id": 1, "name": "Brembo"}],
//!     "categories": [{"id": 3, "name": "Brakes"}],
//!     "products": [
//!         {"id": 10, "name": "Brake Disc", "price": 80.0, "brand_id": 1, "category_id": 3},
//!         {"id": 11, "name": "Oil Filter", "price": 15.0}
//!     ]
//! }"#).unwrap();
//!
//! let catalog = Catalog::new(store);
//! let results = catalog
//!     .search(&SearchQuery::new().with_text("brembo").with_sort(SortOption::PriceAsc))
//!     .unwrap();
//!
//! assert_eq!(results.ids(), vec![10]);
//! ```

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod search;

mod service;

pub use config::SearchConfig;
pub use error::{CatalogError, Result};
pub use ids::*;
pub use money::{Currency, Money};
pub use service::Catalog;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::SearchConfig;
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::service::Catalog;

    // Catalog
    pub use crate::catalog::{Brand, CarModel, Category, FlatProduct, Product, ProductRecord};

    // Checkout
    pub use crate::checkout::{CartItem, OrderQuote, OrderRequest, OrderStatus};

    // Search
    pub use crate::search::{
        normalize, ProductFilter, SearchHit, SearchQuery, SearchResults, SortOption, Suggestion,
        SuggestionKind,
    };
}
