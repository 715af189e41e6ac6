//! Store-backed catalog facade.

use crate::catalog::{
    Brand, BrandRef, CarModel, Category, CategoryRef, ModelRef, Product, ProductRecord,
    BRANDS_TABLE, CATEGORIES_TABLE, MODELS_TABLE, PRODUCTS_TABLE,
};
use crate::checkout::{quote_order, OrderQuote, OrderRequest};
use crate::config::SearchConfig;
use crate::error::{CatalogError, Result};
use crate::ids::{BrandId, ProductId};
use crate::money::Currency;
use crate::search::{
    popular_searches, rank, suggest, ProductFilter, Scorer, SearchQuery, SearchResults,
    Suggestion, SuggestionSources,
};
use parts_store::{QueryResult, Select, Store};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Catalog reads, search and order quoting over an injected [`Store`].
///
/// Holds no mutable state; one instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Catalog<S> {
    store: S,
    config: SearchConfig,
    scorer: Scorer,
    currency: Currency,
}

impl<S: Store> Catalog<S> {
    /// Create a catalog with default search settings.
    pub fn new(store: S) -> Self {
        Self::with_config(store, SearchConfig::default())
    }

    /// Create a catalog with custom search settings.
    pub fn with_config(store: S, config: SearchConfig) -> Self {
        Self {
            store,
            scorer: Scorer::new(config.weights),
            config,
            currency: Currency::default(),
        }
    }

    /// Set the currency used for order quotes.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    fn select_as<T: DeserializeOwned>(&self, select: &Select) -> Result<Vec<T>> {
        Ok(self.store.select(select)?.deserialize_all()?)
    }

    fn select_names(&self, select: &Select) -> Result<Vec<String>> {
        let result: QueryResult = self.store.select(select)?;
        Ok(result
            .iter()
            .filter_map(|row| row.get_text("name"))
            .map(str::to_string)
            .collect())
    }

    /// All brands.
    pub fn brands(&self) -> Result<Vec<Brand>> {
        self.select_as(&Select::from(BRANDS_TABLE))
    }

    /// All car models.
    pub fn models(&self) -> Result<Vec<CarModel>> {
        self.select_as(&Select::from(MODELS_TABLE))
    }

    /// Models of one brand.
    pub fn models_for_brand(&self, brand_id: BrandId) -> Result<Vec<CarModel>> {
        self.select_as(&Select::from(MODELS_TABLE).eq("brand_id", brand_id))
    }

    /// All categories.
    pub fn categories(&self) -> Result<Vec<Category>> {
        self.select_as(&Select::from(CATEGORIES_TABLE))
    }

    /// A single product by id.
    pub fn product(&self, id: ProductId) -> Result<Product> {
        let result = self.store.select(&Select::from(PRODUCTS_TABLE).eq("id", id))?;
        match result.first() {
            Some(row) => Ok(row.deserialize()?),
            None => Err(CatalogError::ProductNotFound(id.get())),
        }
    }

    /// Products passing `filter`, each joined with its brand, model and
    /// category. Store order is preserved.
    pub fn product_records(&self, filter: &ProductFilter) -> Result<Vec<ProductRecord>> {
        let products: Vec<Product> = self.select_as(&filter.apply(Select::from(PRODUCTS_TABLE)))?;
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let brands: HashMap<_, _> = self
            .brands()?
            .iter()
            .map(|b| (b.id, BrandRef::from(b)))
            .collect();
        let models: HashMap<_, _> = self
            .models()?
            .iter()
            .map(|m| (m.id, ModelRef::from(m)))
            .collect();
        let categories: HashMap<_, _> = self
            .categories()?
            .iter()
            .map(|c| (c.id, CategoryRef::from(c)))
            .collect();

        let records = products
            .into_iter()
            .map(|product| {
                let brand = product.brand_id.and_then(|id| lookup(&brands, id, "brand", &product));
                let model = product.model_id.and_then(|id| lookup(&models, id, "model", &product));
                let category = product
                    .category_id
                    .and_then(|id| lookup(&categories, id, "category", &product));
                ProductRecord {
                    product,
                    brand,
                    model,
                    category,
                }
            })
            .collect();

        Ok(records)
    }

    /// Run a product search.
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResults> {
        let records = self.product_records(&query.filter)?;
        tracing::debug!(
            candidates = records.len(),
            query = query.text(),
            sort = ?query.sort,
            "searching products"
        );
        Ok(rank(records, query, &self.scorer))
    }

    /// Type-ahead suggestions for a partial query.
    pub fn suggestions(&self, q: &str) -> Result<Vec<Suggestion>> {
        if q.chars().count() < self.config.suggestion_min_len {
            return Ok(Vec::new());
        }

        let brands = self.select_names(&Select::from(BRANDS_TABLE))?;
        let models = self.select_names(&Select::from(MODELS_TABLE))?;
        let categories = self.select_names(&Select::from(CATEGORIES_TABLE))?;
        let products = self.select_names(
            &Select::from(PRODUCTS_TABLE).limit(self.config.suggestion_product_sample),
        )?;

        let sources = SuggestionSources {
            brands: &brands,
            models: &models,
            categories: &categories,
            products: &products,
        };
        Ok(suggest(q, sources, &self.config))
    }

    /// Most common brand and category names across the catalog.
    pub fn popular_searches(&self) -> Result<Vec<String>> {
        let records = self.product_records(&ProductFilter::new())?;
        Ok(popular_searches(&records, &self.config))
    }

    /// Price a checkout request against current product prices.
    pub fn quote_order(&self, request: &OrderRequest) -> Result<OrderQuote> {
        let mut products: Vec<Product> = Vec::with_capacity(request.items.len());
        for item in &request.items {
            if products.iter().any(|p| p.id == item.product_id) {
                continue;
            }
            products.push(self.product(item.product_id)?);
        }

        let quote = quote_order(request, &products, self.currency)?;
        tracing::debug!(
            lines = quote.lines.len(),
            total = %quote.total,
            deposit = %quote.deposit,
            "quoted order"
        );
        Ok(quote)
    }
}

/// Resolve a relation id, logging ids that point at nothing.
fn lookup<K, V>(table: &HashMap<K, V>, id: K, relation: &str, product: &Product) -> Option<V>
where
    K: std::hash::Hash + Eq + std::fmt::Display + Copy,
    V: Clone,
{
    let found = table.get(&id).cloned();
    if found.is_none() {
        tracing::warn!(product_id = %product.id, %id, relation, "dangling relation id");
    }
    found
}
