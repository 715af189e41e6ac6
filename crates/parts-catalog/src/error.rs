//! Catalog error types.

use thiserror::Error;

/// Errors that can occur in catalog operations.
///
/// Search itself never fails on user input; these cover store access and
/// order quoting.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Order has no line items.
    #[error("Order has no items")]
    EmptyOrder,

    /// Price is not a finite, non-negative amount.
    #[error("Invalid price for product {product_id}: {price}")]
    InvalidPrice { product_id: i64, price: f64 },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Sort key not recognised.
    #[error("Unknown sort option: {0}")]
    UnknownSort(String),

    /// Store error.
    #[error("Store error: {0}")]
    Store(#[from] parts_store::StoreError),
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
