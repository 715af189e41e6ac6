//! Checkout module.
//!
//! Prices a cart into an order quote. Persisting the order belongs to the
//! store layer.

mod order;

pub use order::{
    quote_order, CartItem, OrderQuote, OrderRequest, OrderStatus, QuoteLine, PAYMENT_METHOD,
};
