//! Order types and pricing.

use crate::catalog::Product;
use crate::error::{CatalogError, Result};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The only payment method offered; a deposit is collected up front.
pub const PAYMENT_METHOD: &str = "Vodafone Cash";

/// Lifecycle of a persisted order. Quotes always start as `Pending`; the
/// later states are set by whoever fulfils the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    /// Deposit received.
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Lowercase name, as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// No further transitions once delivered or cancelled.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

/// One cart line as submitted by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// A guest checkout request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_address: Option<String>,
    pub items: Vec<CartItem>,
}

/// A priced order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub product_id: ProductId,
    /// Product name at time of quoting.
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

/// A priced order ready to be persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderQuote {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: Option<String>,
    pub lines: Vec<QuoteLine>,
    /// Sum of all line totals.
    pub total: Money,
    /// Amount due up front: half the total.
    pub deposit: Money,
    pub payment_method: String,
    pub status: OrderStatus,
}

impl OrderQuote {
    /// Amount left to pay on delivery.
    pub fn balance_due(&self) -> Money {
        Money::new(
            self.total.amount_minor - self.deposit.amount_minor,
            self.total.currency,
        )
    }

    /// Total number of units ordered.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// Price an order against current product data.
///
/// `products` must contain every product referenced by the request; extra
/// products are ignored. Lines keep the request order.
pub fn quote_order(
    request: &OrderRequest,
    products: &[Product],
    currency: Currency,
) -> Result<OrderQuote> {
    if request.items.is_empty() {
        return Err(CatalogError::EmptyOrder);
    }

    let by_id: HashMap<ProductId, &Product> = products.iter().map(|p| (p.id, p)).collect();

    let mut lines = Vec::with_capacity(request.items.len());
    let mut total = Money::zero(currency);

    for item in &request.items {
        if item.quantity < 1 {
            return Err(CatalogError::InvalidQuantity(item.quantity));
        }

        let product = by_id
            .get(&item.product_id)
            .ok_or(CatalogError::ProductNotFound(item.product_id.get()))?;

        let unit_price = Money::from_decimal(product.price, currency)
            .filter(|m| m.amount_minor >= 0)
            .ok_or(CatalogError::InvalidPrice {
                product_id: product.id.get(),
                price: product.price,
            })?;
        let line_total = unit_price
            .checked_mul(item.quantity)
            .ok_or(CatalogError::Overflow)?;
        total = total.checked_add(&line_total).ok_or(CatalogError::Overflow)?;

        lines.push(QuoteLine {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity: item.quantity,
            unit_price,
            line_total,
        });
    }

    Ok(OrderQuote {
        customer_name: request.customer_name.clone(),
        customer_email: request.customer_email.clone(),
        customer_phone: request.customer_phone.clone(),
        customer_address: request.customer_address.clone(),
        lines,
        total,
        deposit: total.half(),
        payment_method: PAYMENT_METHOD.to_string(),
        status: OrderStatus::Pending,
    })
}
