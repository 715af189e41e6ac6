//! The store trait the catalog reads through.

use crate::{QueryResult, Select, StoreError};
use std::sync::Arc;

/// A read-only record source.
///
/// Implementations return rows of `query.table` that satisfy every
/// condition, in the store's natural order, truncated to `query.limit`.
/// Selecting a table that has no rows returns an empty result.
pub trait Store: Send + Sync {
    /// Run a select.
    fn select(&self, query: &Select) -> Result<QueryResult, StoreError>;
}

impl<S: Store + ?Sized> Store for &S {
    fn select(&self, query: &Select) -> Result<QueryResult, StoreError> {
        (**self).select(query)
    }
}

impl<S: Store + ?Sized> Store for Arc<S> {
    fn select(&self, query: &Select) -> Result<QueryResult, StoreError> {
        (**self).select(query)
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn select(&self, query: &Select) -> Result<QueryResult, StoreError> {
        (**self).select(query)
    }
}
