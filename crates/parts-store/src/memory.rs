//! In-memory store backed by insertion-ordered tables.

use crate::{QueryResult, Row, Select, Store, StoreError};
use std::collections::HashMap;

/// An in-memory [`Store`].
///
/// Used for fixtures, tests and the CLI. Rows keep their insertion order,
/// which is the order selects return them in.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: HashMap<String, Vec<Row>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tables from a JSON document shaped `{"table": [{..}, ..]}`.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| StoreError::Parse(e.to_string()))?;
        Self::from_json_value(&value)
    }

    /// Load tables from an already parsed JSON document.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, StoreError> {
        let object = value
            .as_object()
            .ok_or_else(|| StoreError::Parse("expected an object of tables".to_string()))?;

        let mut store = Self::new();
        for (table, rows) in object {
            let rows = rows.as_array().ok_or_else(|| StoreError::InvalidTable {
                table: table.clone(),
                reason: "expected an array of records".to_string(),
            })?;

            for (index, record) in rows.iter().enumerate() {
                let record = record.as_object().ok_or_else(|| StoreError::InvalidTable {
                    table: table.clone(),
                    reason: format!("record {} is not an object", index),
                })?;
                store.insert(table.clone(), Row::from_json_object(record));
            }

            // Keep explicitly empty tables visible.
            store.tables.entry(table.clone()).or_default();
        }

        tracing::debug!(tables = store.tables.len(), "loaded memory store");
        Ok(store)
    }

    /// Append a row to a table, creating the table if needed.
    pub fn insert(&mut self, table: impl Into<String>, row: Row) {
        self.tables.entry(table.into()).or_default().push(row);
    }

    /// Number of rows in a table.
    pub fn count(&self, table: &str) -> usize {
        self.tables.get(table).map(Vec::len).unwrap_or(0)
    }

    /// Names of all tables.
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl Store for MemoryStore {
    fn select(&self, query: &Select) -> Result<QueryResult, StoreError> {
        let Some(rows) = self.tables.get(&query.table) else {
            return Ok(QueryResult::default());
        };

        let limit = query.limit.unwrap_or(usize::MAX);
        let rows = rows
            .iter()
            .filter(|row| query.matches(row))
            .take(limit)
            .cloned()
            .collect();

        Ok(QueryResult::new(rows))
    }
}
