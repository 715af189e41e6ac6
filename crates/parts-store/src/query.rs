//! Select query builder.

use crate::{Row, Value};

/// An equality condition on a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Column name.
    pub column: String,
    /// Value the column must equal.
    pub value: Value,
}

impl Condition {
    /// Check whether a row satisfies this condition.
    ///
    /// A row without the column never matches.
    pub fn matches(&self, row: &Row) -> bool {
        row.get(&self.column)
            .map(|v| v.matches(&self.value))
            .unwrap_or(false)
    }
}

/// A `select(table)` request with AND-ed equality filters.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Table to read from.
    pub table: String,
    /// Equality conditions, all of which must hold.
    pub conditions: Vec<Condition>,
    /// Maximum number of rows to return.
    pub limit: Option<usize>,
}

impl Select {
    /// Start a select on a table.
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            conditions: Vec::new(),
            limit: None,
        }
    }

    /// Add an equality filter.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    /// Limit the number of rows returned.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check whether a row satisfies every condition.
    pub fn matches(&self, row: &Row) -> bool {
        self.conditions.iter().all(|c| c.matches(row))
    }
}
