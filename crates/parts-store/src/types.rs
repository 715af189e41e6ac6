//! Column values, rows and select results.

use crate::StoreError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value as Json};

/// One cell: a column value or an `eq` operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
    /// Array columns such as image galleries.
    List(Vec<Value>),
}

impl Value {
    /// Whole numbers stored as reals are accepted.
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Value::Integer(n) => Some(n),
            Value::Real(x) if x.fract() == 0.0 => Some(x as i64),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match *self {
            Value::Integer(n) => Some(n as f64),
            Value::Real(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        if let Value::Text(text) = self {
            Some(text.as_str())
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        *self == Value::Null
    }

    /// Equality as used by `eq` filters.
    ///
    /// Numbers compare by value regardless of integer/real storage. Null
    /// never matches anything, including another null.
    pub fn matches(&self, other: &Value) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        if let (Value::Integer(a), Value::Integer(b)) = (self, other) {
            return a == b;
        }
        match (self.as_real(), other.as_real()) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }

    /// JSON form. Non-finite reals become `null`.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Null => Json::Null,
            Value::Bool(flag) => Json::Bool(*flag),
            Value::Integer(n) => Json::from(*n),
            Value::Real(x) => Number::from_f64(*x).map_or(Json::Null, Json::Number),
            Value::Text(text) => Json::String(text.clone()),
            Value::List(items) => Json::Array(items.iter().map(Value::to_json).collect()),
        }
    }
}

impl From<&Json> for Value {
    fn from(json: &Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(flag) => Value::Bool(*flag),
            Json::Number(n) => n
                .as_i64()
                .map(Value::Integer)
                .or_else(|| n.as_f64().map(Value::Real))
                .unwrap_or(Value::Null),
            Json::String(text) => Value::Text(text.clone()),
            Json::Array(items) => Value::List(items.iter().map(Value::from).collect()),
            // Relations are joined by the caller, never embedded in a row.
            Json::Object(_) => Value::Null,
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    i32 => Integer,
    i64 => Integer,
    f64 => Real,
    &str => Text,
    String => Text,
}

/// A single record: named columns in store order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, Value)>,
}

impl Row {
    pub fn new<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Build a row from a JSON object, one column per key.
    pub fn from_json_object(object: &Map<String, Json>) -> Self {
        Self::new(object.iter().map(|(k, v)| (k.as_str(), Value::from(v))))
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find_map(|(name, value)| (name == column).then_some(value))
    }

    pub fn get_text(&self, column: &str) -> Option<&str> {
        self.get(column)?.as_text()
    }

    pub fn get_integer(&self, column: &str) -> Option<i64> {
        self.get(column)?.as_integer()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn to_json(&self) -> Json {
        Json::Object(
            self.fields
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect(),
        )
    }

    /// Decode the row through its JSON form.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        Ok(serde_json::from_value(self.to_json())?)
    }
}

/// Rows returned by [`Store::select`](crate::Store::select), in store order.
#[derive(Debug, Clone, Default)]
pub struct QueryResult {
    pub rows: Vec<Row>,
}

impl QueryResult {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Decode every row; the first failure aborts.
    pub fn deserialize_all<T: DeserializeOwned>(&self) -> Result<Vec<T>, StoreError> {
        self.iter().map(Row::deserialize).collect()
    }
}
