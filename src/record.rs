//! Data record values supplied to the evaluator

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scalar value held by a data record
///
/// The variant order matters for untagged deserialization: a JSON number
/// without a fractional part becomes `Int`, one with a fractional part
/// becomes `Float`, everything else a `Str`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

/// Key/value data a rule AST is evaluated against
///
/// Borrowed by the evaluator for the duration of one call; the engine never
/// owns or mutates it.
pub type DataRecord = HashMap<String, Value>;

/// Build a [`DataRecord`] from `(key, value)` pairs
pub fn record<K, V, I>(entries: I) -> DataRecord
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
