//! JSON-aware wrappers around the collect operations.
//!
//! Array commands read the top-level document as a JSON array; `keys` and
//! `values` read it as a JSON object. Shape mismatches are reported as
//! [`OpError`] rather than coerced.

use std::collections::HashMap;
use std::str::FromStr;

use clap::ValueEnum;
use serde_json::{Number, Value};
use thiserror::Error;

/// Failures of the JSON operations themselves (as opposed to I/O or parsing).
#[derive(Debug, Error, PartialEq)]
pub enum OpError {
    #[error("expected a JSON array, found {found}")]
    NotAnArray { found: &'static str },

    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("transform failed at index {index}: {reason}")]
    Transform { index: usize, reason: String },
}

/// Element-wise transforms available to `collect apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transform {
    /// Character count of a string, or length of an array or object.
    Len,
    /// Uppercase a string.
    Upper,
    /// Lowercase a string.
    Lower,
    /// Render any value as text; strings are left unquoted.
    #[value(name = "string")]
    Stringify,
    /// Negate a number.
    Negate,
}

impl Transform {
    /// Apply this transform to one element.
    pub fn eval(self, value: &Value) -> Result<Value, String> {
        match (self, value) {
            (Self::Len, Value::String(s)) => Ok(Value::from(s.chars().count())),
            (Self::Len, Value::Array(items)) => Ok(Value::from(items.len())),
            (Self::Len, Value::Object(map)) => Ok(Value::from(map.len())),
            (Self::Upper, Value::String(s)) => Ok(Value::String(s.to_uppercase())),
            (Self::Lower, Value::String(s)) => Ok(Value::String(s.to_lowercase())),
            (Self::Stringify, Value::String(s)) => Ok(Value::String(s.clone())),
            (Self::Stringify, other) => Ok(Value::String(other.to_string())),
            (Self::Negate, Value::Number(n)) => negate(n)
                .map(Value::Number)
                .ok_or_else(|| format!("cannot negate {n}")),
            (transform, other) => Err(format!(
                "{} does not accept {}",
                transform.name(),
                kind(other)
            )),
        }
    }

    /// The name accepted on the command line, e.g. `string` for [`Self::Stringify`].
    pub fn name(self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_owned())
            .unwrap_or_default()
    }
}

fn negate(n: &Number) -> Option<Number> {
    if let Some(i) = n.as_i64() {
        return i.checked_neg().map(Number::from);
    }
    n.as_f64().and_then(|f| Number::from_f64(-f))
}

/// Element predicates for `collect select` and `collect reject`.
///
/// Parsed from `gt:<num>`, `ge:<num>`, `lt:<num>`, `le:<num>`, `eq:<json>`,
/// `ne:<json>` or `truthy`. An `eq`/`ne` operand that is not valid JSON is
/// taken as a bare string, so `eq:foo` matches `"foo"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Gt(f64),
    Ge(f64),
    Lt(f64),
    Le(f64),
    Eq(Value),
    Ne(Value),
    Truthy,
}

impl FromStr for Predicate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "truthy" {
            return Ok(Self::Truthy);
        }
        let (op, operand) = s
            .split_once(':')
            .ok_or_else(|| format!("invalid predicate '{s}': expected <op>:<operand> or truthy"))?;
        match op {
            "gt" => parse_threshold(operand).map(Self::Gt),
            "ge" => parse_threshold(operand).map(Self::Ge),
            "lt" => parse_threshold(operand).map(Self::Lt),
            "le" => parse_threshold(operand).map(Self::Le),
            "eq" => Ok(Self::Eq(parse_operand(operand))),
            "ne" => Ok(Self::Ne(parse_operand(operand))),
            _ => Err(format!("unknown predicate operator '{op}'")),
        }
    }
}

fn parse_threshold(raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(format!("invalid number '{raw}'")),
    }
}

fn parse_operand(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

impl Predicate {
    /// Numeric comparisons are false for non-numbers.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Gt(bound) => value.as_f64().is_some_and(|n| n > *bound),
            Self::Ge(bound) => value.as_f64().is_some_and(|n| n >= *bound),
            Self::Lt(bound) => value.as_f64().is_some_and(|n| n < *bound),
            Self::Le(bound) => value.as_f64().is_some_and(|n| n <= *bound),
            Self::Eq(expected) => value == expected,
            Self::Ne(expected) => value != expected,
            Self::Truthy => is_truthy(value),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Human-readable JSON type name for error messages.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn as_array(doc: &Value) -> Result<&[Value], OpError> {
    doc.as_array()
        .map(Vec::as_slice)
        .ok_or(OpError::NotAnArray { found: kind(doc) })
}

fn as_map(doc: &Value) -> Result<HashMap<&str, &Value>, OpError> {
    let object = doc
        .as_object()
        .ok_or(OpError::NotAnObject { found: kind(doc) })?;
    Ok(object.iter().map(|(k, v)| (k.as_str(), v)).collect())
}

/// Transform every element, failing on the first element the transform rejects.
pub fn apply_transform(doc: &Value, transform: Transform) -> Result<Vec<Value>, OpError> {
    let items = as_array(doc)?;
    let mut index = 0;
    collect::try_apply(items, |item| {
        let result = transform
            .eval(item)
            .map_err(|reason| OpError::Transform { index, reason });
        index += 1;
        result
    })
}

pub fn select_where(doc: &Value, predicate: &Predicate) -> Result<Vec<Value>, OpError> {
    Ok(collect::select(as_array(doc)?, |item| predicate.matches(item)))
}

pub fn reject_where(doc: &Value, predicate: &Predicate) -> Result<Vec<Value>, OpError> {
    Ok(collect::reject(as_array(doc)?, |item| predicate.matches(item)))
}

/// Deduplicate by canonical JSON text, keeping first occurrences.
pub fn unique_values(doc: &Value) -> Result<Vec<Value>, OpError> {
    Ok(collect::unique_by(as_array(doc)?, Value::to_string))
}

/// Keys of the top-level object, in unspecified order.
pub fn object_keys(doc: &Value) -> Result<Vec<String>, OpError> {
    let map = as_map(doc)?;
    Ok(collect::keys(&map).into_iter().map(str::to_owned).collect())
}

/// Values of the top-level object, in unspecified order.
pub fn object_values(doc: &Value) -> Result<Vec<Value>, OpError> {
    let map = as_map(doc)?;
    Ok(collect::values(&map).into_iter().cloned().collect())
}
