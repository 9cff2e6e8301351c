// ABOUTME: Template context management and value resolution
// ABOUTME: Provides the key-value data source and dotted-path walking for rendering

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::error::{Result, TemplateError};

/// Key-value data source supplying substitution values.
///
/// The context is a flat-or-nested mapping; nested values are reached with
/// dotted paths (`a.b.c`). The engine never mutates a context it renders with.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateContext {
    values: Map<String, Value>,
}

impl TemplateContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Build a context from a JSON value.
    ///
    /// Only objects are valid contexts; any other value is a contract
    /// violation and is rejected.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(TemplateError::InvalidContext {
                found: value_kind(&other),
            }),
        }
    }

    /// Build a context from plain string variables
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let values = vars
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();
        Self { values }
    }

    /// Add or update a value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a top-level value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Walk a dotted path through the context.
    ///
    /// Returns `None` the moment any segment is absent or the current value
    /// is not a mapping. A plain name (no dot) is a single-segment walk.
    pub fn resolve(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.values.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Convert the context back to a JSON value
    pub fn to_value(&self) -> Value {
        Value::Object(self.values.clone())
    }
}

/// Render a resolved value as substitution text.
///
/// Strings pass through unchanged, numbers and booleans use their natural
/// forms, null renders empty. Mappings and arrays render as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

pub(super) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
