// Read-only configuration nodes consumed by the distribution constructors
use std::collections::BTreeMap;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{ConfigurationError, Result};

/// Read contract of a configuration node.
///
/// A node is a key/value record where each field is either text or a nested
/// node. Front ends (XML attributes, JSON documents, hand-built tables) only
/// need the three required methods; text normalization and numeric arrays
/// are provided on top of them.
pub trait ConfigNode: Sized {
    /// Does a field (attribute or child) with this name exist
    fn has_field(&self, name: &str) -> bool;

    /// Raw text of a field, `None` when absent or not representable as text
    fn field_text(&self, name: &str) -> Option<String>;

    /// Nested node stored under `name`
    fn child(&self, name: &str) -> Option<Self>;

    /// Text of a required field, optionally lowercased and whitespace-trimmed
    fn value(&self, name: &str, lowercase: bool, strip: bool) -> Result<String> {
        let mut text = self
            .field_text(name)
            .ok_or_else(|| ConfigurationError::MissingField(name.to_string()))?;
        if strip {
            text = text.trim().to_string();
        }
        if lowercase {
            text = text.to_lowercase();
        }
        Ok(text)
    }

    /// Whitespace-separated reals of a required field
    fn array(&self, name: &str) -> Result<Vec<f64>> {
        let text = self.value(name, false, false)?;
        Ok(parse_reals(&text))
    }
}

/// Tokenize on whitespace and read reals up to the first non-numeric token.
pub fn parse_reals(text: &str) -> Vec<f64> {
    text.split_whitespace()
        .map_while(|token| token.parse::<f64>().ok())
        .collect()
}

/// Configuration node backed by a JSON object.
///
/// Strings are read verbatim, numbers and booleans through their JSON
/// spelling, and arrays as their elements joined by single spaces, so
/// `"parameters": [0.0, 1.0]` and `"parameters": "0.0 1.0"` are equivalent.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonNode {
    value: Value,
}

impl JsonNode {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }
}

impl FromStr for JsonNode {
    type Err = ConfigurationError;

    fn from_str(text: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(text)?))
    }
}

fn render(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(render)
                .collect::<Vec<_>>()
                .join(" "),
        ),
        Value::Null | Value::Object(_) => None,
    }
}

impl ConfigNode for JsonNode {
    fn has_field(&self, name: &str) -> bool {
        matches!(self.value.get(name), Some(v) if !v.is_null())
    }

    fn field_text(&self, name: &str) -> Option<String> {
        self.value.get(name).and_then(render)
    }

    fn child(&self, name: &str) -> Option<Self> {
        self.value
            .get(name)
            .filter(|v| v.is_object())
            .cloned()
            .map(JsonNode::new)
    }
}

/// Configuration node holding plain field text, the shape produced by an
/// attribute-style front end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextNode {
    fields: BTreeMap<String, String>,
    children: BTreeMap<String, TextNode>,
}

impl TextNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`TextNode::set`]
    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.set(name, text);
        self
    }

    /// Builder form of [`TextNode::set_child`]
    pub fn with_child(mut self, name: impl Into<String>, child: TextNode) -> Self {
        self.set_child(name, child);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.fields.insert(name.into(), text.into());
    }

    pub fn set_child(&mut self, name: impl Into<String>, child: TextNode) {
        self.children.insert(name.into(), child);
    }
}

impl ConfigNode for TextNode {
    fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name) || self.children.contains_key(name)
    }

    fn field_text(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    fn child(&self, name: &str) -> Option<Self> {
        self.children.get(name).cloned()
    }
}
