//! Structural classification of JSON values
//!
//! Splits an object's fields into primitives (scalars and null) and nested
//! containers (objects and arrays), and computes the child counts shown on
//! container badges.

use serde_json::{Number, Value};
use std::borrow::Cow;

/// Fields of one object level, split by shape. Document order is preserved.
#[derive(Debug, Clone, Default)]
pub struct KeyCategories<'a> {
    pub primitive: Vec<(Cow<'a, str>, &'a Value)>,
    pub nested: Vec<(Cow<'a, str>, &'a Value)>,
}

impl<'a> KeyCategories<'a> {
    pub fn primitive_keys(&self) -> Vec<&str> {
        self.primitive.iter().map(|(k, _)| k.as_ref()).collect()
    }

    pub fn nested_keys(&self) -> Vec<&str> {
        self.nested.iter().map(|(k, _)| k.as_ref()).collect()
    }

    /// Nested fields that would actually spawn a node.
    pub fn non_empty_nested(&self) -> Vec<(Cow<'a, str>, &'a Value)> {
        self.nested
            .iter()
            .filter(|(_, v)| !is_empty_container(v))
            .cloned()
            .collect()
    }
}

/// Key/value pairs of a container. Arrays are keyed by their decimal index.
pub fn entries(value: &Value) -> Vec<(Cow<'_, str>, &Value)> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| (Cow::Borrowed(k.as_str()), v))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, v)| (Cow::Owned(idx.to_string()), v))
            .collect(),
        _ => Vec::new(),
    }
}

pub fn categorize_keys(value: &Value) -> KeyCategories<'_> {
    let mut categories = KeyCategories::default();
    for (key, field) in entries(value) {
        if is_primitive(field) {
            categories.primitive.push((key, field));
        } else {
            categories.nested.push((key, field));
        }
    }
    categories
}

pub fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

/// Number of child nodes a container will spawn.
///
/// All primitive fields of an object merge into a single leaf, so they count
/// once; every nested field counts on its own. Arrays count their items.
pub fn child_count(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => {
            let has_primitive = map.values().any(is_primitive);
            let arrays = map.values().filter(|v| v.is_array()).count();
            let objects = map.values().filter(|v| v.is_object()).count();
            usize::from(has_primitive) + arrays + objects
        }
        _ => 0,
    }
}

pub fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Text shown for a value in titles and scalar labels.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Text shown in a value annotation. Null renders as an empty label.
pub fn annotation_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => display_value(other),
    }
}

/// Numbers render the way a JavaScript `String(n)` would: integral floats
/// drop the fraction, negative zero is `0`, and magnitudes outside
/// `[1e-6, 1e21)` use exponent form with an explicit sign.
fn display_number(n: &Number) -> String {
    let Some(f) = n.as_f64().filter(|_| n.is_f64()) else {
        return n.to_string();
    };
    if f == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        return f.to_string();
    }
    let exp = format!("{:e}", f);
    if exp.contains("e-") {
        exp
    } else {
        exp.replacen('e', "e+", 1)
    }
}
