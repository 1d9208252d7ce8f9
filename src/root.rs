//! Resolution of the outermost JSON layer
//!
//! Decides which value's keys are inspected first and which label the root
//! anchor gets, before any key categorization happens.

use serde_json::Value;

pub const DEFAULT_ROOT_LABEL: &str = "root";
pub const DATA_ROOT_LABEL: &str = "data-root";
pub const MAIN_ROOT_ID: &str = "main-root";

#[derive(Debug, Clone, PartialEq)]
pub struct RootResolution<'a> {
    /// Value whose fields form the top level of the diagram.
    pub data: &'a Value,
    pub label: String,
    /// Set when a single empty-named key wrapped the real document.
    pub skip_empty_root: bool,
}

impl<'a> RootResolution<'a> {
    /// Label used for the anchor leaf id when primitives surface at the top.
    pub fn anchor_label(&self) -> String {
        if self.skip_empty_root {
            DATA_ROOT_LABEL.to_string()
        } else {
            crate::ids::normalize_identifier(&self.label)
        }
    }
}

/// Only non-empty objects can be turned into a diagram.
pub fn is_valid_input(input: &Value) -> bool {
    matches!(input, Value::Object(map) if !map.is_empty())
}

pub fn resolve_root(input: &Value) -> RootResolution<'_> {
    let mut resolution = RootResolution {
        data: input,
        label: DEFAULT_ROOT_LABEL.to_string(),
        skip_empty_root: false,
    };

    let Value::Object(map) = input else {
        return resolution;
    };

    if map.len() == 1 {
        if let Some((key, value)) = map.iter().next() {
            let is_container = matches!(value, Value::Object(_) | Value::Array(_));
            if is_container && is_blank(key) {
                resolution.data = value;
                resolution.skip_empty_root = true;
            } else if is_container {
                resolution.label = key.clone();
            }
        }
    }

    resolution
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
