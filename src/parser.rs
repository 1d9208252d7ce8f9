//! JSON to diagram transform
//!
//! ```text
//! JSON value
//!   └── validate         (non-empty object, otherwise empty diagram)
//!       └── resolve root (transparent wrapper / named root / default)
//!           └── categorize top level keys
//!               ├── anchor leaf for top level primitives
//!               ├── containers for nested fields (task stack walk)
//!               └── consolidate forest roots
//! ```

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::consolidate;
use crate::diagram::{DiagramBuilder, DiagramData};
use crate::emitter::Emitter;
use crate::ids::{IdSource, RandomIdSource};
use crate::root;
use crate::shape;

/// Convert `input` into a diagram using random id suffixes.
pub fn process_data(input: &Value) -> DiagramData {
    let mut ids = RandomIdSource::new();
    process_data_with(input, &mut ids)
}

/// Convert `input` into a diagram, drawing leaf id suffixes from `ids`.
///
/// Inputs that are not a non-empty object produce an empty diagram.
pub fn process_data_with(input: &Value, ids: &mut dyn IdSource) -> DiagramData {
    let mut builder = DiagramBuilder::new();

    if !root::is_valid_input(input) {
        debug!("Input is not a non-empty object, nothing to render");
        return builder.finish();
    }

    let resolution = root::resolve_root(input);
    debug!(
        "Resolved root label '{}' (transparent wrapper: {})",
        resolution.label, resolution.skip_empty_root
    );

    let categories = shape::categorize_keys(resolution.data);

    let mut emitter = Emitter::new(&mut builder, ids);
    let anchor_id = emitter.emit_root_anchor(&resolution, &categories);
    emitter.emit_root_nested(&categories, anchor_id.as_deref());

    let anchor_created = anchor_id.is_some();
    if consolidate::should_consolidate(&builder, resolution.skip_empty_root, anchor_created) {
        consolidate::consolidate_roots(&mut builder);
    }

    let data = builder.finish();
    debug!("Diagram built: {}", data.stats());
    data
}

/// Parse a JSON document of any nesting depth.
///
/// serde_json stops at 128 levels by default. The limit is lifted and the
/// parser grows its stack on demand instead.
pub fn parse_json(input: &str) -> serde_json::Result<Value> {
    let mut json_de = serde_json::Deserializer::from_str(input);
    json_de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut json_de))?;
    json_de.end()?;
    Ok(value)
}

/// Transform bundled with an owned id source, for repeated conversions.
#[derive(Debug, Default)]
pub struct DiagramParser<S: IdSource = RandomIdSource> {
    ids: S,
}

impl DiagramParser<RandomIdSource> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_id_source(RandomIdSource::seeded(seed))
    }
}

impl<S: IdSource> DiagramParser<S> {
    pub fn with_id_source(ids: S) -> Self {
        Self { ids }
    }

    pub fn process(&mut self, input: &Value) -> DiagramData {
        process_data_with(input, &mut self.ids)
    }

    pub fn process_str(&mut self, input: &str) -> serde_json::Result<DiagramData> {
        let value = parse_json(input)?;
        Ok(self.process(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdSource;
    use serde_json::json;

    fn parse(value: Value) -> DiagramData {
        DiagramParser::with_id_source(SequentialIdSource::new()).process(&value)
    }

    #[test]
    fn test_primitive_root_only() {
        let data = parse(json!({"name": "Alice", "age": 30}));
        assert_eq!(data.nodes.len(), 1);
        assert!(data.connectors.is_empty());
        let node = &data.nodes[0];
        assert_eq!(node.id, "root-0");
        assert_eq!(node.data.path, "Root");
        assert_eq!(node.data.title, "name: Alice\nage: 30");
        let ids: Vec<Option<&str>> = node.annotations.iter().map(|a| a.id.as_deref()).collect();
        assert_eq!(
            ids,
            vec![Some("Key_name"), Some("Value_name"), Some("Key_age"), Some("Value_age")]
        );
    }

    #[test]
    fn test_named_root_with_nested_children() {
        let data = parse(json!({"company": {"name": "ACME", "staff": [1]}}));
        let ids: Vec<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["company", "company-leaf-0", "company-staff", "company-staff-0-1"]);
        let root = &data.nodes[0];
        let display = root.data.display_content.as_ref().unwrap();
        assert_eq!(display.key, vec!["company".to_string()]);
        assert_eq!(display.display_value, 2);
        assert_eq!(data.root_ids(), vec!["company".to_string()]);
    }

    #[test]
    fn test_anchor_connects_nested_keys() {
        let data = parse(json!({"id": 7, "tags": ["x"], "meta": {"ok": true}}));
        assert_eq!(data.nodes[0].id, "root-0");
        assert_eq!(data.connectors[0].source_id, "root-0");
        assert_eq!(data.connectors[0].target_id, "tags");
        assert!(data.get_node(crate::root::MAIN_ROOT_ID).is_none());
        assert_eq!(data.root_ids().len(), 1);
    }

    #[test]
    fn test_parser_process_str() {
        let mut parser = DiagramParser::seeded(7);
        let data = parser.process_str(r#"{"a": {"b": 1}}"#).unwrap();
        assert_eq!(data.nodes.len(), 2);
        assert!(parser.process_str("{not json").is_err());
        assert!(parser.process_str(r#"{"a": 1} trailing"#).is_err());
    }

    #[test]
    fn test_parse_json_past_default_recursion_limit() {
        let depth = 500;
        let input = format!("{}{}{}", r#"{"n":"#.repeat(depth), r#"{"leaf":1}"#, "}".repeat(depth));
        assert!(serde_json::from_str::<Value>(&input).is_err());

        let data = DiagramParser::with_id_source(SequentialIdSource::new())
            .process_str(&input)
            .unwrap();
        assert_eq!(data.nodes.len(), depth + 1);
        assert_eq!(data.connectors.len(), depth);
        assert!(data.verify_integrity().is_ok());
    }
}
