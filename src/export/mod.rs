pub mod to_csv_connectors;
pub mod to_csv_nodes;
pub mod to_dot;
pub mod to_json;
pub mod to_mermaid;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

use crate::diagram::DiagramData;
use crate::errors::{DiagramError, DiagramResult};
use crate::theme::ThemeSettings;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    #[default]
    Json,
    Dot,
    Mermaid,
    CsvNodes,
    CsvConnectors,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Json,
        ExportFormat::Dot,
        ExportFormat::Mermaid,
        ExportFormat::CsvNodes,
        ExportFormat::CsvConnectors,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Dot => "dot",
            ExportFormat::Mermaid => "mermaid",
            ExportFormat::CsvNodes => "csv-nodes",
            ExportFormat::CsvConnectors => "csv-connectors",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| DiagramError::UnsupportedFormat(s.to_string()))
    }
}

/// Options shared by all exporters.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub pretty: bool,
    pub theme: ThemeSettings,
}

pub fn render(
    diagram: &DiagramData,
    format: ExportFormat,
    options: &ExportOptions,
) -> DiagramResult<String> {
    info!("Exporting diagram ({}) as {}", diagram.stats(), format);
    match format {
        ExportFormat::Json => to_json::render(diagram, options.pretty),
        ExportFormat::Dot => to_dot::render(diagram, &options.theme),
        ExportFormat::Mermaid => to_mermaid::render(diagram),
        ExportFormat::CsvNodes => to_csv_nodes::render(diagram),
        ExportFormat::CsvConnectors => to_csv_connectors::render(diagram),
    }
}

/// Template source for template based formats.
pub fn get_template(format: ExportFormat) -> Option<String> {
    match format {
        ExportFormat::Dot => Some(to_dot::get_template()),
        ExportFormat::Mermaid => Some(to_mermaid::get_template()),
        _ => None,
    }
}

/// Template context shared by the DOT and Mermaid exporters.
pub mod renderer {
    use crate::diagram::DiagramData;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    /// Nodes carry their diagram id plus a `key` (`n0`, `n1`, ...) that is
    /// unique per node and safe as a bare identifier. Connectors carry the
    /// keys of both endpoints, or null when an endpoint is not a node.
    pub fn create_standard_context(diagram: &DiagramData) -> Value {
        let mut keys: HashMap<&str, String> = HashMap::new();
        let nodes: Vec<Value> = diagram
            .nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| {
                let key = format!("n{}", idx);
                keys.entry(node.id.as_str()).or_insert_with(|| key.clone());
                json!({
                    "id": node.id,
                    "key": key,
                    "label": node.label(),
                    "is_leaf": node.is_leaf(),
                    "path": node.data.path,
                })
            })
            .collect();
        let connectors: Vec<Value> = diagram
            .connectors
            .iter()
            .map(|c| {
                json!({
                    "source": c.source_id,
                    "target": c.target_id,
                    "source_key": keys.get(c.source_id.as_str()),
                    "target_key": keys.get(c.target_id.as_str()),
                })
            })
            .collect();

        json!({
            "nodes": nodes,
            "connectors": connectors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("CSV-Nodes".parse::<ExportFormat>().unwrap(), ExportFormat::CsvNodes);
        assert!(matches!(
            "svg".parse::<ExportFormat>(),
            Err(DiagramError::UnsupportedFormat(_))
        ));
        for format in ExportFormat::ALL {
            assert_eq!(format.to_string().parse::<ExportFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_context_keys_are_unique_per_node() {
        use crate::diagram::{DiagramConnector, DiagramNode};

        let mut diagram = DiagramData::default();
        for id in ["first name", "first.name"] {
            diagram.nodes.push(DiagramNode::container(id.to_string(), id, 0, format!("Root.{}", id)));
        }
        diagram.connectors.push(DiagramConnector::new("first name", "first.name"));
        diagram.connectors.push(DiagramConnector::new("first name", "missing"));

        let context = renderer::create_standard_context(&diagram);
        assert_eq!(context["nodes"][0]["key"], "n0");
        assert_eq!(context["nodes"][1]["key"], "n1");
        assert_eq!(context["connectors"][0]["source_key"], "n0");
        assert_eq!(context["connectors"][0]["target_key"], "n1");
        assert!(context["connectors"][1]["target_key"].is_null());
    }

    #[test]
    fn test_templates_only_for_template_formats() {
        assert!(get_template(ExportFormat::Dot).is_some());
        assert!(get_template(ExportFormat::Mermaid).is_some());
        assert!(get_template(ExportFormat::Json).is_none());
    }
}
