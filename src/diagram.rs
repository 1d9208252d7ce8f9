use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

pub const DEFAULT_NODE_WIDTH: f64 = 150.0;
pub const DEFAULT_NODE_HEIGHT: f64 = 50.0;
pub const ARTIFICIAL_ROOT_SIZE: f64 = 40.0;

/// Output of the transform: nodes and the connectors between them, in
/// insertion order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DiagramData {
    pub nodes: Vec<DiagramNode>,
    pub connectors: Vec<DiagramConnector>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiagramNode {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub annotations: Vec<Annotation>,
    #[serde(rename = "additionalInfo")]
    pub additional_info: NodeInfo,
    pub data: NodeData,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Annotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub content: String,
}

impl Annotation {
    pub fn label(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            content: content.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NodeInfo {
    #[serde(rename = "isLeaf")]
    pub is_leaf: bool,
    #[serde(
        rename = "mergedContent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub merged_content: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NodeData {
    pub path: String,
    pub title: String,
    #[serde(rename = "actualdata")]
    pub actual_data: String,
    #[serde(
        rename = "displayContent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_content: Option<DisplayContent>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayContent {
    pub key: Vec<String>,
    #[serde(rename = "displayValue")]
    pub display_value: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiagramConnector {
    pub id: String,
    #[serde(rename = "sourceID")]
    pub source_id: String,
    #[serde(rename = "targetID")]
    pub target_id: String,
}

impl DiagramConnector {
    pub fn new(source_id: &str, target_id: &str) -> Self {
        Self {
            id: format!("connector-{}-{}", source_id, target_id),
            source_id: source_id.to_string(),
            target_id: target_id.to_string(),
        }
    }
}

impl DiagramNode {
    /// Leaf box holding one or more scalar values.
    pub fn leaf(id: String, annotations: Vec<Annotation>, path: String, content: String) -> Self {
        Self {
            id,
            width: DEFAULT_NODE_WIDTH,
            height: DEFAULT_NODE_HEIGHT,
            annotations,
            additional_info: NodeInfo {
                is_leaf: true,
                merged_content: None,
            },
            data: NodeData {
                path,
                title: content.clone(),
                actual_data: content,
                display_content: None,
            },
        }
    }

    /// Named container with a `{count}` badge when it has children.
    pub fn container(id: String, key: &str, child_count: usize, path: String) -> Self {
        let mut annotations = vec![Annotation::label(key)];
        if child_count > 0 {
            annotations.push(Annotation::label(format!("{{{}}}", child_count)));
        }

        Self {
            id,
            width: DEFAULT_NODE_WIDTH,
            height: DEFAULT_NODE_HEIGHT,
            annotations,
            additional_info: NodeInfo {
                is_leaf: false,
                merged_content: Some(format!("{} {{{}}}", key, child_count)),
            },
            data: NodeData {
                path,
                title: key.to_string(),
                actual_data: key.to_string(),
                display_content: None,
            },
        }
    }

    /// Unnamed array item that only groups nested fields.
    pub fn array_item(id: String, index: usize, path: String) -> Self {
        let content = format!("Item {}", index);
        Self {
            id,
            width: DEFAULT_NODE_WIDTH,
            height: DEFAULT_NODE_HEIGHT,
            annotations: vec![Annotation::label(content.clone())],
            additional_info: NodeInfo {
                is_leaf: false,
                merged_content: None,
            },
            data: NodeData {
                path,
                title: content.clone(),
                actual_data: content,
                display_content: None,
            },
        }
    }

    pub fn with_display_content(mut self, keys: Vec<String>, display_value: usize) -> Self {
        self.data.display_content = Some(DisplayContent {
            key: keys,
            display_value,
        });
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.additional_info.is_leaf
    }

    /// Label text of the node, one annotation per line.
    pub fn label(&self) -> String {
        if self.is_leaf() {
            self.data.title.clone()
        } else {
            self.annotations
                .iter()
                .map(|a| a.content.as_str())
                .filter(|c| !c.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        }
    }
}

impl DiagramData {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.connectors.is_empty()
    }

    pub fn get_node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Targets of the connectors leaving `id`, in connector order.
    pub fn get_children(&self, id: &str) -> Vec<&DiagramNode> {
        self.connectors
            .iter()
            .filter(|c| c.source_id == id)
            .filter_map(|c| self.get_node(&c.target_id))
            .collect()
    }

    /// Ids of nodes that no connector targets, in node order.
    pub fn root_ids(&self) -> Vec<String> {
        let targets: HashSet<&str> = self
            .connectors
            .iter()
            .map(|c| c.target_id.as_str())
            .collect();
        self.nodes
            .iter()
            .filter(|n| !targets.contains(n.id.as_str()))
            .map(|n| n.id.clone())
            .collect()
    }

    pub fn has_multiple_roots(&self) -> bool {
        self.root_ids().len() > 1
    }

    pub fn stats(&self) -> String {
        format!(
            "Nodes: {}, Connectors: {}",
            self.nodes.len(),
            self.connectors.len()
        )
    }

    pub fn verify_integrity(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let mut node_ids: HashSet<&str> = HashSet::new();

        for node in &self.nodes {
            if !node_ids.insert(node.id.as_str()) {
                errors.push(format!("Node id:[{}] is not unique", node.id));
            }
        }

        for connector in &self.connectors {
            if !node_ids.contains(connector.source_id.as_str()) {
                errors.push(format!(
                    "Connector id:[{}] source {:?} not found in nodes",
                    connector.id, connector.source_id
                ));
            }
            if !node_ids.contains(connector.target_id.as_str()) {
                errors.push(format!(
                    "Connector id:[{}] target {:?} not found in nodes",
                    connector.id, connector.target_id
                ));
            }
        }

        if errors.is_empty() {
            debug!("Diagram integrity verified: {}", self.stats());
            Ok(())
        } else {
            warn!("Diagram has {} integrity problems", errors.len());
            Err(errors)
        }
    }
}

/// Append-only accumulator threaded through one transform call.
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    data: DiagramData,
}

impl DiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: DiagramNode) {
        self.data.nodes.push(node);
    }

    pub fn connect(&mut self, source_id: &str, target_id: &str) {
        self.data
            .connectors
            .push(DiagramConnector::new(source_id, target_id));
    }

    /// Add `node` and a connector from `parent_id` to it.
    pub fn add_child(&mut self, parent_id: &str, node: DiagramNode) {
        let target_id = node.id.clone();
        self.add_node(node);
        self.connect(parent_id, &target_id);
    }

    pub fn data(&self) -> &DiagramData {
        &self.data
    }

    pub fn finish(self) -> DiagramData {
        self.data
    }
}
