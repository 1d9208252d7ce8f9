//! Node and connector emission
//!
//! Walks a JSON document and appends nodes and connectors to a
//! [`DiagramBuilder`]. The walk runs on an explicit task stack so that the
//! nesting depth of the input is bounded by memory instead of the thread
//! stack. Tasks are pushed in reverse so they pop in document order, which
//! keeps the output identical to a depth-first pre-order recursion.

use serde_json::Value;
use std::borrow::Cow;
use tracing::{debug, trace};

use crate::diagram::{Annotation, DiagramBuilder, DiagramNode};
use crate::ids::{normalize_identifier, IdSource};
use crate::root::RootResolution;
use crate::shape::{self, KeyCategories};

enum Task<'a> {
    /// Emit the children of `value` below `parent_id`.
    Visit {
        value: &'a Value,
        parent_id: String,
        path: String,
    },
    /// Emit one array element below the array's owner node.
    ArrayItem {
        item: &'a Value,
        index: usize,
        parent_id: String,
        path: String,
    },
    /// Emit a container node, connect it, then visit its value.
    Container {
        parent_id: Option<String>,
        node: DiagramNode,
        value: &'a Value,
    },
}

pub struct Emitter<'b> {
    builder: &'b mut DiagramBuilder,
    ids: &'b mut dyn IdSource,
}

impl<'b> Emitter<'b> {
    pub fn new(builder: &'b mut DiagramBuilder, ids: &'b mut dyn IdSource) -> Self {
        Self { builder, ids }
    }

    /// Emit the anchor leaf for top level primitives, if any. Returns its id.
    pub fn emit_root_anchor(
        &mut self,
        root: &RootResolution<'_>,
        categories: &KeyCategories<'_>,
    ) -> Option<String> {
        if categories.primitive.is_empty() {
            return None;
        }

        let id = format!("{}-{}", root.anchor_label(), self.ids.next_suffix());
        let annotations = categories
            .primitive
            .iter()
            .flat_map(|(key, value)| {
                [
                    Annotation::with_id(format!("Key_{}", key), format!("{}:", key)),
                    Annotation::with_id(format!("Value_{}", key), shape::annotation_value(value)),
                ]
            })
            .collect();
        let content = joined_pairs(&categories.primitive);

        debug!("Emitting root anchor {}", id);
        self.builder.add_node(DiagramNode::leaf(
            id.clone(),
            annotations,
            "Root".to_string(),
            content,
        ));
        Some(id)
    }

    /// Emit one container per non-empty nested top level field and everything
    /// below it. Containers are connected to `anchor_id` when it exists.
    pub fn emit_root_nested(&mut self, categories: &KeyCategories<'_>, anchor_id: Option<&str>) {
        let mut stack = Vec::new();
        for (key, value) in categories.nested.iter().rev() {
            if shape::is_empty_container(value) {
                continue;
            }
            let count = shape::child_count(value);
            let node = DiagramNode::container(
                normalize_identifier(key),
                key,
                count,
                format!("Root.{}", key),
            )
            .with_display_content(vec![key.to_string()], count);
            stack.push(Task::Container {
                parent_id: anchor_id.map(str::to_string),
                node,
                value: *value,
            });
        }
        self.run(stack);
    }

    /// Emit everything below `value`, hanging it off `parent_id`.
    pub fn emit_nested(&mut self, value: &Value, parent_id: &str, path: &str) {
        self.run(vec![Task::Visit {
            value,
            parent_id: parent_id.to_string(),
            path: path.to_string(),
        }]);
    }

    fn run<'a>(&mut self, mut stack: Vec<Task<'a>>) {
        while let Some(task) = stack.pop() {
            match task {
                Task::Visit {
                    value,
                    parent_id,
                    path,
                } => match value {
                    Value::Array(items) => {
                        for (index, item) in items.iter().enumerate().rev() {
                            if item.is_null() {
                                continue;
                            }
                            stack.push(Task::ArrayItem {
                                item,
                                index,
                                parent_id: parent_id.clone(),
                                path: path.clone(),
                            });
                        }
                    }
                    Value::Object(_) => self.visit_object(value, &parent_id, &path, &mut stack),
                    _ => {}
                },
                Task::ArrayItem {
                    item,
                    index,
                    parent_id,
                    path,
                } => self.visit_array_item(item, index, &parent_id, &path, &mut stack),
                Task::Container {
                    parent_id,
                    node,
                    value,
                } => {
                    let node_id = node.id.clone();
                    let path = node.data.path.clone();
                    trace!("Emitting container {} at {}", node_id, path);
                    match parent_id {
                        Some(parent_id) => self.builder.add_child(&parent_id, node),
                        None => self.builder.add_node(node),
                    }
                    stack.push(Task::Visit {
                        value,
                        parent_id: node_id,
                        path,
                    });
                }
            }
        }
    }

    fn visit_object<'a>(
        &mut self,
        value: &'a Value,
        parent_id: &str,
        path: &str,
        stack: &mut Vec<Task<'a>>,
    ) {
        let categories = shape::categorize_keys(value);

        if !categories.primitive.is_empty() {
            let id = format!("{}-leaf-{}", parent_id, self.ids.next_suffix());
            let annotations = field_annotations(&id, &categories.primitive);
            let content = joined_pairs(&categories.primitive);
            self.builder.add_child(
                parent_id,
                DiagramNode::leaf(id, annotations, format!("{}.leaf", path), content),
            );
        }

        for (key, field) in categories.non_empty_nested().into_iter().rev() {
            stack.push(nested_container(parent_id, &key, field, format!("{}.{}", path, key)));
        }
    }

    fn visit_array_item<'a>(
        &mut self,
        item: &'a Value,
        index: usize,
        parent_id: &str,
        path: &str,
        stack: &mut Vec<Task<'a>>,
    ) {
        let base_id = normalize_identifier(&format!("{}-{}", parent_id, index));
        let item_path = format!("{}[{}]", path, index);

        if !item.is_object() {
            let content = shape::display_value(item);
            let id = format!("{}-{}", base_id, self.ids.next_suffix());
            self.builder.add_child(
                parent_id,
                DiagramNode::leaf(id, vec![Annotation::label(content.clone())], item_path, content),
            );
            return;
        }

        let categories = shape::categorize_keys(item);
        let nested = categories.non_empty_nested();

        if !categories.primitive.is_empty() || nested.len() > 1 {
            let node = if categories.primitive.is_empty() {
                DiagramNode::array_item(base_id, index, item_path.clone())
            } else {
                let id = format!("{}-{}", base_id, self.ids.next_suffix());
                let annotations = field_annotations(&id, &categories.primitive);
                let content = joined_pairs(&categories.primitive);
                DiagramNode::leaf(id, annotations, item_path.clone(), content)
            };
            let item_id = node.id.clone();
            self.builder.add_child(parent_id, node);

            for (key, field) in nested.into_iter().rev() {
                stack.push(nested_container(
                    &item_id,
                    &key,
                    field,
                    format!("{}.{}", item_path, key),
                ));
            }
        } else if let Some((key, field)) = nested.into_iter().next() {
            // single nested field: hang it directly off the array's owner
            let node = DiagramNode::container(
                normalize_identifier(&format!("{}-{}", base_id, key)),
                &key,
                shape::child_count(field),
                format!("{}.{}", item_path, key),
            );
            stack.push(Task::Container {
                parent_id: Some(parent_id.to_string()),
                node,
                value: field,
            });
        }
    }
}

fn nested_container<'a>(parent_id: &str, key: &str, value: &'a Value, path: String) -> Task<'a> {
    let node = DiagramNode::container(
        normalize_identifier(&format!("{}-{}", parent_id, key)),
        key,
        shape::child_count(value),
        path,
    );
    Task::Container {
        parent_id: Some(parent_id.to_string()),
        node,
        value,
    }
}

fn field_annotations(node_id: &str, fields: &[(Cow<'_, str>, &Value)]) -> Vec<Annotation> {
    fields
        .iter()
        .flat_map(|(key, value)| {
            [
                Annotation::with_id(format!("Key_{}_{}", node_id, key), format!("{}:", key)),
                Annotation::with_id(
                    format!("Value_{}_{}", node_id, key),
                    shape::annotation_value(value),
                ),
            ]
        })
        .collect()
}

fn joined_pairs(fields: &[(Cow<'_, str>, &Value)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}: {}", key, shape::display_value(value)))
        .collect::<Vec<_>>()
        .join("\n")
}
