use tracing::debug;

use crate::diagram::{
    Annotation, DiagramBuilder, DiagramNode, NodeData, NodeInfo, ARTIFICIAL_ROOT_SIZE,
};
use crate::root::MAIN_ROOT_ID;

/// Whether the emitted forest needs a synthetic root.
///
/// Only applies when no anchor leaf exists at the top level; in that case a
/// transparent wrapper root always triggers the check, otherwise it runs only
/// when more than one root is already present.
pub fn should_consolidate(builder: &DiagramBuilder, skip_empty_root: bool, anchor_created: bool) -> bool {
    !anchor_created && (skip_empty_root || builder.data().has_multiple_roots())
}

/// Hang every root of the forest off one invisible node. Returns the number of
/// roots that were connected, zero when the graph already has a single root.
pub fn consolidate_roots(builder: &mut DiagramBuilder) -> usize {
    let root_ids = builder.data().root_ids();
    if root_ids.len() <= 1 {
        return 0;
    }

    debug!("Consolidating {} roots under {}", root_ids.len(), MAIN_ROOT_ID);
    builder.add_node(artificial_root());
    for root_id in &root_ids {
        builder.connect(MAIN_ROOT_ID, root_id);
    }
    root_ids.len()
}

fn artificial_root() -> DiagramNode {
    DiagramNode {
        id: MAIN_ROOT_ID.to_string(),
        width: ARTIFICIAL_ROOT_SIZE,
        height: ARTIFICIAL_ROOT_SIZE,
        annotations: vec![Annotation::label("")],
        additional_info: NodeInfo {
            is_leaf: false,
            merged_content: None,
        },
        data: NodeData {
            path: "MainRoot".to_string(),
            title: "Main Artificial Root".to_string(),
            actual_data: String::new(),
            display_content: None,
        },
    }
}
