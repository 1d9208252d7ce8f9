use crate::diagram::DiagramData;
use crate::errors::DiagramResult;

pub fn render(diagram: &DiagramData) -> DiagramResult<String> {
    let handlebars = crate::common::get_handlebars();
    let context = super::renderer::create_standard_context(diagram);
    let res = handlebars.render_template(&get_template(), &context)?;
    Ok(res)
}

pub fn get_template() -> String {
    let template = r##"
flowchart TB
  {{#each nodes as |node|}}
    {{#if node.is_leaf}}
    {{node.key}}["{{{mermaid_label node.label}}}"]
    {{else}}
    {{node.key}}("{{{mermaid_label node.label}}}")
    {{/if}}
  {{/each}}
  {{#each connectors as |connector|}}
    {{#if connector.source_key}}{{#if connector.target_key}}
    {{connector.source_key}} --> {{connector.target_key}}
    {{/if}}{{/if}}
  {{/each}}
"##;

    template.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdSource;
    use crate::parser::process_data_with;
    use serde_json::json;

    #[test]
    fn mermaid_template_can_render() {
        let diagram = process_data_with(
            &json!({"": {"left": [1], "right": {"k": "v"}}}),
            &mut SequentialIdSource::new(),
        );
        let ids: Vec<&str> = diagram.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["left", "left-0-0", "right", "right-leaf-1", "main-root"]);
        let res = render(&diagram).unwrap();

        assert!(res.contains("flowchart TB"));
        assert!(res.contains(r#"n0("left {1}")"#));
        assert!(res.contains(r#"n1["1"]"#));
        assert!(res.contains(r#"n3["k: v"]"#));
        assert!(res.contains(r#"n4(" ")"#));
        assert!(res.contains("n4 --> n0"));
        assert!(res.contains("n4 --> n2"));
    }

    #[test]
    fn mermaid_keeps_nodes_with_similar_ids_apart() {
        let diagram = process_data_with(
            &json!({"first name": {"a": 1}, "first.name": {"b": 2}}),
            &mut SequentialIdSource::new(),
        );
        let ids: Vec<&str> = diagram.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["first name", "first name-leaf-0", "first.name", "first.name-leaf-1", "main-root"]
        );
        let res = render(&diagram).unwrap();

        assert!(res.contains(r#"n0("first name {1}")"#));
        assert!(res.contains(r#"n2("first.name {1}")"#));
        assert!(res.contains("n0 --> n1"));
        assert!(res.contains("n2 --> n3"));
        assert!(res.contains("n4 --> n0"));
        assert!(res.contains("n4 --> n2"));
    }
}
