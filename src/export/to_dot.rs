use crate::common::css_color_to_hex;
use crate::diagram::DiagramData;
use crate::errors::DiagramResult;
use crate::theme::ThemeSettings;

pub fn render(diagram: &DiagramData, theme: &ThemeSettings) -> DiagramResult<String> {
    let handlebars = crate::common::get_handlebars();

    let mut context = super::renderer::create_standard_context(diagram);
    context["colors"] = serde_json::json!({
        "background": css_color_to_hex(&theme.background_color),
        "fill": css_color_to_hex(&theme.node_fill_color),
        "stroke": css_color_to_hex(&theme.node_stroke_color),
        "text": css_color_to_hex(&theme.text_value_color),
        "key": css_color_to_hex(&theme.text_key_color),
        "connector": css_color_to_hex(&theme.connector_stroke_color),
    });

    let res = handlebars.render_template(&get_template(), &context)?;
    Ok(res)
}

pub fn get_template() -> String {
    let template = r##"
digraph diagram {
    rankdir="TB";
    bgcolor="{{colors.background}}";
    node [ shape="box" style="filled" fontname="Lato" fillcolor="{{colors.fill}}" color="{{colors.stroke}}" fontcolor="{{colors.text}}" ]
    edge [ color="{{colors.connector}}" arrowhead="none" ]

  {{#each nodes as |node|}}
    {{#if node.is_leaf}}
    "{{{dot_escape node.id}}}" [label="{{{dot_escape node.label}}}"];
    {{else}}
    "{{{dot_escape node.id}}}" [label="{{{dot_escape node.label}}}" style="filled, rounded" fontcolor="{{@root.colors.key}}"];
    {{/if}}
  {{/each}}

  {{#each connectors as |connector|}}
    "{{{dot_escape connector.source}}}" -> "{{{dot_escape connector.target}}}";
  {{/each}}
}
"##;

    template.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdSource;
    use crate::parser::process_data_with;
    use crate::theme::ThemeMode;
    use serde_json::json;

    #[test]
    fn graphviz_template_can_render() {
        let diagram = process_data_with(
            &json!({"person": {"name": "Ann \"A\"", "pets": ["cat"]}}),
            &mut SequentialIdSource::new(),
        );
        let res = render(&diagram, &ThemeSettings::for_mode(ThemeMode::Dark)).unwrap();

        assert!(res.contains("digraph diagram {"));
        assert!(res.contains("bgcolor=\"#1e1e1e\";"));
        assert!(res.contains("fillcolor=\"#292929\""));
        assert!(res.contains(r#""person" [label="person {2}" style="filled, rounded""#));
        assert!(res.contains(r#""person-leaf-0" [label="name: Ann \"A\""];"#));
        assert!(res.contains(r#""person" -> "person-pets";"#));
        assert!(res.contains(r#""person-pets" -> "person-pets-0-1";"#));
    }
}
