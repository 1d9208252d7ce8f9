use crate::diagram::DiagramData;
use crate::errors::DiagramResult;

pub fn render(diagram: &DiagramData, pretty: bool) -> DiagramResult<String> {
    let res = if pretty {
        serde_json::to_string_pretty(diagram)?
    } else {
        serde_json::to_string(diagram)?
    };
    Ok(res)
}
