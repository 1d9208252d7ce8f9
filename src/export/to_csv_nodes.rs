use crate::diagram::DiagramData;
use crate::errors::DiagramResult;
use csv::Writer;

pub fn render(diagram: &DiagramData) -> DiagramResult<String> {
    let mut wtr = Writer::from_writer(vec![]);

    // Write the header
    wtr.write_record(["id", "path", "is_leaf", "title"])?;

    for node in &diagram.nodes {
        wtr.write_record([
            node.id.as_str(),
            node.data.path.as_str(),
            if node.is_leaf() { "true" } else { "false" },
            node.data.title.as_str(),
        ])?;
    }

    let data = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdSource;
    use crate::parser::process_data_with;
    use serde_json::json;

    #[test]
    fn test_csv_nodes() {
        let diagram = process_data_with(&json!({"a": 1, "b": 2}), &mut SequentialIdSource::new());
        let res = render(&diagram).unwrap();
        assert_eq!(res, "id,path,is_leaf,title\nroot-0,Root,true,\"a: 1\nb: 2\"\n");
    }
}
