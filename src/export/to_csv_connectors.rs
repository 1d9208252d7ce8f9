use crate::diagram::DiagramData;
use crate::errors::DiagramResult;
use csv::Writer;

pub fn render(diagram: &DiagramData) -> DiagramResult<String> {
    let mut wtr = Writer::from_writer(vec![]);

    // Write the header
    wtr.write_record(["id", "source", "target"])?;

    for connector in &diagram.connectors {
        wtr.write_record([
            connector.id.as_str(),
            connector.source_id.as_str(),
            connector.target_id.as_str(),
        ])?;
    }

    let data = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}
