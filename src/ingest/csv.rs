use std::io::Read;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::record::{Cell, RawRecord};

/// Build wide-form records from already-decoded delimited text.
///
/// Boundary glue for callers whose tabular parser emits CSV rather than
/// row objects: the header row becomes the column set of every record,
/// purely-numeric fields decode as numbers, blank fields as empty cells,
/// and everything else stays text for the coercion pass to deal with.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("reading CSV header row")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let row = result.with_context(|| format!("decoding CSV record {}", idx + 1))?;

        let mut record = RawRecord::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            record.push(header.clone(), decode_field(row.get(i).unwrap_or("")));
        }
        records.push(record);
    }

    Ok(records)
}

fn decode_field(field: &str) -> Cell {
    if field.is_empty() {
        return Cell::Empty;
    }
    match field.parse::<f64>() {
        Ok(n) if n.is_finite() => Cell::Number(n),
        _ => Cell::Text(field.to_string()),
    }
}
