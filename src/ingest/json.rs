use anyhow::{Context, Result};

use crate::record::RawRecord;

/// Decode a JSON array of row objects into wide-form records.
///
/// This is the shape a sheet-to-JSON style parser produces: one object per
/// row, keys in header order, values as numbers, strings or nulls.
pub fn read_records(json: &str) -> Result<Vec<RawRecord>> {
    serde_json::from_str(json).context("decoding JSON row array")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ingest;
    use crate::record::Cell;

    #[test]
    fn json_rows_flow_through_the_pipeline() -> Result<()> {
        let rows = r#"[
            {"mes": "Jan", "Meta X": 100, "Real X": 110},
            {"mes": "Feb", "Meta X": 100, "Real X": 90}
        ]"#;

        let records = read_records(rows)?;
        assert_eq!(records[0].get("Real X"), Some(&Cell::Number(110.0)));

        let snapshot = ingest(&records)?;
        assert_eq!(snapshot.entities, vec!["X"]);
        assert_eq!(snapshot.summaries[0].deviation_pct, 0.0);
        Ok(())
    }

    #[test]
    fn malformed_json_is_a_boundary_error() {
        assert!(read_records("not json").is_err());
    }
}
