use std::collections::BTreeSet;

use tracing::debug;

use crate::error::IngestError;
use crate::record::{RawRecord, ACTUAL_PREFIX, TARGET_PREFIX};

/// Discover the tracked entity set from the column-naming convention.
///
/// Only the first record's keys are inspected; the schema is assumed
/// uniform across the batch. Every column named `Meta <entity>` or
/// `Real <entity>` contributes its suffix, and the union is returned
/// deduplicated and sorted lexicographically so every downstream pass
/// sees the same deterministic order.
///
/// An empty result is not an error here; the pipeline decides whether a
/// product-free schema is acceptable.
pub fn infer_entities(records: &[RawRecord]) -> Result<Vec<String>, IngestError> {
    let first = records.first().ok_or(IngestError::EmptyDataset)?;

    let mut found: BTreeSet<String> = BTreeSet::new();
    for name in first.column_names() {
        let suffix = name
            .strip_prefix(TARGET_PREFIX)
            .or_else(|| name.strip_prefix(ACTUAL_PREFIX));
        if let Some(entity) = suffix {
            found.insert(entity.to_string());
        }
    }

    debug!(
        entities = found.len(),
        columns = first.len(),
        "inferred entity set from header row"
    );

    Ok(found.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Cell;

    fn record(names: &[&str]) -> RawRecord {
        names
            .iter()
            .map(|n| (n.to_string(), Cell::Number(1.0)))
            .collect()
    }

    #[test]
    fn discovers_sorted_deduplicated_entities() {
        let records = vec![record(&["mes", "Real B", "Meta B", "Meta A", "Real A"])];
        let entities = infer_entities(&records).unwrap();
        assert_eq!(entities, vec!["A", "B"]);
    }

    #[test]
    fn only_first_record_defines_the_schema() {
        let records = vec![
            record(&["mes", "Meta A", "Real A"]),
            record(&["mes", "Meta Z", "Real Z"]),
        ];
        let entities = infer_entities(&records).unwrap();
        assert_eq!(entities, vec!["A"]);
    }

    #[test]
    fn no_matching_columns_yields_empty_set() {
        let records = vec![record(&["mes", "ventas", "Metadata X"])];
        let entities = infer_entities(&records).unwrap();
        assert!(entities.is_empty());
    }

    #[test]
    fn empty_batch_is_rejected() {
        assert_eq!(infer_entities(&[]), Err(IngestError::EmptyDataset));
    }
}
