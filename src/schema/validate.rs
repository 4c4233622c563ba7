use tracing::warn;

use crate::error::IngestError;
use crate::record::{actual_column, target_column, RawRecord, PERIOD_COLUMN};

/// Check that the inferred entity set is fully backed by columns in the
/// data before any aggregation runs.
///
/// Only the first record's shape is inspected, deliberately: later rows
/// with missing cells are tolerated and default to 0 downstream. Checks
/// run in order: period column first, then every `Meta`/`Real` pair.
/// Column completeness is not fail-fast: every missing name is collected
/// so the caller gets one actionable diagnostic.
pub fn validate_schema(records: &[RawRecord], entities: &[String]) -> Result<(), IngestError> {
    let first = records.first().ok_or(IngestError::EmptyDataset)?;

    if !first.contains_column(PERIOD_COLUMN) {
        warn!(column = PERIOD_COLUMN, "period column missing from header row");
        return Err(IngestError::MissingPeriodColumn(PERIOD_COLUMN.to_string()));
    }

    let mut missing = Vec::new();
    for entity in entities {
        for column in [target_column(entity), actual_column(entity)] {
            if !first.contains_column(&column) {
                missing.push(column);
            }
        }
    }

    if !missing.is_empty() {
        warn!(missing = ?missing, "schema validation failed");
        return Err(IngestError::MissingColumns(missing));
    }

    Ok(())
}
