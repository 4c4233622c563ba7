use serde::{Deserialize, Serialize};

use crate::process::numeric::coerce;
use crate::record::{actual_column, target_column, Cell, RawRecord, PERIOD_COLUMN};

/// One long-form observation: a single entity in a single period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    pub entity: String,
    pub period: String,
    pub target: f64,
    pub actual: f64,
}

/// Flatten wide rows into one observation per (record × entity) pair.
///
/// Output length is exactly `records.len() * entities.len()`, ordered with
/// records as the outer loop (original order preserved) and the sorted
/// entity set as the inner loop, so repeated runs produce byte-identical
/// output. Cells missing from an individual row coerce to 0.
pub fn transform_records(records: &[RawRecord], entities: &[String]) -> Vec<PeriodRecord> {
    let mut out = Vec::with_capacity(records.len() * entities.len());

    for record in records {
        let period = record
            .get(PERIOD_COLUMN)
            .map(Cell::as_label)
            .unwrap_or_default();

        for entity in entities {
            out.push(PeriodRecord {
                entity: entity.clone(),
                period: period.clone(),
                target: coerce(record.get(&target_column(entity))),
                actual: coerce(record.get(&actual_column(entity))),
            });
        }
    }

    out
}
