pub mod csv;
pub mod json;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::IngestError;
use crate::process::{
    deviation_series, summarize_entities, transform_records, DeviationRecord, EntitySummary,
    PeriodRecord,
};
use crate::record::RawRecord;
use crate::schema::{infer_entities, validate_schema};

/// Everything derived from one successful ingestion, handed to the
/// consumer as a whole. A later ingestion builds a fresh snapshot; it
/// never mutates one already held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Inferred entity set, sorted, fixed for the life of the snapshot.
    pub entities: Vec<String>,
    /// Long-form observations, records outer × entities inner.
    pub period_records: Vec<PeriodRecord>,
    /// Annual rollups, one per entity, in entity order.
    pub summaries: Vec<EntitySummary>,
    /// Per-period deviations, one per input record, in input order.
    pub deviation_series: Vec<DeviationRecord>,
}

/// Run the full pipeline over one batch of wide-form records.
///
/// Infers the entity set from the header row, gates on schema validation,
/// then derives all three analytical views. On any failure nothing partial
/// is produced; the caller gets a single structured [`IngestError`]
/// describing everything wrong with the batch.
#[tracing::instrument(level = "info", skip(records), fields(records = records.len()))]
pub fn ingest(records: &[RawRecord]) -> Result<Snapshot, IngestError> {
    let entities = infer_entities(records)?;
    if entities.is_empty() {
        warn!("no columns matched the Meta/Real naming convention");
        return Err(IngestError::NoProductsDetected);
    }

    validate_schema(records, &entities)?;

    let period_records = transform_records(records, &entities);
    let summaries = summarize_entities(&period_records, &entities);
    let deviation_series = deviation_series(records, &entities);

    info!(
        entities = entities.len(),
        observations = period_records.len(),
        "ingestion complete"
    );

    Ok(Snapshot {
        entities,
        period_records,
        summaries,
        deviation_series,
    })
}
