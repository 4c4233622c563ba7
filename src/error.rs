use thiserror::Error;

/// Everything that can reject a single ingestion attempt.
///
/// All variants are scoped to one batch of records; none are process-fatal.
/// Retry is simply re-ingestion of corrected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// Zero records were supplied.
    #[error("dataset contains no records")]
    EmptyDataset,

    /// No column matched the `Meta <product>` / `Real <product>` convention.
    #[error("no product columns detected; expected headers like `Meta <product>` and `Real <product>`")]
    NoProductsDetected,

    /// The designated period column is absent from the first record.
    #[error("period column `{0}` is missing from the header row")]
    MissingPeriodColumn(String),

    /// One or more expected `Meta <product>` / `Real <product>` columns are
    /// absent from the first record. Carries every missing name, not just
    /// the first found.
    #[error("missing expected columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}
