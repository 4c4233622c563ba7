pub mod aggregate;
pub mod deviation;
pub mod numeric;
pub mod transform;

pub use aggregate::{summarize_entities, EntitySummary};
pub use deviation::{deviation_series, DeviationRecord};
pub use numeric::{coerce, round2};
pub use transform::{transform_records, PeriodRecord};
