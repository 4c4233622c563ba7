//! Core analytics for target-vs-actual product performance data.
//!
//! An external tabular parser hands this crate a batch of wide-form rows
//! (one per period, e.g. a month). Columns follow the `Meta <product>` /
//! `Real <product>` naming convention, so the set of tracked products is
//! discovered from the header row rather than declared anywhere. From a
//! validated batch the crate produces a [`Snapshot`]: normalized per-period
//! observations, annual per-product summaries, and a per-period deviation
//! series, all ready for a rendering layer to consume.

pub mod error;
pub mod ingest;
pub mod process;
pub mod record;
pub mod schema;

pub use error::IngestError;
pub use ingest::{ingest, Snapshot};
pub use process::{DeviationRecord, EntitySummary, PeriodRecord};
pub use record::{Cell, RawRecord};
