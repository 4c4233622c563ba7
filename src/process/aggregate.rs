use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::process::numeric::round2;
use crate::process::transform::PeriodRecord;

/// Annual rollup for one entity across every period in the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub entity: String,
    pub target_total: f64,
    pub actual_total: f64,
    /// Signed percentage of the year's actual over/under the year's
    /// target, rounded to 2 decimals. 0 when the pooled target is not
    /// positive, never NaN or infinite.
    pub deviation_pct: f64,
    /// Periods where actual met or beat target.
    pub periods_met: usize,
    pub periods_total: usize,
}

/// Roll long-form observations up into one summary per entity, emitted in
/// the given (sorted) entity order.
pub fn summarize_entities(records: &[PeriodRecord], entities: &[String]) -> Vec<EntitySummary> {
    let mut grouped: HashMap<&str, Vec<&PeriodRecord>> = HashMap::new();
    for record in records {
        grouped.entry(record.entity.as_str()).or_default().push(record);
    }

    entities
        .iter()
        .map(|entity| {
            let rows: &[&PeriodRecord] = grouped
                .get(entity.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            let target_total = round2(rows.iter().map(|r| r.target).sum());
            let actual_total = round2(rows.iter().map(|r| r.actual).sum());

            // Guarded on the pooled target; per-period zero targets are a
            // separate concern handled by the deviation series.
            let deviation_pct = if target_total > 0.0 {
                round2((actual_total - target_total) / target_total * 100.0)
            } else {
                0.0
            };

            EntitySummary {
                entity: entity.clone(),
                target_total,
                actual_total,
                deviation_pct,
                periods_met: rows.iter().filter(|r| r.actual >= r.target).count(),
                periods_total: rows.len(),
            }
        })
        .collect()
}
