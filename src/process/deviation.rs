use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::process::numeric::coerce;
use crate::record::{actual_column, target_column, Cell, RawRecord, PERIOD_COLUMN};

/// Per-period deviation of every entity, wide-form, one per input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviationRecord {
    pub period: String,
    /// Entity → signed percentage deviation for this period. Unrounded;
    /// display formatting belongs to the consumer.
    pub deviations: BTreeMap<String, f64>,
}

/// Build the per-period deviation series straight from the wide rows, in
/// original record order.
///
/// The divide-by-zero guard here is per period: a period whose target
/// coerces to 0 reports 0 deviation regardless of its actual, even when
/// other periods of the same entity have positive targets.
pub fn deviation_series(records: &[RawRecord], entities: &[String]) -> Vec<DeviationRecord> {
    records
        .iter()
        .map(|record| {
            let deviations = entities
                .iter()
                .map(|entity| {
                    let target = coerce(record.get(&target_column(entity)));
                    let actual = coerce(record.get(&actual_column(entity)));
                    let pct = if target > 0.0 {
                        (actual - target) / target * 100.0
                    } else {
                        0.0
                    };
                    (entity.clone(), pct)
                })
                .collect();

            DeviationRecord {
                period: record
                    .get(PERIOD_COLUMN)
                    .map(Cell::as_label)
                    .unwrap_or_default(),
                deviations,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(label: &str, cells: &[(&str, f64)]) -> RawRecord {
        let mut record = RawRecord::new();
        record.push(PERIOD_COLUMN, Cell::Text(label.to_string()));
        for (name, value) in cells {
            record.push(*name, Cell::Number(*value));
        }
        record
    }

    #[test]
    fn one_deviation_record_per_input_row_in_order() {
        let records = vec![
            month("Jan", &[("Meta A", 100.0), ("Real A", 110.0)]),
            month("Feb", &[("Meta A", 100.0), ("Real A", 85.0)]),
        ];
        let series = deviation_series(&records, &["A".to_string()]);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].period, "Jan");
        assert_eq!(series[0].deviations["A"], 10.0);
        assert_eq!(series[1].period, "Feb");
        assert_eq!(series[1].deviations["A"], -15.0);
    }

    #[test]
    fn values_are_not_rounded() {
        let records = vec![month("Jan", &[("Meta A", 300.0), ("Real A", 310.0)])];
        let series = deviation_series(&records, &["A".to_string()]);
        let pct = series[0].deviations["A"];
        assert!((pct - 10.0 / 300.0 * 100.0).abs() < 1e-12);
        assert_ne!(pct, 3.33);
    }

    #[test]
    fn zero_target_periods_report_zero_independently() {
        // Jan has no target, Feb does; the guard applies per period.
        let records = vec![
            month("Jan", &[("Meta A", 0.0), ("Real A", 50.0)]),
            month("Feb", &[("Meta A", 100.0), ("Real A", 50.0)]),
        ];
        let series = deviation_series(&records, &["A".to_string()]);

        assert_eq!(series[0].deviations["A"], 0.0);
        assert_eq!(series[1].deviations["A"], -50.0);
    }

    #[test]
    fn every_entity_appears_in_every_period() {
        let records = vec![month("Jan", &[("Meta A", 10.0), ("Real A", 10.0)])];
        let entities = vec!["A".to_string(), "B".to_string()];
        let series = deviation_series(&records, &entities);

        // B has no columns at all; both its series coerce to 0.
        assert_eq!(series[0].deviations.len(), 2);
        assert_eq!(series[0].deviations["B"], 0.0);
    }
}
