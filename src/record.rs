use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Column carrying the period label in each record.
pub const PERIOD_COLUMN: &str = "mes";

/// Column-name prefix for an entity's target series.
pub const TARGET_PREFIX: &str = "Meta ";

/// Column-name prefix for an entity's actual series.
pub const ACTUAL_PREFIX: &str = "Real ";

/// Name of the target column for `entity`.
pub fn target_column(entity: &str) -> String {
    format!("{}{}", TARGET_PREFIX, entity)
}

/// Name of the actual column for `entity`.
pub fn actual_column(entity: &str) -> String {
    format!("{}{}", ACTUAL_PREFIX, entity)
}

/// A raw cell value as delivered by the upstream tabular parser.
///
/// Serializes untagged, so a JSON row like `{"mes": "Jan", "Meta A": 100,
/// "nota": null}` maps straight onto cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Render the cell as a display label (used for the period column).
    /// Whole numbers drop the fractional part; an empty cell renders as "".
    pub fn as_label(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Cell::Number(n) => n.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

/// One wide-form row: an ordered mapping from column name to raw cell.
///
/// Column order is whatever the upstream parser saw in the header row; the
/// first record's key set defines the nominal schema for the whole batch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRecord {
    columns: Vec<(String, Cell)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        RawRecord {
            columns: Vec::with_capacity(capacity),
        }
    }

    /// Append a column. Duplicate names keep the first occurrence visible
    /// to `get`, matching first-wins lookup order.
    pub fn push(&mut self, name: impl Into<String>, cell: Cell) {
        self.columns.push((name.into(), cell));
    }

    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.columns
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, cell)| cell)
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(col, _)| col == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(col, _)| col.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<(String, Cell)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (String, Cell)>>(iter: I) -> Self {
        RawRecord {
            columns: iter.into_iter().collect(),
        }
    }
}

// Hand-written serde: a RawRecord is a JSON object whose key order matters,
// so it cannot round-trip through a sorted or hashed map type.

impl Serialize for RawRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, cell) in &self.columns {
            map.serialize_entry(name, cell)?;
        }
        map.end()
    }
}

struct RawRecordVisitor;

impl<'de> Visitor<'de> for RawRecordVisitor {
    type Value = RawRecord;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of column name to cell value")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RawRecord, A::Error> {
        let mut record = RawRecord::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, cell)) = access.next_entry::<String, Cell>()? {
            record.push(name, cell);
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for RawRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<RawRecord, D::Error> {
        deserializer.deserialize_map(RawRecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn json_row_decodes_with_column_order_preserved() -> Result<()> {
        let record: RawRecord =
            serde_json::from_str(r#"{"mes":"Jan","Meta A":100,"Real A":"1,200","nota":null}"#)?;

        let names: Vec<&str> = record.column_names().collect();
        assert_eq!(names, vec!["mes", "Meta A", "Real A", "nota"]);
        assert_eq!(record.get("mes"), Some(&Cell::Text("Jan".into())));
        assert_eq!(record.get("Meta A"), Some(&Cell::Number(100.0)));
        assert_eq!(record.get("Real A"), Some(&Cell::Text("1,200".into())));
        assert_eq!(record.get("nota"), Some(&Cell::Empty));
        assert_eq!(record.get("no such column"), None);
        Ok(())
    }

    #[test]
    fn serialization_round_trips() -> Result<()> {
        let mut record = RawRecord::new();
        record.push("mes", Cell::Text("Feb".into()));
        record.push("Meta A", Cell::Number(2.5));
        record.push("Real A", Cell::Empty);

        let json = serde_json::to_string(&record)?;
        assert_eq!(json, r#"{"mes":"Feb","Meta A":2.5,"Real A":null}"#);

        let back: RawRecord = serde_json::from_str(&json)?;
        assert_eq!(back, record);
        Ok(())
    }

    #[test]
    fn labels_render_numbers_and_empties() {
        assert_eq!(Cell::Text("Ene".into()).as_label(), "Ene");
        assert_eq!(Cell::Number(3.0).as_label(), "3");
        assert_eq!(Cell::Number(3.25).as_label(), "3.25");
        assert_eq!(Cell::Empty.as_label(), "");
    }

    #[test]
    fn column_name_helpers() {
        assert_eq!(target_column("Alpha"), "Meta Alpha");
        assert_eq!(actual_column("Alpha"), "Real Alpha");
    }
}
