use common::types::iso_millis;
use common::{PriceRow, SmaRow};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::indicators::calculate_sma;

/// Input rows plus one derived moving average column
///
/// Serializes as an array of `{"date", "close", <column>}` objects in row
/// order; missing averages are written as `null`.
#[derive(Debug, Clone)]
pub struct AugmentedTable {
    column: String,
    rows: Vec<SmaRow>,
}

impl AugmentedTable {
    pub fn build(rows: &[PriceRow], period: usize) -> Self {
        let closes: Vec<f64> = rows.iter().map(|r| r.close).collect();
        let sma = calculate_sma(&closes, period);

        Self {
            column: format!("SMA_{}", period),
            rows: rows
                .iter()
                .zip(sma)
                .map(|(row, value)| SmaRow::from_price(row, value))
                .collect(),
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn rows(&self) -> &[SmaRow] {
        &self.rows
    }

    pub fn closes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.close).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

struct RowRecord<'a> {
    column: &'a str,
    row: &'a SmaRow,
}

impl Serialize for RowRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("date", &iso_millis::format(&self.row.date))?;
        map.serialize_entry("close", &self.row.close)?;
        map.serialize_entry(self.column, &self.row.sma)?;
        map.end()
    }
}

impl Serialize for AugmentedTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&RowRecord {
                column: &self.column,
                row,
            })?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataSource, StaticDataSource};

    fn sample_table() -> AugmentedTable {
        let rows = StaticDataSource::sample().load().unwrap();
        AugmentedTable::build(&rows, 5)
    }

    #[test]
    fn test_build_keeps_length_and_order() {
        let rows = StaticDataSource::sample().load().unwrap();
        let table = AugmentedTable::build(&rows, 5);

        assert_eq!(table.len(), rows.len());
        assert_eq!(table.column(), "SMA_5");
        for (out, input) in table.rows().iter().zip(&rows) {
            assert_eq!(out.date, input.date);
            assert_eq!(out.close, input.close);
        }
    }

    #[test]
    fn test_serialized_key_order_and_nulls() {
        let json = serde_json::to_string(&sample_table()).unwrap();

        assert!(json.starts_with(
            r#"[{"date":"2022-01-01T00:00:00.000Z","close":150.0,"SMA_5":null},"#
        ));
        assert!(json.ends_with(
            r#"{"date":"2022-01-10T00:00:00.000Z","close":163.5,"SMA_5":160.5}]"#
        ));
    }

    #[test]
    fn test_value_preserves_key_order() {
        let value = serde_json::to_value(sample_table()).unwrap();
        let first = value[0].as_object().unwrap();
        let keys: Vec<&str> = first.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["date", "close", "SMA_5"]);
    }

    #[test]
    fn test_column_follows_period() {
        let rows = StaticDataSource::sample().load().unwrap();
        let table = AugmentedTable::build(&rows, 2);
        let value = serde_json::to_value(&table).unwrap();

        assert!(value[0]["SMA_2"].is_null());
        assert_eq!(value[1]["SMA_2"], 151.0);
        assert!(value[1].get("SMA_5").is_none());
    }
}
