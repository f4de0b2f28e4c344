use common::{PriceRow, Result};
use tracing::debug;

use super::{parse_date, DataSource};

const SAMPLE_ROWS: [(&str, f64); 10] = [
    ("2022-01-01", 150.0),
    ("2022-01-02", 152.0),
    ("2022-01-03", 153.0),
    ("2022-01-04", 154.5),
    ("2022-01-05", 156.0),
    ("2022-01-06", 157.5),
    ("2022-01-07", 159.0),
    ("2022-01-08", 160.5),
    ("2022-01-09", 162.0),
    ("2022-01-10", 163.5),
];

/// In-memory rows kept as raw literals and parsed on every load
#[derive(Debug, Clone)]
pub struct StaticDataSource {
    records: Vec<(String, f64)>,
}

impl StaticDataSource {
    pub fn new<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            records: records
                .into_iter()
                .map(|(date, close)| (date.into(), close))
                .collect(),
        }
    }

    /// The ten-day sample series served by the handler
    pub fn sample() -> Self {
        Self::new(SAMPLE_ROWS)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for StaticDataSource {
    fn default() -> Self {
        Self::sample()
    }
}

impl DataSource for StaticDataSource {
    fn load(&self) -> Result<Vec<PriceRow>> {
        let rows = self
            .records
            .iter()
            .map(|(date, close)| Ok(PriceRow::new(parse_date(date)?, *close)))
            .collect::<Result<Vec<_>>>()?;

        debug!(rows = rows.len(), "loaded static rows");
        Ok(rows)
    }
}
