use serde::{Deserialize, Serialize};

use crate::error::SamplerError;

/// Aligned table of periodic fractional returns
///
/// Rows are time periods (months), columns are assets in the order of
/// `assets`. The loader is responsible for cleaning and date alignment;
/// construction only enforces that every row has one entry per asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalReturnSeries {
    assets: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl HistoricalReturnSeries {
    /// Wrap a return table, rejecting ragged rows.
    pub fn new(assets: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, SamplerError> {
        let columns = assets.len();
        for row in &rows {
            if row.len() != columns {
                return Err(SamplerError::DimensionMismatch {
                    expected: columns,
                    found: row.len(),
                });
            }
        }
        Ok(Self { assets, rows })
    }

    /// Asset names, in column order
    #[must_use]
    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    /// Number of asset columns
    #[must_use]
    pub fn columns(&self) -> usize {
        self.assets.len()
    }

    /// Number of time periods
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}
