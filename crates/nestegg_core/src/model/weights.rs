use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tolerance for the weight-sum check
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Portfolio allocation, one weight per asset column
///
/// Weights are non-negative and sum to 1.0 within [`WEIGHT_SUM_TOLERANCE`].
/// Validated once at construction and immutable for the run. Whether the
/// length matches a particular return table is checked when the sampler is
/// built, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioWeights(Vec<f64>);

impl PortfolioWeights {
    /// Validate and wrap an allocation vector.
    pub fn new(weights: Vec<f64>) -> Result<Self, ConfigError> {
        for (index, &weight) in weights.iter().enumerate() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidWeight { index, weight });
            }
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum(sum));
        }
        Ok(Self(weights))
    }

    /// Number of asset columns this allocation spans
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Weighted sum of one row of per-asset returns
    pub(crate) fn combine(&self, row: &[f64]) -> f64 {
        self.0.iter().zip(row).map(|(w, r)| w * r).sum()
    }
}
