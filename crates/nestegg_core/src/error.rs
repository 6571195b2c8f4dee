use std::fmt;

/// Errors raised while assembling the bootstrap population
#[derive(Debug, Clone, PartialEq)]
pub enum SamplerError {
    /// Row width or weight-vector length does not match the asset columns
    DimensionMismatch { expected: usize, found: usize },
    /// The historical series has no rows to draw from
    EmptySeries,
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplerError::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected} columns, found {found}")
            }
            SamplerError::EmptySeries => write!(f, "historical return series has no rows"),
        }
    }
}

impl std::error::Error for SamplerError {}

/// Out-of-range run parameters, rejected before any path is simulated
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroYears,
    NonPositiveInitialAssets(f64),
    NegativeSpending(f64),
    NegativeInflation(f64),
    WithdrawalRateOutOfRange(f64),
    ZeroSimulations,
    InvalidWeight { index: usize, weight: f64 },
    WeightSum(f64),
    NotFinite { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroYears => write!(f, "horizon must be at least one year"),
            ConfigError::NonPositiveInitialAssets(v) => {
                write!(f, "initial assets must be positive, got {v}")
            }
            ConfigError::NegativeSpending(v) => {
                write!(f, "annual spending cannot be negative, got {v}")
            }
            ConfigError::NegativeInflation(v) => {
                write!(f, "inflation rate cannot be negative, got {v}")
            }
            ConfigError::WithdrawalRateOutOfRange(v) => {
                write!(f, "withdrawal rate must be in (0, 1], got {v}")
            }
            ConfigError::ZeroSimulations => {
                write!(f, "ensemble size must be at least one simulation")
            }
            ConfigError::InvalidWeight { index, weight } => {
                write!(f, "weight at index {index} must be non-negative and finite, got {weight}")
            }
            ConfigError::WeightSum(sum) => {
                write!(f, "portfolio weights must sum to 1.0, got {sum}")
            }
            ConfigError::NotFinite { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Top-level error for an ensemble run
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    Config(ConfigError),
    Sampler(SamplerError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Config(e) => write!(f, "{e}"),
            SimulationError::Sampler(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Config(e) => Some(e),
            SimulationError::Sampler(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(err: ConfigError) -> Self {
        SimulationError::Config(err)
    }
}

impl From<SamplerError> for SimulationError {
    fn from(err: SamplerError) -> Self {
        SimulationError::Sampler(err)
    }
}
