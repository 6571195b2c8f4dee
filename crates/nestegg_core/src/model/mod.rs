//! Value types shared by the sampler and the engine

mod history;
mod results;
mod weights;

pub use history::HistoricalReturnSeries;
pub use results::{AssetPath, SimulationOutcome, SimulationSummary, StrategyResult};
pub use weights::{PortfolioWeights, WEIGHT_SUM_TOLERANCE};
