//! Plain-text report for a finished run
//!
//! Uses unicode block characters for the final-asset histograms and one
//! sparkline row per sampled trajectory, so the full picture fits in a
//! terminal without a plotting dependency.

use std::fmt::Write as _;
use std::path::Path;

use color_eyre::eyre::eyre;
use serde_json::json;

use nestegg_core::{
    HistoricalReturnSeries, PortfolioWeights, SimulationConfig, SimulationSummary, StrategyResult,
};

/// Block characters for sub-character precision (from empty to full)
const BIN_CHARS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Final-asset histogram geometry
const HISTOGRAM_BINS: usize = 40;
const HISTOGRAM_ROWS: usize = 6;

/// Leading trajectories drawn as sparklines
const SAMPLE_PATHS: usize = 30;

/// Format a dollar value without cents, with thousands separators.
pub fn format_dollars(value: f64) -> String {
    let dollars = value.abs().round() as i64;

    // Group digits right to left, then flip back
    let digits = dollars.to_string();
    let mut reversed = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(c);
    }
    let grouped: String = reversed.chars().rev().collect();

    if value < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format a fractional rate as a percentage
fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Histogram of `values` over `[min, max]`, one string per row, top row
/// first. Every row is `HISTOGRAM_BINS` characters wide.
fn render_histogram(values: &[f64], min: f64, max: f64) -> Vec<String> {
    let span = (max - min).max(1.0);
    let bin_width = span / HISTOGRAM_BINS as f64;
    let mut bin_counts = vec![0usize; HISTOGRAM_BINS];
    for &value in values {
        let bin = ((value - min) / bin_width).floor() as usize;
        bin_counts[bin.min(HISTOGRAM_BINS - 1)] += 1;
    }

    let max_count = bin_counts.iter().copied().max().unwrap_or(0).max(1);
    let height_units = HISTOGRAM_ROWS * 8;
    let bar_heights: Vec<usize> = bin_counts
        .iter()
        .map(|&count| ((count as f64 / max_count as f64) * height_units as f64).round() as usize)
        .collect();

    (0..HISTOGRAM_ROWS)
        .map(|row| {
            let row_base = (HISTOGRAM_ROWS - 1 - row) * 8;
            let row_top = row_base + 8;
            bar_heights
                .iter()
                .map(|&bar_h| {
                    if bar_h >= row_top {
                        "█"
                    } else if bar_h > row_base {
                        BIN_CHARS[(bar_h - row_base).min(8)]
                    } else {
                        " "
                    }
                })
                .collect()
        })
        .collect()
}

/// One character per yearly balance, scaled against `scale`. Nonzero
/// balances always get at least the lowest block.
fn render_sparkline(path: &[f64], scale: f64) -> String {
    path.iter()
        .map(|&value| {
            let level = ((value / scale) * 8.0).ceil() as usize;
            BIN_CHARS[level.min(8)]
        })
        .collect()
}

/// Render the full report for one finished run.
pub fn render_report(
    config: &SimulationConfig,
    history: &HistoricalReturnSeries,
    weights: &PortfolioWeights,
    summary: &SimulationSummary,
) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Retirement simulation: {} paths x {} years per strategy",
        config.n_sims, config.years
    );
    let _ = writeln!(
        out,
        "Start {} | spending {}/yr, {} inflation | withdrawal {}",
        format_dollars(config.initial_assets),
        format_dollars(config.annual_spending),
        format_percent(config.inflation_rate),
        format_percent(config.withdrawal_rate),
    );

    let allocation: Vec<String> = history
        .assets()
        .iter()
        .zip(weights.as_slice())
        .map(|(name, weight)| format!("{name} {:.0}%", weight * 100.0))
        .collect();
    let _ = writeln!(
        out,
        "Portfolio: {} | {} months of history",
        allocation.join(", "),
        history.len()
    );

    // Pooled range so the two charts share an x axis
    let pooled: Vec<f64> = summary
        .strategies()
        .iter()
        .flat_map(|result| result.final_assets())
        .collect();
    let min = pooled.iter().copied().fold(f64::INFINITY, f64::min);
    let max = pooled.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    for result in summary.strategies() {
        out.push('\n');
        render_strategy(&mut out, result, min, max);
    }

    out
}

fn render_strategy(out: &mut String, result: &StrategyResult, min: f64, max: f64) {
    let _ = writeln!(out, "== {} ==", result.strategy);
    let _ = writeln!(out, "Success rate: {:.2}%", result.success_rate());
    let _ = writeln!(
        out,
        "Final assets: median {} (p10 {}, p90 {})",
        format_dollars(result.median_final_assets()),
        format_dollars(result.final_assets_percentile(10.0)),
        format_dollars(result.final_assets_percentile(90.0)),
    );

    let _ = writeln!(
        out,
        "Distribution of final assets, {} to {}:",
        format_dollars(min),
        format_dollars(max)
    );
    for row in render_histogram(&result.final_assets(), min, max) {
        let _ = writeln!(out, "  |{row}|");
    }

    let samples = result.sample_paths(SAMPLE_PATHS);
    let scale = samples
        .iter()
        .flat_map(|outcome| outcome.path.iter().copied())
        .fold(0.0_f64, f64::max);
    let _ = writeln!(
        out,
        "Sample paths ({} of {}, one row per path, peak {}):",
        samples.len(),
        result.outcomes.len(),
        format_dollars(scale)
    );
    for outcome in samples {
        let _ = writeln!(out, "  {}", render_sparkline(&outcome.path, scale));
    }
}

/// Machine-readable summary, one object per strategy.
pub fn render_json(
    config: &SimulationConfig,
    summary: &SimulationSummary,
    seed: u64,
) -> color_eyre::Result<String> {
    let strategies: Vec<serde_json::Value> = summary
        .strategies()
        .iter()
        .map(|result| {
            json!({
                "strategy": result.strategy.label(),
                "success_rate": result.success_rate(),
                "median_final_assets": result.median_final_assets(),
                "p10_final_assets": result.final_assets_percentile(10.0),
                "p90_final_assets": result.final_assets_percentile(90.0),
            })
        })
        .collect();

    let doc = json!({
        "seed": seed,
        "years": config.years,
        "n_sims": config.n_sims,
        "strategies": strategies,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Write terminal balances to CSV, one named column per strategy, one row
/// per simulation index.
pub fn export_final_assets(path: &Path, summary: &SimulationSummary) -> color_eyre::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| eyre!("Failed to create export {}: {e}", path.display()))?;

    writer.write_record([
        summary.fixed_real.strategy.label(),
        summary.fixed_percentage.strategy.label(),
    ])?;
    for (fixed_real, fixed_percentage) in summary.final_assets_rows() {
        writer.write_record([fixed_real.to_string(), fixed_percentage.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
