//! Loading historical return tables from CSV
//!
//! The expected layout is one date column followed by one column per asset,
//! one row per month. Files can hold either monthly returns directly or
//! price levels, which are converted to percent changes on load.

use std::path::Path;

use color_eyre::eyre::{bail, eyre};

use nestegg_core::HistoricalReturnSeries;

/// Read a monthly return table from `path`. With `prices` set the cells are
/// treated as price levels and converted to month-over-month returns.
pub fn load_history(path: &Path, prices: bool) -> color_eyre::Result<HistoricalReturnSeries> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| eyre!("Failed to open return table {}: {e}", path.display()))?;

    let headers = reader
        .headers()
        .map_err(|e| eyre!("Failed to read header of {}: {e}", path.display()))?;
    if headers.len() < 2 {
        bail!(
            "{} needs a date column plus at least one asset column",
            path.display()
        );
    }
    let assets: Vec<String> = headers.iter().skip(1).map(str::to_owned).collect();

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| eyre!("Failed to read row {} of {}: {e}", line + 2, path.display()))?;
        let row: Vec<f64> = record
            .iter()
            .skip(1)
            .map(|cell| {
                cell.trim().parse::<f64>().map_err(|_| {
                    eyre!("Invalid value {cell:?} on row {} of {}", line + 2, path.display())
                })
            })
            .collect::<color_eyre::Result<_>>()?;
        rows.push(row);
    }

    if prices {
        rows = prices_to_returns(&rows, path)?;
    }

    HistoricalReturnSeries::new(assets, rows)
        .map_err(|e| eyre!("Inconsistent return table {}: {e}", path.display()))
}

/// Convert price levels to percent changes. Drops the first row since it has
/// no predecessor.
fn prices_to_returns(rows: &[Vec<f64>], path: &Path) -> color_eyre::Result<Vec<Vec<f64>>> {
    if rows.len() < 2 {
        bail!(
            "{} needs at least two price rows to compute returns",
            path.display()
        );
    }
    let mut returns = Vec::with_capacity(rows.len() - 1);
    for pair in rows.windows(2) {
        let mut row = Vec::with_capacity(pair[1].len());
        for (&prev, &next) in pair[0].iter().zip(&pair[1]) {
            if prev == 0.0 {
                bail!("Zero price in {} makes returns undefined", path.display());
            }
            row.push(next / prev - 1.0);
        }
        returns.push(row);
    }
    Ok(returns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_load_returns_table() {
        let file = write_csv(
            "date,VTI,BND\n\
             2020-01,0.01,0.002\n\
             2020-02,-0.02,0.004\n",
        );

        let history = load_history(file.path(), false).unwrap();
        assert_eq!(history.assets(), &["VTI".to_owned(), "BND".to_owned()]);
        assert_eq!(history.columns(), 2);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_load_price_table_computes_percent_changes() {
        use nestegg_core::{PortfolioWeights, ReturnSampler};

        let file = write_csv(
            "date,VTI\n\
             2020-01,100.0\n\
             2020-02,110.0\n\
             2020-03,99.0\n",
        );

        let history = load_history(file.path(), true).unwrap();
        assert_eq!(history.len(), 2);

        // A single fully-weighted asset exposes the converted values directly
        let weights = PortfolioWeights::new(vec![1.0]).unwrap();
        let sampler = ReturnSampler::build(&history, &weights).unwrap();
        let series = sampler.series().as_slice();
        assert!((series[0] - 0.10).abs() < 1e-12, "Expected 0.10, got {}", series[0]);
        assert!((series[1] + 0.10).abs() < 1e-12, "Expected -0.10, got {}", series[1]);
    }

    #[test]
    fn test_malformed_cell_is_reported_with_row() {
        let file = write_csv(
            "date,VTI\n\
             2020-01,0.01\n\
             2020-02,oops\n",
        );

        let err = load_history(file.path(), false).unwrap_err();
        assert!(err.to_string().contains("row 3"), "got: {err}");
    }

    #[test]
    fn test_missing_asset_columns_rejected() {
        let file = write_csv("date\n2020-01\n");
        assert!(load_history(file.path(), false).is_err());
    }

    #[test]
    fn test_single_price_row_rejected() {
        let file = write_csv("date,VTI\n2020-01,100.0\n");
        assert!(load_history(file.path(), true).is_err());
    }
}
