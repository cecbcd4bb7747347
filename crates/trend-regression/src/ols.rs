//! Closed-form OLS fit and line evaluation.

use trend_core::{Error, Result};

/// Statistics of a least-squares line fitted to one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegressionStats {
    /// Slope of the fitted line
    pub slope: f64,
    /// Intercept of the fitted line
    pub intercept: f64,
    /// Coefficient of determination, in [0, 1]
    pub r_squared: f64,
}

impl RegressionStats {
    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        predict(self.intercept, self.slope, x)
    }
}

/// Evaluate the line `intercept + slope * x`, exactly as fitted.
///
/// Renderers use this to reconstruct trend lines and channel boundaries
/// from the statistics attached to a segment.
#[inline]
pub fn predict(intercept: f64, slope: f64, x: f64) -> f64 {
    intercept + slope * x
}

/// Fit a least-squares line to the sample `(x, y)`.
///
/// Slope is `cov(x, y) / var(x)`, intercept is `mean(y) - slope * mean(x)`,
/// and r-squared is `1 - SS_res / SS_tot`. A sample whose `y` values are all
/// identical is a perfectly fitted flat line, so `SS_tot == 0` reports
/// `r_squared = 1.0`.
///
/// Fails when the arrays differ in length, are empty, or carry fewer than
/// two points (a single x value has zero variance and admits no slope).
pub fn calculate_stats(x: &[f64], y: &[f64]) -> Result<RegressionStats> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "regression sample"));
    }
    if x.is_empty() {
        return Err(Error::empty_input("regression"));
    }
    if x.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: x.len(),
        });
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        covariance += (xi - mean_x) * (yi - mean_y);
        variance_x += (xi - mean_x) * (xi - mean_x);
    }
    if variance_x == 0.0 {
        return Err(Error::InvalidInput(
            "regression x values have zero variance".to_string(),
        ));
    }

    let slope = covariance / variance_x;
    let intercept = mean_y - slope * mean_x;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let fitted = predict(intercept, slope, xi);
        ss_res += (yi - fitted) * (yi - fitted);
        ss_tot += (yi - mean_y) * (yi - mean_y);
    }

    let r_squared = if ss_tot == 0.0 {
        1.0
    } else {
        (1.0 - ss_res / ss_tot).max(0.0)
    };

    Ok(RegressionStats {
        slope,
        intercept,
        r_squared,
    })
}

/// Fit `values` against the implicit index `x = 0..n-1`.
///
/// This is the hot path of segment growth: the segmentation layer refits
/// every candidate window, so the x array is never materialized.
pub fn fit_series(values: &[f64]) -> Result<RegressionStats> {
    if values.is_empty() {
        return Err(Error::empty_input("regression"));
    }
    if values.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: values.len(),
        });
    }

    let n = values.len() as f64;
    let mean_x = (values.len() - 1) as f64 / 2.0;
    let mean_y = values.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    for (i, &yi) in values.iter().enumerate() {
        let dx = i as f64 - mean_x;
        covariance += dx * (yi - mean_y);
        variance_x += dx * dx;
    }

    let slope = covariance / variance_x;
    let intercept = mean_y - slope * mean_x;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (i, &yi) in values.iter().enumerate() {
        let fitted = predict(intercept, slope, i as f64);
        ss_res += (yi - fitted) * (yi - fitted);
        ss_tot += (yi - mean_y) * (yi - mean_y);
    }

    let r_squared = if ss_tot == 0.0 {
        1.0
    } else {
        (1.0 - ss_res / ss_tot).max(0.0)
    };

    Ok(RegressionStats {
        slope,
        intercept,
        r_squared,
    })
}
