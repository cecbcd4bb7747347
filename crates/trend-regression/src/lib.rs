//! Ordinary least squares regression over index/value samples
//!
//! This crate is the numeric foundation of trend segmentation: it fits a
//! straight line to an (x, y) sample and reports how well the line explains
//! the data. Downstream, the segmentation layer fits price windows against
//! their sample index, and renderers evaluate the fitted line to draw trend
//! lines and channel envelopes.
//!
//! ```rust
//! use trend_regression::calculate_stats;
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [2.0, 4.0, 6.0, 8.0, 10.0];
//! let stats = calculate_stats(&x, &y).unwrap();
//!
//! assert!((stats.slope - 2.0).abs() < 1e-12);
//! assert!((stats.r_squared - 1.0).abs() < 1e-12);
//! assert_eq!(stats.predict(6.0), 12.0);
//! ```

pub mod ols;

pub use ols::{calculate_stats, fit_series, predict, RegressionStats};
