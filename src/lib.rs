//! Trend segmentation toolkit for chronologically ordered price series
//!
//! This facade re-exports the workspace crates:
//!
//! - [`trend_core`]: unified error type and input validation
//! - [`trend_regression`]: OLS regression statistics and line evaluation
//! - [`trend_segmentation`]: the greedy trend segmenter and its value types
//!
//! ## Usage
//!
//! ```rust
//! use trend_stats::{SegmentationConfig, Segmenter, Trend, TrendSegmenter};
//!
//! // A steadily rising series: every segment is labeled Increasing and
//! // there are no reversals to report.
//! let data: Vec<f64> = (0..30).map(|i| i as f64).collect();
//!
//! let segmenter = TrendSegmenter::new(SegmentationConfig::default());
//! let result = segmenter.segment(&data).unwrap();
//!
//! assert!(result.segments().iter().all(|s| s.trend == Trend::Increasing));
//! assert!(result.reversals().is_empty());
//! ```

pub use trend_core::{Error, Result};

pub use trend_regression::{calculate_stats, fit_series, predict, RegressionStats};

pub use trend_segmentation::{
    segment_by_trends, ConfigurableSegmenter, NullSegmentVisualizer, Segment, SegmentationConfig,
    SegmentationResult, SegmentVisualizer, Segmenter, SegmenterProperties, Trend, TrendSegmenter,
};
