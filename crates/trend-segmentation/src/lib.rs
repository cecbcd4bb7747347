//! Greedy trend segmentation of price series
//!
//! This crate partitions a chronologically ordered price series into
//! contiguous segments, each labeled with a dominant trend (rising, falling,
//! flat, or unknown), a linear-fit quality score, and a price-channel width.
//! Charting layers annotate price charts with the segment list; signal
//! layers watch it for trend reversals.
//!
//! The segmenter walks the series left to right, growing one regression
//! window at a time and closing it when fit quality or trend stability
//! breaks down. The result always partitions the input exactly: segments
//! are contiguous, ordered, and non-overlapping.
//!
//! ## Usage
//!
//! ```rust
//! use trend_segmentation::{SegmentationConfig, Segmenter, TrendSegmenter};
//!
//! // Rising, then flat, then falling.
//! let data = [
//!     1.0, 2.0, 3.0, 4.0, 5.0,
//!     5.0, 5.0, 5.0, 5.0, 5.0,
//!     5.0, 4.0, 3.0, 2.0, 1.0,
//! ];
//!
//! let segmenter = TrendSegmenter::new(SegmentationConfig {
//!     min_segment_length: 5,
//!     preferred_segment_length: 5,
//!     min_r_squared: 0.99,
//!     min_slope: 0.1,
//! });
//! let result = segmenter.segment(&data).unwrap();
//!
//! assert_eq!(result.count(), 3);
//! ```

pub mod config;
pub mod segmenter;
pub mod traits;
pub mod types;
pub mod visualization;

pub use config::SegmentationConfig;
pub use segmenter::{segment_by_trends, TrendSegmenter};
pub use traits::{ConfigurableSegmenter, Segmenter, SegmenterProperties};
pub use types::{Segment, SegmentationResult, Trend};
pub use visualization::{NullSegmentVisualizer, SegmentVisualizer};
