//! Core traits for series segmentation.

use crate::types::SegmentationResult;
use trend_core::Result;

/// Properties of a segmenter that don't depend on the input series
pub trait SegmenterProperties {
    /// Get the name of the segmentation algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Get the smallest input the segmenter accepts without error
    fn minimum_sample_size(&self) -> usize;
}

/// Core trait for series segmentation
///
/// A segmenter is a pure function of its input: each call returns a fresh
/// segment list that exactly partitions the input indices, or fails on
/// malformed input. Implementations hold no state across calls.
pub trait Segmenter: SegmenterProperties {
    /// Partition `sample` into trend segments
    fn segment(&self, sample: &[f64]) -> Result<SegmentationResult>;
}

/// Configuration access, orthogonal to the segmentation entry points
pub trait ConfigurableSegmenter {
    type Config;

    fn with_config(config: Self::Config) -> Self;
    fn config(&self) -> &Self::Config;
    fn set_config(&mut self, config: Self::Config);
}
