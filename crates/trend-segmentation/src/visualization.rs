//! Visualization interface for trend segmentation
//!
//! Rendering is an external collaborator: charting layers draw the segment
//! list, its trend lines, and channel envelopes. This module defines the
//! hook they attach through, as an explicit parameter rather than ambient
//! process-wide state. The null visualizer compiles to no-ops so the hook
//! costs nothing when rendering is disabled.

use crate::types::{Segment, SegmentationResult};
use trend_core::Result;
use trend_regression::RegressionStats;

/// Trait for observing segmentation stages
///
/// The segmenter calls these hooks at key points of the walk, letting
/// renderers record candidate windows, accepted fits, and the final
/// segment list without the algorithm depending on any plotting library.
pub trait SegmentVisualizer {
    /// Record the input series before segmentation begins
    fn record_data(&mut self, data: &[f64]) -> Result<()>;

    /// Record a fitted candidate window and whether the grower kept it
    fn record_window_fit(
        &mut self,
        start: usize,
        end: usize,
        stats: &RegressionStats,
        accepted: bool,
    ) -> Result<()>;

    /// Record a closed segment together with its final fit
    ///
    /// `stats` carries the slope and intercept renderers need to draw the
    /// trend line via `predict`, with x measured from the segment start.
    fn record_segment(&mut self, segment: &Segment, stats: &RegressionStats) -> Result<()>;

    /// Record the final segment list
    fn record_final_segments(&mut self, result: &SegmentationResult) -> Result<()>;

    /// Check if this visualizer is active
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Null visualizer that performs no operations (zero-cost abstraction)
#[derive(Default, Clone, Copy, Debug)]
pub struct NullSegmentVisualizer;

impl SegmentVisualizer for NullSegmentVisualizer {
    #[inline(always)]
    fn record_data(&mut self, _: &[f64]) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_window_fit(&mut self, _: usize, _: usize, _: &RegressionStats, _: bool) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_segment(&mut self, _: &Segment, _: &RegressionStats) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_final_segments(&mut self, _: &SegmentationResult) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn is_enabled(&self) -> bool {
        false
    }
}
