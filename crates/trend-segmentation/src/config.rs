//! Tunable thresholds for the segment builder.

use trend_core::{Error, Result};

/// Thresholds steering segment growth and trend classification.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentationConfig {
    /// Minimum number of points required to attempt a trend-classified
    /// segment; shorter inputs collapse to one `Unknown` segment.
    pub min_segment_length: usize,
    /// Target length the grower tries to reach before considering a close.
    pub preferred_segment_length: usize,
    /// Minimum acceptable goodness of fit (0..1) for a window to remain
    /// part of the current segment.
    pub min_r_squared: f64,
    /// Minimum slope magnitude to classify a window as non-flat.
    pub min_slope: f64,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            min_segment_length: 5,
            preferred_segment_length: 14,
            min_r_squared: 0.6,
            min_slope: 0.1,
        }
    }
}

impl SegmentationConfig {
    /// Check the thresholds for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.min_segment_length == 0 {
            return Err(Error::InvalidParameter(
                "min_segment_length must be at least 1".to_string(),
            ));
        }
        if self.preferred_segment_length < self.min_segment_length {
            return Err(Error::InvalidParameter(format!(
                "preferred_segment_length {} must be at least min_segment_length {}",
                self.preferred_segment_length, self.min_segment_length
            )));
        }
        if !(0.0..=1.0).contains(&self.min_r_squared) {
            return Err(Error::InvalidParameter(format!(
                "min_r_squared {} must be in [0, 1]",
                self.min_r_squared
            )));
        }
        if !self.min_slope.is_finite() || self.min_slope < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "min_slope {} must be finite and non-negative",
                self.min_slope
            )));
        }
        Ok(())
    }
}
