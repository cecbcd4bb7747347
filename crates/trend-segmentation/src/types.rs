//! Types produced by trend segmentation

use std::fmt;

/// Dominant trend label assigned to a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trend {
    /// Fitted slope above the minimum slope threshold
    Increasing,
    /// Fitted slope below the negated minimum slope threshold
    Decreasing,
    /// Fitted slope within the flat band around zero
    Flat,
    /// Input too short to trust any regression-based classification
    Unknown,
}

impl Trend {
    /// Classify a fitted slope against a minimum slope magnitude.
    ///
    /// `Unknown` is never produced here; only the short-input rule of the
    /// segmenter assigns it.
    pub fn from_slope(slope: f64, min_slope: f64) -> Self {
        if slope > min_slope {
            Trend::Increasing
        } else if slope < -min_slope {
            Trend::Decreasing
        } else {
            Trend::Flat
        }
    }

    /// True when the two labels carry opposite trend signs.
    pub fn opposes(self, other: Trend) -> bool {
        matches!(
            (self, other),
            (Trend::Increasing, Trend::Decreasing) | (Trend::Decreasing, Trend::Increasing)
        )
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Increasing => write!(f, "Increasing"),
            Trend::Decreasing => write!(f, "Decreasing"),
            Trend::Flat => write!(f, "Flat"),
            Trend::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A contiguous run of the input series under one dominant trend.
///
/// `start_idx` and `end_idx` are inclusive indices into the series handed to
/// the segmenter; callers map them back to calendar dates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// First index covered by the segment
    pub start_idx: usize,
    /// Last index covered by the segment (inclusive)
    pub end_idx: usize,
    /// Dominant trend over the segment
    pub trend: Trend,
    /// Goodness of fit of the segment's regression line, in [0, 1]
    pub r_squared: f64,
    /// Maximum absolute deviation of any point from the fitted line
    pub channel_width: f64,
}

impl Segment {
    /// Create a new segment.
    pub fn new(
        start_idx: usize,
        end_idx: usize,
        trend: Trend,
        r_squared: f64,
        channel_width: f64,
    ) -> Self {
        debug_assert!(start_idx <= end_idx);
        Self {
            start_idx,
            end_idx,
            trend,
            r_squared,
            channel_width,
        }
    }

    /// Create the degraded segment emitted when the whole input is shorter
    /// than the minimum segment length.
    pub fn unknown(start_idx: usize, end_idx: usize) -> Self {
        Self::new(start_idx, end_idx, Trend::Unknown, 0.0, 0.0)
    }

    /// Number of points covered by the segment (always at least 1).
    pub fn point_count(&self) -> usize {
        self.end_idx - self.start_idx + 1
    }

    /// True when `idx` falls inside the segment's index range.
    pub fn contains(&self, idx: usize) -> bool {
        idx >= self.start_idx && idx <= self.end_idx
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Segment {{ [{}, {}], trend: {}, r2: {:.3}, width: {:.3} }}",
            self.start_idx, self.end_idx, self.trend, self.r_squared, self.channel_width
        )
    }
}

/// Result of one segmentation call.
#[derive(Debug, Clone)]
pub struct SegmentationResult {
    /// Ordered, gap-free segment list
    segments: Vec<Segment>,
    /// Algorithm used for segmentation
    algorithm: String,
    /// Total number of data points analyzed
    sample_size: usize,
}

impl SegmentationResult {
    /// Create a new segmentation result.
    pub fn new(segments: Vec<Segment>, algorithm: String, sample_size: usize) -> Self {
        Self {
            segments,
            algorithm,
            sample_size,
        }
    }

    /// Get the segment list.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consume the result, keeping only the segment list.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Number of segments.
    pub fn count(&self) -> usize {
        self.segments.len()
    }

    /// Get the algorithm name used for segmentation.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Get the sample size that was analyzed.
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Find the segment covering `idx`, if any.
    pub fn segment_at(&self, idx: usize) -> Option<&Segment> {
        self.segments.iter().find(|s| s.contains(idx))
    }

    /// Start indices of segments whose trend label differs from their
    /// predecessor's. Signal layers read these as trend reversals.
    pub fn reversals(&self) -> Vec<usize> {
        self.segments
            .windows(2)
            .filter(|pair| pair[0].trend != pair[1].trend)
            .map(|pair| pair[1].start_idx)
            .collect()
    }
}

impl fmt::Display for SegmentationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trend Segmentation Result:")?;
        writeln!(f, "  Algorithm: {}", self.algorithm)?;
        writeln!(f, "  Sample size: {}", self.sample_size)?;
        writeln!(f, "  Segments: {}", self.count())?;
        for segment in &self.segments {
            writeln!(f, "    {segment}")?;
        }
        Ok(())
    }
}
