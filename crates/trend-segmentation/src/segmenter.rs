//! Greedy left-to-right trend segmentation.
//!
//! The walk keeps a current segment start and grows a regression window one
//! index at a time. Growth is gated in two phases around the preferred
//! segment length: below it, an extension survives while the fit stays
//! acceptable or keeps improving; at or beyond it, only strictly improving
//! fits extend the window. An extension that would flip the trend sign
//! (Increasing to Decreasing or back) always closes the segment.

use crate::config::SegmentationConfig;
use crate::traits::{ConfigurableSegmenter, Segmenter, SegmenterProperties};
use crate::types::{Segment, SegmentationResult, Trend};
use crate::visualization::{NullSegmentVisualizer, SegmentVisualizer};
use trend_core::{validation, Error, Result};
use trend_regression::{fit_series, RegressionStats};

/// Greedy trend segmenter
///
/// Stateless across calls: each call partitions one series into a fresh
/// segment list under the configured thresholds.
#[derive(Debug, Clone, Default)]
pub struct TrendSegmenter {
    config: SegmentationConfig,
}

impl TrendSegmenter {
    /// Create a segmenter with the given thresholds.
    pub fn new(config: SegmentationConfig) -> Self {
        Self { config }
    }

    /// Partition `data` into trend segments, reporting progress to `visualizer`.
    pub fn segment_with_visualizer<V: SegmentVisualizer>(
        &self,
        data: &[f64],
        visualizer: &mut V,
    ) -> Result<SegmentationResult> {
        self.config.validate()?;
        if data.is_empty() {
            return Err(Error::empty_input("trend segmentation"));
        }
        validation::check_finite(data, "price series")?;
        visualizer.record_data(data)?;

        let n = data.len();
        if n < self.config.min_segment_length {
            // Too little data to trust any regression-based classification.
            let result = SegmentationResult::new(
                vec![Segment::unknown(0, n - 1)],
                self.algorithm_name().to_string(),
                n,
            );
            visualizer.record_final_segments(&result)?;
            return Ok(result);
        }

        let mut segments = Vec::new();
        let mut start = 0;
        while start < n {
            let end = if n - start < self.config.min_segment_length {
                // The remaining tail cannot seed a new window; emit it whole.
                n - 1
            } else {
                self.grow_segment(data, start, visualizer)?
            };
            segments.push(self.close_segment(data, start, end, visualizer)?);
            start = end + 1;
        }

        let result = SegmentationResult::new(segments, self.algorithm_name().to_string(), n);
        visualizer.record_final_segments(&result)?;
        Ok(result)
    }

    /// Grow the window starting at `start` and return its final end index.
    ///
    /// The seed window of `min_segment_length` points is accepted
    /// unconditionally; the minimum length is a mandate, not a fit test.
    fn grow_segment<V: SegmentVisualizer>(
        &self,
        data: &[f64],
        start: usize,
        visualizer: &mut V,
    ) -> Result<usize> {
        let n = data.len();
        let mut end = start + self.config.min_segment_length - 1;

        let seed = Self::fit_window(data, start, end)?;
        visualizer.record_window_fit(start, end, &seed, true)?;
        let mut r_squared = seed.r_squared;
        let mut trend = Trend::from_slope(seed.slope, self.config.min_slope);

        while end + 1 < n {
            let candidate = Self::fit_window(data, start, end + 1)?;
            let candidate_trend = Trend::from_slope(candidate.slope, self.config.min_slope);
            let length = end - start + 1;

            let accepted = !trend.opposes(candidate_trend)
                && if length < self.config.preferred_segment_length {
                    candidate.r_squared >= self.config.min_r_squared
                        || candidate.r_squared >= r_squared
                } else {
                    candidate.r_squared > r_squared
                };
            visualizer.record_window_fit(start, end + 1, &candidate, accepted)?;
            if !accepted {
                break;
            }

            end += 1;
            r_squared = candidate.r_squared;
            trend = candidate_trend;
        }

        Ok(end)
    }

    /// Refit the closed window and build its segment.
    fn close_segment<V: SegmentVisualizer>(
        &self,
        data: &[f64],
        start: usize,
        end: usize,
        visualizer: &mut V,
    ) -> Result<Segment> {
        let stats = Self::fit_window(data, start, end)?;
        let trend = Trend::from_slope(stats.slope, self.config.min_slope);

        // Channel width: largest vertical deviation from the fitted line,
        // with x measured from the window start as in the fit.
        let mut channel_width = 0.0f64;
        for (offset, &value) in data[start..=end].iter().enumerate() {
            let deviation = (value - stats.predict(offset as f64)).abs();
            channel_width = channel_width.max(deviation);
        }

        let segment = Segment::new(start, end, trend, stats.r_squared, channel_width);
        visualizer.record_segment(&segment, &stats)?;
        Ok(segment)
    }

    /// Fit the inclusive window `[start, end]` against its local index.
    fn fit_window(data: &[f64], start: usize, end: usize) -> Result<RegressionStats> {
        let window = &data[start..=end];
        if window.len() < 2 {
            // A single point lies exactly on its own fitted line.
            return Ok(RegressionStats {
                slope: 0.0,
                intercept: window[0],
                r_squared: 1.0,
            });
        }
        fit_series(window)
    }
}

impl SegmenterProperties for TrendSegmenter {
    fn algorithm_name(&self) -> &'static str {
        "Trends"
    }

    fn minimum_sample_size(&self) -> usize {
        1
    }
}

impl Segmenter for TrendSegmenter {
    fn segment(&self, sample: &[f64]) -> Result<SegmentationResult> {
        self.segment_with_visualizer(sample, &mut NullSegmentVisualizer)
    }
}

impl ConfigurableSegmenter for TrendSegmenter {
    type Config = SegmentationConfig;

    fn with_config(config: Self::Config) -> Self {
        Self::new(config)
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn set_config(&mut self, config: Self::Config) {
        self.config = config;
    }
}

/// Partition `data` into trend segments under `config`.
///
/// Convenience wrapper over [`TrendSegmenter`] for one-shot callers.
pub fn segment_by_trends(data: &[f64], config: SegmentationConfig) -> Result<SegmentationResult> {
    TrendSegmenter::new(config).segment(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// 15 points: rising, flat, falling.
    const RISE_FLAT_FALL: [f64; 15] = [
        1.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 4.0, 3.0, 2.0, 1.0,
    ];

    fn assert_partition(result: &SegmentationResult, n: usize) {
        let segments = result.segments();
        assert!(!segments.is_empty());
        assert_eq!(segments[0].start_idx, 0);
        assert_eq!(segments[segments.len() - 1].end_idx, n - 1);
        for pair in segments.windows(2) {
            assert_eq!(pair[1].start_idx, pair[0].end_idx + 1);
        }
        for segment in segments {
            assert!(segment.start_idx <= segment.end_idx);
        }
    }

    #[test]
    fn test_short_input_degrades_to_unknown() {
        let config = SegmentationConfig {
            min_segment_length: 5,
            preferred_segment_length: 10,
            min_r_squared: 0.6,
            min_slope: 0.1,
        };
        let result = segment_by_trends(&[1.0, 2.0, 3.0], config).unwrap();

        assert_eq!(result.count(), 1);
        let segment = &result.segments()[0];
        assert_eq!(segment.start_idx, 0);
        assert_eq!(segment.end_idx, 2);
        assert_eq!(segment.trend, Trend::Unknown);
        assert_eq!(segment.r_squared, 0.0);
        assert_eq!(segment.channel_width, 0.0);
    }

    #[test]
    fn test_constant_series_is_one_flat_segment() {
        let config = SegmentationConfig {
            min_segment_length: 5,
            preferred_segment_length: 5,
            min_r_squared: 0.6,
            min_slope: 0.1,
        };
        let result = segment_by_trends(&[4.2; 5], config).unwrap();

        assert_eq!(result.count(), 1);
        let segment = &result.segments()[0];
        assert_eq!(segment.trend, Trend::Flat);
        assert_relative_eq!(segment.r_squared, 1.0, epsilon = 1e-12);
        assert_relative_eq!(segment.channel_width, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_multi_trend_loose_thresholds_merge_to_two_segments() {
        // Loose fit gate: adjacent similarly-signed runs merge. The rising
        // run swallows two flat points, the falling run swallows the rest
        // of the plateau.
        let config = SegmentationConfig {
            min_segment_length: 5,
            preferred_segment_length: 8,
            min_r_squared: 0.86,
            min_slope: 0.3,
        };
        let result = segment_by_trends(&RISE_FLAT_FALL, config).unwrap();
        assert_partition(&result, RISE_FLAT_FALL.len());

        assert_eq!(result.count(), 2);
        let rising = &result.segments()[0];
        let falling = &result.segments()[1];

        assert_eq!((rising.start_idx, rising.end_idx), (0, 6));
        assert_eq!(rising.trend, Trend::Increasing);
        assert!(rising.r_squared > 0.8 && rising.r_squared < 1.0);
        assert_relative_eq!(rising.r_squared, 0.9091, epsilon = 1e-3);

        assert_eq!((falling.start_idx, falling.end_idx), (7, 14));
        assert_eq!(falling.trend, Trend::Decreasing);
        assert!(falling.r_squared > 0.8 && falling.r_squared < 1.0);
        assert_relative_eq!(falling.r_squared, 0.8503, epsilon = 1e-3);
    }

    #[test]
    fn test_multi_trend_strict_thresholds_isolate_three_segments() {
        // Strict fit gate with the preferred length at the run length:
        // every exact trend run becomes its own perfectly fitted segment.
        let config = SegmentationConfig {
            min_segment_length: 5,
            preferred_segment_length: 5,
            min_r_squared: 0.99,
            min_slope: 0.1,
        };
        let result = segment_by_trends(&RISE_FLAT_FALL, config).unwrap();
        assert_partition(&result, RISE_FLAT_FALL.len());

        assert_eq!(result.count(), 3);
        let expected = [
            (0, 4, Trend::Increasing),
            (5, 9, Trend::Flat),
            (10, 14, Trend::Decreasing),
        ];
        for (segment, &(start, end, trend)) in result.segments().iter().zip(&expected) {
            assert_eq!((segment.start_idx, segment.end_idx), (start, end));
            assert_eq!(segment.trend, trend);
            assert_relative_eq!(segment.r_squared, 1.0, epsilon = 1e-12);
            assert_relative_eq!(segment.channel_width, 0.0, epsilon = 1e-12);
        }

        assert_eq!(result.reversals(), vec![5, 10]);
    }

    #[test]
    fn test_loosening_min_r_squared_never_adds_segments() {
        let mut previous_count = usize::MAX;
        for min_r_squared in [0.95, 0.86, 0.5, 0.0] {
            let config = SegmentationConfig {
                min_segment_length: 5,
                preferred_segment_length: 8,
                min_r_squared,
                min_slope: 0.3,
            };
            let result = segment_by_trends(&RISE_FLAT_FALL, config).unwrap();
            assert_partition(&result, RISE_FLAT_FALL.len());
            assert!(
                result.count() <= previous_count,
                "min_r_squared {} produced {} segments, previous threshold produced {}",
                min_r_squared,
                result.count(),
                previous_count
            );
            previous_count = result.count();
        }
    }

    #[test]
    fn test_perfect_ramp_closes_at_preferred_length() {
        // A perfect line never improves its fit, so segments close at the
        // preferred length and the leftover pair becomes a short tail.
        let data: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let config = SegmentationConfig::default();
        let result = segment_by_trends(&data, config).unwrap();
        assert_partition(&result, data.len());

        assert_eq!(result.count(), 3);
        assert_eq!(
            (result.segments()[0].start_idx, result.segments()[0].end_idx),
            (0, 13)
        );
        assert_eq!(
            (result.segments()[1].start_idx, result.segments()[1].end_idx),
            (14, 27)
        );
        assert_eq!(
            (result.segments()[2].start_idx, result.segments()[2].end_idx),
            (28, 29)
        );
        for segment in result.segments() {
            assert_eq!(segment.trend, Trend::Increasing);
            assert_relative_eq!(segment.r_squared, 1.0, epsilon = 1e-12);
        }
        assert!(result.reversals().is_empty());
    }

    #[test]
    fn test_short_tail_is_emitted_with_full_statistics() {
        // 12 points: a clean ramp, then a 2-point drop that cannot seed a
        // window of its own.
        let data = [
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 9.0, 8.0,
        ];
        let config = SegmentationConfig {
            min_segment_length: 5,
            preferred_segment_length: 10,
            min_r_squared: 0.98,
            min_slope: 0.1,
        };
        let result = segment_by_trends(&data, config.clone()).unwrap();
        assert_partition(&result, data.len());

        let last = result.segments().last().unwrap();
        assert!(last.point_count() < config.min_segment_length);
        assert_eq!(last.trend, Trend::Decreasing);
    }

    #[test]
    fn test_single_point_input_with_min_length_one() {
        let config = SegmentationConfig {
            min_segment_length: 1,
            preferred_segment_length: 1,
            min_r_squared: 0.5,
            min_slope: 0.1,
        };
        let result = segment_by_trends(&[42.0], config).unwrap();

        assert_eq!(result.count(), 1);
        let segment = &result.segments()[0];
        assert_eq!((segment.start_idx, segment.end_idx), (0, 0));
        assert_eq!(segment.trend, Trend::Flat);
        assert_eq!(segment.channel_width, 0.0);
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = segment_by_trends(&[], SegmentationConfig::default());
        assert!(matches!(
            result.unwrap_err(),
            Error::InsufficientData { .. }
        ));
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let data = [1.0, 2.0, f64::NAN, 4.0, 5.0, 6.0];
        let result = segment_by_trends(&data, SegmentationConfig::default());
        assert!(matches!(result.unwrap_err(), Error::InvalidInput(_)));

        let data = [1.0, f64::INFINITY, 3.0, 4.0, 5.0, 6.0];
        let result = segment_by_trends(&data, SegmentationConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SegmentationConfig {
            min_segment_length: 0,
            ..Default::default()
        };
        let result = segment_by_trends(&[1.0, 2.0, 3.0], config);
        assert!(matches!(result.unwrap_err(), Error::InvalidParameter(_)));
    }

    #[test]
    fn test_noisy_series_still_partitions() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        let data: Vec<f64> = (0..500)
            .map(|i| {
                let trend = if i < 250 { i as f64 * 0.4 } else { 200.0 - i as f64 * 0.4 };
                trend + rng.gen_range(-2.0..2.0)
            })
            .collect();

        let result = segment_by_trends(&data, SegmentationConfig::default()).unwrap();
        assert_partition(&result, data.len());
        for segment in result.segments() {
            assert!(segment.channel_width >= 0.0);
            assert!((0.0..=1.0).contains(&segment.r_squared));
            assert_ne!(segment.trend, Trend::Unknown);
        }
    }

    #[test]
    fn test_visualizer_receives_final_fits() {
        #[derive(Default)]
        struct RecordingVisualizer {
            data_len: usize,
            window_fits: usize,
            segments: Vec<(Segment, RegressionStats)>,
            final_count: usize,
        }

        impl SegmentVisualizer for RecordingVisualizer {
            fn record_data(&mut self, data: &[f64]) -> Result<()> {
                self.data_len = data.len();
                Ok(())
            }

            fn record_window_fit(
                &mut self,
                _: usize,
                _: usize,
                _: &RegressionStats,
                _: bool,
            ) -> Result<()> {
                self.window_fits += 1;
                Ok(())
            }

            fn record_segment(
                &mut self,
                segment: &Segment,
                stats: &RegressionStats,
            ) -> Result<()> {
                self.segments.push((*segment, *stats));
                Ok(())
            }

            fn record_final_segments(&mut self, result: &SegmentationResult) -> Result<()> {
                self.final_count = result.count();
                Ok(())
            }
        }

        let config = SegmentationConfig {
            min_segment_length: 5,
            preferred_segment_length: 5,
            min_r_squared: 0.99,
            min_slope: 0.1,
        };
        let segmenter = TrendSegmenter::new(config);
        let mut viz = RecordingVisualizer::default();
        let result = segmenter
            .segment_with_visualizer(&RISE_FLAT_FALL, &mut viz)
            .unwrap();

        assert_eq!(viz.data_len, RISE_FLAT_FALL.len());
        assert!(viz.window_fits > 0);
        assert_eq!(viz.final_count, result.count());
        assert_eq!(viz.segments.len(), result.count());

        // The recorded fit of the rising segment reconstructs the series.
        let (segment, stats) = &viz.segments[0];
        assert_eq!(segment.trend, Trend::Increasing);
        assert_relative_eq!(stats.slope, 1.0, epsilon = 1e-12);
        assert_relative_eq!(stats.predict(2.0), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_config_round_trip() {
        let config = SegmentationConfig {
            min_segment_length: 3,
            preferred_segment_length: 9,
            min_r_squared: 0.7,
            min_slope: 0.2,
        };
        let mut segmenter = TrendSegmenter::with_config(config.clone());
        assert_eq!(segmenter.config(), &config);

        let updated = SegmentationConfig::default();
        segmenter.set_config(updated.clone());
        assert_eq!(segmenter.config(), &updated);
    }
}
