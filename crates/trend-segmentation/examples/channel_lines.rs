//! Reconstructing trend lines and channel envelopes for rendering
//!
//! Shows how a charting layer consumes a segmentation result: refit each
//! segment's window, then evaluate the line via `predict` to draw the trend
//! line and offset it by the channel width for the envelope.

use trend_regression::fit_series;
use trend_segmentation::{segment_by_trends, SegmentationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data: Vec<f64> = (0..40)
        .map(|i| {
            let t = i as f64;
            let trend = if i < 20 {
                100.0 + t * 1.5
            } else {
                130.0 - (t - 20.0)
            };
            trend + (t * 1.3).sin()
        })
        .collect();

    let result = segment_by_trends(&data, SegmentationConfig::default())?;
    println!("{result}");

    for segment in result.segments() {
        let window = &data[segment.start_idx..=segment.end_idx];
        let stats = fit_series(window)?;

        println!(
            "{} channel, slope {:+.3}:",
            segment.trend, stats.slope
        );
        for (offset, &price) in window.iter().enumerate() {
            let line = stats.predict(offset as f64);
            let upper = line + segment.channel_width;
            let lower = line - segment.channel_width;
            println!(
                "  idx {:>2}  price {:>8.3}  line {:>8.3}  band [{:>8.3}, {:>8.3}]",
                segment.start_idx + offset,
                price,
                line,
                upper,
                lower
            );
        }
    }

    Ok(())
}
