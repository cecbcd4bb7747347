//! Basic trend segmentation example

use trend_segmentation::{segment_by_trends, SegmentationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Trend Segmentation Examples ===\n");

    // Rising, then flat, then falling.
    let data = [
        1.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 4.0, 3.0, 2.0, 1.0,
    ];

    // Example 1: loose thresholds merge similarly-signed runs.
    println!("1. Loose thresholds - merged runs");
    let loose = SegmentationConfig {
        min_segment_length: 5,
        preferred_segment_length: 8,
        min_r_squared: 0.86,
        min_slope: 0.3,
    };
    let result = segment_by_trends(&data, loose)?;
    print!("{result}");
    println!("  Reversals at: {:?}\n", result.reversals());

    // Example 2: strict thresholds isolate every exact trend run.
    println!("2. Strict thresholds - isolated runs");
    let strict = SegmentationConfig {
        min_segment_length: 5,
        preferred_segment_length: 5,
        min_r_squared: 0.99,
        min_slope: 0.1,
    };
    let result = segment_by_trends(&data, strict)?;
    print!("{result}");
    println!("  Reversals at: {:?}\n", result.reversals());

    // Example 3: too little data degrades to one Unknown segment.
    println!("3. Short input");
    let short = segment_by_trends(&[101.2, 101.9, 103.4], SegmentationConfig::default())?;
    print!("{short}");

    Ok(())
}
