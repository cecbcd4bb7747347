//! Input validation helpers shared across the workspace.

use crate::{Error, Result};

/// Ensure every value in `data` is finite.
pub fn check_finite(data: &[f64], context: &str) -> Result<()> {
    if data.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}

/// Ensure `data` carries at least `min_size` samples.
pub fn check_sample_size(data: &[f64], min_size: usize) -> Result<()> {
    if data.len() < min_size {
        return Err(Error::InsufficientData {
            expected: min_size,
            actual: data.len(),
        });
    }
    Ok(())
}
