//! Shared infrastructure for the trend-stats workspace
//!
//! Provides the unified [`Error`] type used by every trend-stats crate and
//! small input-validation helpers shared by the regression and segmentation
//! layers.

pub mod error;
pub mod validation;

pub use error::{Error, Result};
