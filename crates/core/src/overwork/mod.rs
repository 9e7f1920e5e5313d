//! Overwork hour tracking and earned-leave conversion.
//!
//! This module implements the overwork converter:
//! - Hour accumulation onto a per-faculty account
//! - Threshold-gated conversion into earned-leave days
//! - Error types for overwork operations

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod conversion_props;

pub use error::OverworkError;
pub use service::{
    CONVERSION_THRESHOLD_HOURS, FULL_DAY_HOURS, HALF_DAY_BLOCK_HOURS, OverworkService,
};
pub use types::{ConversionBreakdown, ConversionOutcome, OverworkAccount};
