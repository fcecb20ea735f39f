//! Core traits for the filtering pipeline.
//!
//! [`Filter`] is the seam for product filters; [`Pipelet`] is a single
//! named step that reads from and writes to a [`PipelineDictionary`].

use crate::dictionary::PipelineDictionary;
use crate::error::Result as PipeletResult;
use anyhow::Result;
use catalog::ProductRef;

/// Core trait for filtering products.
///
/// Filters take ownership of the product handles and return the survivors
/// in their original order.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of products.
    fn apply(&self, products: Vec<ProductRef>) -> Result<Vec<ProductRef>>;
}

/// Outcome of a successful pipelet execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeletStatus {
    /// Proceed to the next step
    Next,
}

/// A single step of a pipeline.
pub trait Pipelet: Send + Sync {
    fn name(&self) -> &str;

    /// Execute this step against the shared dictionary.
    ///
    /// # Returns
    /// * `Ok(PipeletStatus)` - Which branch the pipeline continues on
    /// * `Err` - The step failed; the pipeline stops
    fn execute(&self, dict: &mut PipelineDictionary) -> PipeletResult<PipeletStatus>;
}
