//! The Pipeline runs pipelets in order over one dictionary.

use crate::dictionary::PipelineDictionary;
use crate::error::Result;
use crate::traits::{Pipelet, PipeletStatus};

/// Chains pipelets into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = Pipeline::new()
///     .add_pipelet(FilterProductsPipelet::init(&config));
///
/// let status = pipeline.run(&mut dict)?;
/// ```
pub struct Pipeline {
    pipelets: Vec<Box<dyn Pipelet>>,
}

impl Pipeline {
    /// Create a new empty Pipeline.
    pub fn new() -> Self {
        Self {
            pipelets: Vec::new(),
        }
    }

    /// Add a pipelet to the pipeline (builder pattern).
    pub fn add_pipelet(mut self, pipelet: impl Pipelet + 'static) -> Self {
        self.pipelets.push(Box::new(pipelet));
        self
    }

    pub fn len(&self) -> usize {
        self.pipelets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipelets.is_empty()
    }

    /// Execute every pipelet in sequence.
    ///
    /// Stops at the first failing pipelet and returns its error; nothing is
    /// retried. An empty pipeline returns `Next`.
    pub fn run(&self, dict: &mut PipelineDictionary) -> Result<PipeletStatus> {
        let mut status = PipeletStatus::Next;
        for pipelet in &self.pipelets {
            tracing::debug!(
                "Executing pipelet: {} (dictionary entries: {})",
                pipelet.name(),
                dict.len()
            );
            status = pipelet.execute(dict).inspect_err(|err| {
                tracing::warn!("Pipelet {} failed: {}", pipelet.name(), err);
            })?;
            tracing::debug!("Pipelet executed: {} ({:?})", pipelet.name(), status);
        }
        Ok(status)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
