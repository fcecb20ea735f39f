//! Pipeline for filtering catalog products by type.
//!
//! This crate provides:
//! - Filter trait and the `ProductTypeFilter` implementation
//! - `PipeletConfig` and the `ProductTypeExclusions` flags read from it
//! - `PipelineDictionary`, the key-value state shared between steps
//! - `FilterProductsPipelet`, reading `Products` and writing `FilteredProducts`
//! - `Pipeline` for chaining pipelets
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterProductsPipelet, Pipeline, PipelineDictionary, PipeletConfig};
//! use pipeline::pipelet::{DN_FILTERED_PRODUCTS, DN_PRODUCTS};
//! use catalog::ProductSequence;
//!
//! let config = PipeletConfig::load_properties(Path::new("filter.properties"))?;
//! let pipeline = Pipeline::new().add_pipelet(FilterProductsPipelet::init(&config));
//!
//! let mut dict = PipelineDictionary::new();
//! dict.put(DN_PRODUCTS, ProductSequence::from(products));
//! pipeline.run(&mut dict)?;
//!
//! let filtered = dict.get_required::<ProductSequence>(DN_FILTERED_PRODUCTS)?;
//! ```

pub mod error;
pub mod traits;
pub mod config;
pub mod dictionary;
pub mod filters;
pub mod pipelet;
pub mod runner;

// Re-export main types
pub use config::{PipeletConfig, ProductTypeExclusions};
pub use dictionary::PipelineDictionary;
pub use error::{PipeletError, Result};
pub use pipelet::FilterProductsPipelet;
pub use runner::Pipeline;
pub use traits::{Filter, Pipelet, PipeletStatus};
