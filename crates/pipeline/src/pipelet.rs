//! The product filtering pipelet.
//!
//! Reads `Products` from the dictionary, removes excluded product types and
//! writes the survivors to `FilteredProducts`.

use crate::config::{PipeletConfig, ProductTypeExclusions};
use crate::dictionary::PipelineDictionary;
use crate::error::Result;
use crate::filters::ProductTypeFilter;
use crate::traits::{Filter, Pipelet, PipeletStatus};
use catalog::{ProductRef, ProductSequence};

/// Dictionary key of the input products
pub const DN_PRODUCTS: &str = "Products";

/// Dictionary key of the filtered output
pub const DN_FILTERED_PRODUCTS: &str = "FilteredProducts";

/// Pipelet applying a [`ProductTypeFilter`] configured at init time.
#[derive(Debug, Clone)]
pub struct FilterProductsPipelet {
    filter: ProductTypeFilter,
}

impl FilterProductsPipelet {
    /// Read the exclusion flags from `config`. Absent or malformed values
    /// disable their rule.
    pub fn init(config: &PipeletConfig) -> Self {
        let exclusions = ProductTypeExclusions::from_config(config);
        tracing::debug!("FilterProductsPipelet initialised with {:?}", exclusions.enabled_rules());
        Self::new(exclusions)
    }

    pub fn new(exclusions: ProductTypeExclusions) -> Self {
        Self {
            filter: ProductTypeFilter::new(exclusions),
        }
    }

    pub fn exclusions(&self) -> &ProductTypeExclusions {
        self.filter.exclusions()
    }
}

impl Pipelet for FilterProductsPipelet {
    fn name(&self) -> &str {
        "FilterProductsPipelet"
    }

    fn execute(&self, dict: &mut PipelineDictionary) -> Result<PipeletStatus> {
        let products = dict.get_required_mut::<ProductSequence>(DN_PRODUCTS)?;
        // The filter needs a full pass over the input.
        products.disable_paging();
        let input: Vec<ProductRef> = products.iter().cloned().collect();

        let filtered = self.filter.apply(input)?;
        dict.put(DN_FILTERED_PRODUCTS, ProductSequence::new(filtered));
        Ok(PipeletStatus::Next)
    }
}
