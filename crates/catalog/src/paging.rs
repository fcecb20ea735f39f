//! Ordered, optionally paged product sequences.
//!
//! Upstream steps may hand over a sequence that only exposes its first page.
//! A consumer that needs a full pass calls [`ProductSequence::disable_paging`]
//! before iterating.

use crate::types::Product;
use std::slice;
use std::sync::Arc;

/// Shared handle to a product; filtering moves handles, never the products.
pub type ProductRef = Arc<Product>;

/// An ordered list of products with an optional page-size limit.
#[derive(Debug, Clone, Default)]
pub struct ProductSequence {
    products: Vec<ProductRef>,
    page_size: Option<usize>,
}

impl ProductSequence {
    /// Create an unpaged sequence.
    pub fn new(products: Vec<ProductRef>) -> Self {
        Self {
            products,
            page_size: None,
        }
    }

    /// Create a sequence that only exposes its first `page_size` products.
    pub fn paged(products: Vec<ProductRef>, page_size: usize) -> Self {
        Self {
            products,
            page_size: Some(page_size),
        }
    }

    /// Set the page size; `None` means no limit.
    pub fn set_page_size(&mut self, page_size: Option<usize>) {
        self.page_size = page_size;
    }

    pub fn disable_paging(&mut self) {
        self.set_page_size(None);
    }

    pub fn page_size(&self) -> Option<usize> {
        self.page_size
    }

    /// Number of products visible to iteration.
    pub fn len(&self) -> usize {
        match self.page_size {
            Some(size) => size.min(self.products.len()),
            None => self.products.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of products, ignoring the page size.
    pub fn total_len(&self) -> usize {
        self.products.len()
    }

    /// Iterate over the visible products in order.
    pub fn iter(&self) -> slice::Iter<'_, ProductRef> {
        self.products[..self.len()].iter()
    }

    /// Take the visible products, dropping anything beyond the page.
    pub fn into_vec(mut self) -> Vec<ProductRef> {
        let visible = self.len();
        self.products.truncate(visible);
        self.products
    }
}

impl From<Vec<ProductRef>> for ProductSequence {
    fn from(products: Vec<ProductRef>) -> Self {
        Self::new(products)
    }
}

impl From<Vec<Product>> for ProductSequence {
    fn from(products: Vec<Product>) -> Self {
        products.into_iter().collect()
    }
}

impl FromIterator<Product> for ProductSequence {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Arc::new).collect())
    }
}

impl FromIterator<ProductRef> for ProductSequence {
    fn from_iter<I: IntoIterator<Item = ProductRef>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ProductSequence {
    type Item = &'a ProductRef;
    type IntoIter = slice::Iter<'a, ProductRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
