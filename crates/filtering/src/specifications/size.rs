//! Specification matching a product's size.

use crate::traits::Specification;
use catalog::{Product, Size};

/// Satisfied by products of exactly one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }

    fn describe(&self) -> String {
        format!("size = {}", self.size)
    }
}
