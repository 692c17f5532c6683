//! Specification matching a product's color.

use crate::traits::Specification;
use catalog::{Color, Product};

/// Satisfied by products of exactly one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }

    fn describe(&self) -> String {
        format!("color = {}", self.color)
    }
}
