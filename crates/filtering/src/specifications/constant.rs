//! Specifications with a fixed answer.

use crate::traits::Specification;

/// Satisfied by every item. Neutral element of [`AndSpecification`](super::AndSpecification).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptAll;

/// Satisfied by no item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectAll;

impl<T> Specification<T> for AcceptAll {
    fn is_satisfied(&self, _item: &T) -> bool {
        true
    }

    fn describe(&self) -> String {
        "anything".to_string()
    }
}

impl<T> Specification<T> for RejectAll {
    fn is_satisfied(&self, _item: &T) -> bool {
        false
    }

    fn describe(&self) -> String {
        "nothing".to_string()
    }
}
