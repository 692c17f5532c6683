//! Single-pass filter over any specification.

use crate::traits::{Filter, Specification};

/// Keeps the items satisfying a specification.
///
/// ## Algorithm
/// One linear scan; each item is tested independently and kept in input
/// order. Empty input or an unsatisfiable specification yields an empty
/// result.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearFilter;

impl<T> Filter<T> for LinearFilter {
    fn name(&self) -> &str {
        "LinearFilter"
    }

    fn filter<'a, I, S>(&self, items: I, spec: &S) -> Vec<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
        S: Specification<T> + ?Sized,
        T: 'a,
    {
        items
            .into_iter()
            .filter(|&item| spec.is_satisfied(item))
            .collect()
    }
}
