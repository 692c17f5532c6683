//! Core traits for specification-based filtering.
//!
//! A [`Specification`] decides whether a single item qualifies; a
//! [`Filter`] applies a specification to a sequence of items. New
//! criteria are added by implementing `Specification`, never by
//! changing a filter.

use crate::specifications::AndSpecification;
use std::sync::Arc;

/// A pure boolean test over one item.
///
/// ## Design Note
/// - Object safe, so stages can be stored as `Box<dyn Specification<T>>`
/// - Implemented for `&S`, `Box<S>` and `Arc<S>`, which lets a conjunction
///   hold its operands by reference or shared handle instead of by copy
pub trait Specification<T> {
    /// Returns true if `item` meets this specification.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Human-readable label (for logging and output).
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }

    /// Combine with `other` into a specification that requires both.
    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        AndSpecification::new(self, other)
    }
}

impl<T, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Selects the items that satisfy a specification.
///
/// Items are borrowed, never copied: the result holds references into the
/// input, in input order.
pub trait Filter<T> {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply `spec` to every item.
    ///
    /// # Arguments
    /// * `items` - Anything yielding `&T`: a slice, `&Vec<T>`, or a previous result
    /// * `spec` - The specification each returned item satisfies
    fn filter<'a, I, S>(&self, items: I, spec: &S) -> Vec<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
        S: Specification<T> + ?Sized,
        T: 'a;
}
