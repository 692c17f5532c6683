//! Conjunction of two specifications.

use crate::traits::Specification;

/// Satisfied only when both held specifications are satisfied by the
/// same item.
///
/// The operands are held as given, so pass references (`&spec`),
/// `Box`es or `Arc`s to share a specification between several
/// conjunctions.
///
/// ```ignore
/// let green = ColorSpecification::new(Color::Green);
/// let large = SizeSpecification::new(Size::Large);
/// let green_and_large = AndSpecification::new(&green, &large);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Specification<T> for AndSpecification<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("{} and {}", self.first.describe(), self.second.describe())
    }
}
