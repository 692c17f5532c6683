//! The FilterPipeline applies several specifications in sequence.
//!
//! Each stage narrows the result of the previous one, so a pipeline is
//! equivalent to filtering once with the conjunction of its stages. The
//! pipeline form logs how many items each stage keeps.

use crate::filters::LinearFilter;
use crate::traits::{Filter, Specification};

/// Chains specifications into a sequence of filter stages.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_stage(ColorSpecification::new(Color::Green))
///     .add_stage(SizeSpecification::new(Size::Large));
///
/// let green_and_large = pipeline.apply(catalog.products());
/// ```
pub struct FilterPipeline<T> {
    stages: Vec<Box<dyn Specification<T>>>,
}

impl<T> FilterPipeline<T> {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage to the pipeline (builder pattern).
    pub fn add_stage(mut self, spec: impl Specification<T> + 'static) -> Self {
        self.stages.push(Box::new(spec));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Descriptions of every stage, in order.
    pub fn describe(&self) -> Vec<String> {
        self.stages.iter().map(|stage| stage.describe()).collect()
    }

    /// Apply all stages in sequence.
    ///
    /// ## Algorithm
    /// 1. Start with every input item
    /// 2. For each stage in order, keep the items satisfying it,
    ///    logging input and output counts
    /// 3. Return what survives the last stage
    ///
    /// An empty pipeline returns every item.
    pub fn apply<'a, I>(&self, items: I) -> Vec<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let filter = LinearFilter;
        let mut current: Vec<&'a T> = items.into_iter().collect();
        for stage in &self.stages {
            tracing::debug!(
                "Applying stage: {} with {} (input count: {})",
                stage.describe(),
                <LinearFilter as Filter<T>>::name(&filter),
                current.len()
            );
            current = filter.filter(current, stage);
            tracing::debug!(
                "Stage applied: {} with {} (output count: {})",
                stage.describe(),
                <LinearFilter as Filter<T>>::name(&filter),
                current.len()
            );
        }
        current
    }
}

impl<T> Default for FilterPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
