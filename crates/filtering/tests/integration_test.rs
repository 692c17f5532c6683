//! Integration tests for the filtering crate.
//!
//! These run the reference scenario end to end: the sample catalog,
//! single-attribute specifications, their conjunction, and the pipeline.

use catalog::{Catalog, Color, Product, Size};
use filtering::specifications::*;
use filtering::{Filter, FilterPipeline, LinearFilter, NaiveFilter, Specification};
use std::sync::Arc;

fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_green_things() {
    let catalog = Catalog::sample();
    let green = ColorSpecification::new(Color::Green);

    let filtered = LinearFilter.filter(catalog.products(), &green);
    assert_eq!(names(&filtered), vec!["Apple", "Tree"]);
}

#[test]
fn test_large_things() {
    let catalog = Catalog::sample();
    let large = SizeSpecification::new(Size::Large);

    let filtered = LinearFilter.filter(catalog.products(), &large);
    assert_eq!(names(&filtered), vec!["Tree", "House"]);
}

#[test]
fn test_green_and_large_things() {
    let catalog = Catalog::sample();
    let green = ColorSpecification::new(Color::Green);
    let large = SizeSpecification::new(Size::Large);

    // Borrowed operands stay usable on their own afterwards.
    let green_and_large = AndSpecification::new(&green, &large);
    let filtered = LinearFilter.filter(catalog.products(), &green_and_large);
    assert_eq!(names(&filtered), vec!["Tree"]);

    assert_eq!(LinearFilter.filter(catalog.products(), &green).len(), 2);
    assert_eq!(LinearFilter.filter(catalog.products(), &large).len(), 2);
}

#[test]
fn test_specifications_as_trait_objects() {
    let catalog = Catalog::sample();
    let specs: Vec<Arc<dyn Specification<Product>>> = vec![
        Arc::new(ColorSpecification::new(Color::Green)),
        Arc::new(SizeSpecification::new(Size::Large)),
    ];

    let combined = AndSpecification::new(Arc::clone(&specs[0]), Arc::clone(&specs[1]));
    let filtered = LinearFilter.filter(catalog.products(), &combined);

    assert_eq!(names(&filtered), vec!["Tree"]);
    assert_eq!(combined.describe(), "color = green and size = large");
}

#[test]
fn test_pipeline_matches_conjunction() {
    let catalog = Catalog::sample();
    let pipeline = FilterPipeline::new()
        .add_stage(ColorSpecification::new(Color::Green))
        .add_stage(SizeSpecification::new(Size::Large));
    let conjunction = ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));

    assert_eq!(
        pipeline.apply(catalog.products()),
        LinearFilter.filter(catalog.products(), &conjunction)
    );
}

#[test]
fn test_naive_and_specification_filters_agree() {
    let catalog = Catalog::sample();

    let naive = NaiveFilter.by_color(catalog.products(), Color::Green);
    let better = LinearFilter.filter(catalog.products(), &ColorSpecification::new(Color::Green));

    assert_eq!(naive, better);
}

#[test]
fn test_no_match_yields_empty() {
    let catalog = Catalog::sample();
    let red = ColorSpecification::new(Color::Red);
    let medium = SizeSpecification::new(Size::Medium);

    assert!(LinearFilter.filter(catalog.products(), &red).is_empty());
    assert!(LinearFilter.filter(catalog.products(), &medium).is_empty());
}
