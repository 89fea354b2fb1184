//! Property tests for member-order sequence comparison.

use std::cmp::Ordering;

use proptest::prelude::*;

use metamodel::domain::entities::compare_sequences;

fn sequence() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u32..20, 1..4).prop_map(|parts| {
        parts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    })
}

proptest! {
    /// PROPERTY: Sequence comparison is a consistent ordering.
    #[test]
    fn property_compare_sequences_is_antisymmetric(a in sequence(), b in sequence()) {
        prop_assert_eq!(compare_sequences(&a, &b), compare_sequences(&b, &a).reverse());
        prop_assert_eq!(compare_sequences(&a, &a), Ordering::Equal);
    }

    /// PROPERTY: Sorting by sequence matches numeric component order.
    #[test]
    fn property_numeric_components_order(major in 0u32..50, minor in 0u32..50) {
        let a = format!("{}.{}", major, minor);
        let b = format!("{}.{}", major, minor + 1);
        let c = format!("{}", major + 1);
        prop_assert_eq!(compare_sequences(&a, &b), Ordering::Less);
        prop_assert_eq!(compare_sequences(&b, &c), Ordering::Less);
    }
}
