//! Aggregate predicates over lists of values.
//!
//! Every function here is built from the classifiers in
//! [`crate::classify`]. Tag lists are deduplicated and keep the order in
//! which tags were first seen.

use std::collections::BTreeMap;

use core_types::{RealType, TypeTag, Value};

use crate::classify::{real_type_of, type_of};

/// Distinct tags produced by `classify`, in first-seen order.
///
/// ```
/// use core_types::{RealType, Value};
/// use type_inspect::{distinct_tags, real_type_of};
///
/// let items = [Value::Null, Value::Number(1.0), Value::Null];
/// assert_eq!(
///     distinct_tags(&items, real_type_of),
///     vec![RealType::Null, RealType::Number]
/// );
/// ```
pub fn distinct_tags<T, F>(items: &[Value], classify: F) -> Vec<T>
where
    T: PartialEq,
    F: Fn(&Value) -> T,
{
    items.iter().map(classify).fold(Vec::new(), |mut seen, tag| {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
        seen
    })
}

/// Distinct coarse tags of `items`.
pub fn types_of_items(items: &[Value]) -> Vec<TypeTag> {
    distinct_tags(items, type_of)
}

/// Distinct refined tags of `items`.
pub fn real_types_of_items(items: &[Value]) -> Vec<RealType> {
    distinct_tags(items, real_type_of)
}

/// Whether every item has the coarse tag of the first one.
///
/// An empty list is vacuously uniform.
///
/// ```
/// use core_types::Value;
/// use type_inspect::all_items_have_the_same_type;
///
/// // NaN and Infinity are still numbers to typeof
/// let numbers = [Value::Number(123.0), Value::Number(f64::NAN), Value::Number(f64::INFINITY)];
/// assert!(all_items_have_the_same_type(&numbers));
/// assert!(all_items_have_the_same_type(&[]));
/// ```
pub fn all_items_have_the_same_type(items: &[Value]) -> bool {
    types_of_items(items).len() <= 1
}

/// Whether every item has the refined tag of the first one.
///
/// An empty list is vacuously uniform.
pub fn all_items_have_the_same_real_type(items: &[Value]) -> bool {
    real_types_of_items(items).len() <= 1
}

/// Whether no two items share a refined tag.
///
/// ```
/// use core_types::Value;
/// use type_inspect::every_item_has_a_unique_real_type;
///
/// let mixed = [Value::Boolean(true), Value::Number(123.0), Value::string("123")];
/// assert!(every_item_has_a_unique_real_type(&mixed));
/// ```
pub fn every_item_has_a_unique_real_type(items: &[Value]) -> bool {
    real_types_of_items(items).len() == items.len()
}

/// Number of items per refined tag, sorted by tag label.
///
/// ```
/// use core_types::{RealType, Value};
/// use type_inspect::count_real_types;
///
/// let items = [Value::Null, Value::Boolean(true), Value::Boolean(false)];
/// assert_eq!(
///     count_real_types(&items),
///     vec![(RealType::Boolean, 2), (RealType::Null, 1)]
/// );
/// ```
pub fn count_real_types(items: &[Value]) -> Vec<(RealType, usize)> {
    let mut counts: BTreeMap<RealType, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(real_type_of(item)).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}
