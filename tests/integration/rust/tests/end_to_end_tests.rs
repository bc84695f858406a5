//! End-to-End classification tests
//!
//! Builds values with core_types, classifies them with type_inspect and
//! checks the results against the documented behaviour.

use core_types::{RealType, TypeTag, Value};
use pretty_assertions::assert_eq;
use type_check::samples;
use type_inspect::{
    all_items_have_the_same_type, count_real_types, every_item_has_a_unique_real_type,
    real_type_of, real_types_of_items, type_of, types_of_items,
};

/// Test: every known sample gets its own refined tag, in order
#[test]
fn test_e2e_known_types_real_tags() {
    let known = samples::known_types().expect("samples build");
    let tags: Vec<RealType> = known.iter().map(real_type_of).collect();

    assert_eq!(
        tags,
        vec![
            RealType::Boolean,
            RealType::Number,
            RealType::String,
            RealType::Array,
            RealType::Object,
            RealType::Function,
            RealType::Undefined,
            RealType::Null,
            RealType::NaN,
            RealType::Infinity,
            RealType::Date,
            RealType::RegExp,
            RealType::Set,
            RealType::Map,
            RealType::BigInt,
        ]
    );
    assert!(every_item_has_a_unique_real_type(&known));
}

/// Test: the coarse view of the same samples collapses to seven tags
#[test]
fn test_e2e_known_types_coarse_tags() {
    let known = samples::known_types().expect("samples build");

    assert_eq!(
        types_of_items(&known),
        vec![
            TypeTag::Boolean,
            TypeTag::Number,
            TypeTag::String,
            TypeTag::Object,
            TypeTag::Function,
            TypeTag::Undefined,
            TypeTag::BigInt,
        ]
    );
}

/// Test: everything that refines to array is an object to typeof
#[test]
fn test_e2e_arrays_are_objects() {
    for value in samples::nested_arrays() {
        assert_eq!(real_type_of(&value), RealType::Array);
        assert_eq!(type_of(&value), TypeTag::Object);
    }
}

/// Test: the wrapper trap
#[test]
fn test_e2e_boxed_string() {
    assert!(all_items_have_the_same_type(&samples::strings()));
    assert!(!all_items_have_the_same_type(&samples::strings_with_boxed()));
    assert_eq!(
        real_types_of_items(&samples::strings_with_boxed()),
        vec![RealType::String, RealType::Object]
    );
}

/// Test: histogram output matches the documented JSON shape
#[test]
fn test_e2e_count_real_types_json() {
    let counts = count_real_types(&samples::booleans_null_object());
    let json = serde_json::to_value(&counts).expect("serializable");

    assert_eq!(json, serde_json::json!([["boolean", 3], ["null", 1], ["object", 1]]));
}

/// Test: tags survive a text round trip
#[test]
fn test_e2e_tags_parse_back() {
    let known = samples::known_types().expect("samples build");
    for value in &known {
        let tag = real_type_of(value);
        let parsed: RealType = tag.to_string().parse().expect("known label");
        assert_eq!(parsed, tag);
    }
}

/// Test: a symbol is the one refined tag reached only through typeof
#[test]
fn test_e2e_symbol() {
    let sym = Value::symbol(Some("id"));

    assert_eq!(type_of(&sym), TypeTag::Symbol);
    assert_eq!(real_type_of(&sym), RealType::Symbol);
}
