//! Contract compliance tests for core_types
//!
//! These tests pin down the public surface other components rely on:
//! the variant set of `Value`, the tag vocabularies and their labels.

use core_types::{RealType, TagError, TypeTag, Value};

#[cfg(test)]
mod value_contract_tests {
    use super::*;

    /// Contract: Value must have a variant for every value kind
    #[test]
    fn test_value_has_primitive_variants() {
        let _: Value = Value::Undefined;
        let _: Value = Value::Null;
        let _: Value = Value::Boolean(false);
        let _: Value = Value::Number(f64::NAN);
        let _: Value = Value::String(String::new());
        let _: Value = Value::bigint(1);
        let _: Value = Value::symbol(None);
    }

    #[test]
    fn test_value_has_object_variants() {
        let _: Value = Value::object(Vec::<(&str, Value)>::new());
        let _: Value = Value::boxed(Value::string("12"));
        let _: Value = Value::array(vec![]);
        let _: Value = Value::function("f", 0, |_| Value::Undefined);
        let _: Value = Value::date_now();
        let _: Value = Value::set_from(vec![]);
        let _: Value = Value::map_from(vec![]);
    }

    /// Contract: regexp construction reports failures instead of panicking
    #[test]
    fn test_regexp_constructor_returns_result() {
        let ok: Result<Value, TagError> = Value::regexp("a+", "g");
        assert!(ok.is_ok());
        let err: Result<Value, TagError> = Value::regexp("a+", "q");
        assert!(err.is_err());
    }

    /// Contract: type_of returns a TypeTag
    #[test]
    fn test_value_type_of_returns_tag() {
        let _: TypeTag = Value::Undefined.type_of();
    }

    /// Contract: to_string follows String(value)
    #[test]
    fn test_value_to_string_method_exists() {
        let _: String = Value::Null.to_string();
    }
}

#[cfg(test)]
mod tag_contract_tests {
    use super::*;

    /// Contract: the coarse vocabulary is exactly the typeof results
    #[test]
    fn test_coarse_labels() {
        let labels: Vec<&str> = TypeTag::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            labels,
            vec!["boolean", "number", "string", "object", "function", "undefined", "bigint", "symbol"]
        );
    }

    /// Contract: every coarse label is also a refined label
    #[test]
    fn test_refined_is_superset_of_coarse() {
        for tag in TypeTag::ALL {
            assert!(tag.as_str().parse::<RealType>().is_ok());
        }
    }

    /// Contract: tags are Copy and hashable
    #[test]
    fn test_tags_are_copy_and_hash() {
        use std::collections::HashSet;
        let tag = RealType::Map;
        let copy = tag;
        let set: HashSet<RealType> = [tag, copy].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
