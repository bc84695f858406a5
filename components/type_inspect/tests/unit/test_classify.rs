//! Unit tests for type_of and real_type_of

use core_types::{RealType, TypeTag, Value};
use type_inspect::{real_type_of, type_of};

#[cfg(test)]
mod type_of_tests {
    use super::*;

    #[test]
    fn test_boolean() {
        assert_eq!(type_of(&Value::Boolean(true)), TypeTag::Boolean);
    }

    #[test]
    fn test_number() {
        assert_eq!(type_of(&Value::Number(123.0)), TypeTag::Number);
    }

    #[test]
    fn test_string() {
        assert_eq!(type_of(&Value::string("whoo")), TypeTag::String);
    }

    #[test]
    fn test_array() {
        assert_eq!(type_of(&Value::array(vec![])), TypeTag::Object);
    }

    #[test]
    fn test_object() {
        assert_eq!(type_of(&Value::object(Vec::<(&str, Value)>::new())), TypeTag::Object);
    }

    #[test]
    fn test_function() {
        let arrow = Value::function("", 0, |_| Value::Undefined);
        assert_eq!(type_of(&arrow), TypeTag::Function);
    }

    #[test]
    fn test_undefined() {
        assert_eq!(type_of(&Value::Undefined), TypeTag::Undefined);
    }

    #[test]
    fn test_null() {
        assert_eq!(type_of(&Value::Null), TypeTag::Object);
    }
}

#[cfg(test)]
mod real_type_of_tests {
    use super::*;

    #[test]
    fn test_primitives_keep_coarse_label() {
        assert_eq!(real_type_of(&Value::Boolean(false)), RealType::Boolean);
        assert_eq!(real_type_of(&Value::Number(69.0)), RealType::Number);
        assert_eq!(real_type_of(&Value::string("777")), RealType::String);
        assert_eq!(real_type_of(&Value::Undefined), RealType::Undefined);
    }

    #[test]
    fn test_null() {
        assert_eq!(real_type_of(&Value::Null), RealType::Null);
    }

    #[test]
    fn test_nan_from_division_by_text() {
        // 1 / ['заяц']
        assert_eq!(real_type_of(&Value::Number(1.0 / f64::NAN)), RealType::NaN);
    }

    #[test]
    fn test_infinity_survives_arithmetic() {
        // (5 / 0) * 2 + 100 - 3 + 72
        let n = (5.0_f64 / 0.0) * 2.0 + 100.0 - 3.0 + 72.0;
        assert_eq!(real_type_of(&Value::Number(n)), RealType::Infinity);
    }

    #[test]
    fn test_date() {
        assert_eq!(real_type_of(&Value::date_now()), RealType::Date);
        assert_eq!(real_type_of(&Value::date_from_millis(0.0)), RealType::Date);
    }

    #[test]
    fn test_regexp() {
        assert_eq!(real_type_of(&Value::regexp(r"\w+", "").unwrap()), RealType::RegExp);
    }

    #[test]
    fn test_set_and_map() {
        assert_eq!(real_type_of(&Value::set_from(vec![])), RealType::Set);
        assert_eq!(real_type_of(&Value::map_from(vec![])), RealType::Map);
    }

    #[test]
    fn test_bigint() {
        assert_eq!(real_type_of(&Value::bigint(8800555)), RealType::BigInt);
    }

    #[test]
    fn test_function() {
        let f = Value::function("speak", 1, |_| Value::Undefined);
        assert_eq!(real_type_of(&f), RealType::Function);
    }

    #[test]
    fn test_boxed_primitives_are_objects() {
        for inner in [
            Value::string("12"),
            Value::Number(12.0),
            Value::Boolean(false),
            Value::bigint(12),
        ] {
            assert_eq!(real_type_of(&Value::boxed(inner)), RealType::Object);
        }
    }

    #[test]
    fn test_nested_array_is_array() {
        let nested = Value::array(vec![
            Value::array(vec![Value::Number(0.0), Value::string("")]),
            Value::array(vec![Value::object(Vec::<(&str, Value)>::new())]),
            Value::set_from(vec![
                Value::Number(1.0),
                Value::Number(2.0),
                Value::Number(3.0),
            ]),
        ]);
        assert_eq!(real_type_of(&nested), RealType::Array);
    }

    #[test]
    fn test_fresh_containers_get_dedicated_labels() {
        let cases = vec![
            (Value::array(vec![]), RealType::Array),
            (Value::set_from(vec![]), RealType::Set),
            (Value::map_from(vec![]), RealType::Map),
            (Value::date_now(), RealType::Date),
            (Value::regexp("x", "g").unwrap(), RealType::RegExp),
        ];
        for (value, expected) in cases {
            let tag = real_type_of(&value);
            assert_eq!(tag, expected);
            assert_ne!(tag, RealType::Object);
        }
    }
}
