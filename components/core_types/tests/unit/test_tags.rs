//! Unit tests for TypeTag and RealType

use core_types::{RealType, TypeTag};

#[cfg(test)]
mod type_tag_tests {
    use super::*;

    #[test]
    fn test_type_tag_count() {
        assert_eq!(TypeTag::ALL.len(), 8);
    }

    #[test]
    fn test_type_tag_display() {
        assert_eq!(TypeTag::Undefined.to_string(), "undefined");
        assert_eq!(TypeTag::Function.to_string(), "function");
    }

    #[test]
    fn test_type_tag_rejects_refined_label() {
        assert!("array".parse::<TypeTag>().is_err());
        assert!("null".parse::<TypeTag>().is_err());
    }

    #[test]
    fn test_type_tag_serializes_as_label() {
        let json = serde_json::to_string(&TypeTag::BigInt).unwrap();
        assert_eq!(json, "\"bigint\"");
    }
}

#[cfg(test)]
mod real_type_tests {
    use super::*;

    #[test]
    fn test_real_type_labels() {
        let labels: Vec<&str> = RealType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "boolean",
                "number",
                "string",
                "array",
                "object",
                "function",
                "undefined",
                "null",
                "NaN",
                "Infinity",
                "date",
                "regexp",
                "set",
                "map",
                "bigint",
                "symbol",
            ]
        );
    }

    #[test]
    fn test_real_type_serializes_as_label() {
        let json = serde_json::to_string(&vec![RealType::NaN, RealType::RegExp]).unwrap();
        assert_eq!(json, r#"["NaN","regexp"]"#);
    }

    #[test]
    fn test_real_type_deserializes_label() {
        let tag: RealType = serde_json::from_str("\"Infinity\"").unwrap();
        assert_eq!(tag, RealType::Infinity);
    }

    #[test]
    fn test_real_type_round_trips_through_from_str() {
        for tag in RealType::ALL {
            assert_eq!(tag.to_string().parse::<RealType>(), Ok(tag));
        }
    }

    #[test]
    fn test_uppercase_labels_sort_first() {
        let mut tags = RealType::ALL.to_vec();
        tags.sort();
        assert_eq!(tags[0], RealType::Infinity);
        assert_eq!(tags[1], RealType::NaN);
        assert_eq!(tags[2], RealType::Array);
        assert_eq!(tags.last(), Some(&RealType::Undefined));
    }
}
