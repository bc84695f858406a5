//! Coarse and refined classification of a single value.

use core_types::{RealType, TypeTag, Value};

/// The `typeof` tag of a value.
///
/// Arrays, dates, regular expressions, sets, maps, boxed primitives and
/// `null` all report [`TypeTag::Object`].
///
/// # Examples
///
/// ```
/// use core_types::{TypeTag, Value};
/// use type_inspect::type_of;
///
/// assert_eq!(type_of(&Value::array(vec![])), TypeTag::Object);
/// assert_eq!(type_of(&Value::Null), TypeTag::Object);
/// ```
pub fn type_of(value: &Value) -> TypeTag {
    value.type_of()
}

/// The refined tag of a value.
///
/// Checks run in a fixed order and the first match wins:
/// bigint, date, array, NaN, Infinity, regexp, set, map, null. Anything
/// left over reports its coarse tag, so a boxed primitive is `object` and
/// a boxed NaN is `object` too.
///
/// # Examples
///
/// ```
/// use core_types::{RealType, Value};
/// use type_inspect::real_type_of;
///
/// assert_eq!(real_type_of(&Value::Number(f64::NAN)), RealType::NaN);
/// assert_eq!(real_type_of(&Value::Number(1.0 / 0.0)), RealType::Infinity);
/// assert_eq!(real_type_of(&Value::boxed(Value::string("12"))), RealType::Object);
/// ```
pub fn real_type_of(value: &Value) -> RealType {
    match value {
        Value::BigInt(_) => RealType::BigInt,
        Value::Date(_) => RealType::Date,
        Value::Array(_) => RealType::Array,
        Value::Number(n) if n.is_nan() => RealType::NaN,
        Value::Number(n) if n.is_infinite() => RealType::Infinity,
        Value::RegExp(_) => RealType::RegExp,
        Value::Set(_) => RealType::Set,
        Value::Map(_) => RealType::Map,
        Value::Null => RealType::Null,
        other => type_of(other).into(),
    }
}
