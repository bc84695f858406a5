//! Sample values used by the example suites

use core_types::{TagResult, Value};

/// `1 / ['заяц']`: the array coerces to a non-numeric string
fn nan_from_division() -> f64 {
    let divisor: f64 = "заяц".parse().unwrap_or(f64::NAN);
    1.0 / divisor
}

/// `(5 / 0) * 2 + 100 - 3 + 72`
fn infinity_from_arithmetic() -> f64 {
    (5.0_f64 / 0.0) * 2.0 + 100.0 - 3.0 + 72.0
}

/// `function (word) { return `The word '${word}' sounds beautiful!`; }`
pub fn beautiful_word() -> Value {
    Value::function("", 1, |args| {
        let word = args.first().cloned().unwrap_or(Value::Undefined);
        Value::string(format!("The word '{}' sounds beautiful!", word))
    })
}

/// One value for every refined tag except `symbol`, in tag order:
/// boolean, number, string, array, object, function, undefined, null,
/// NaN, Infinity, date, regexp, set, map, bigint.
pub fn known_types() -> TagResult<Vec<Value>> {
    Ok(vec![
        Value::Boolean(true),
        Value::Number(69.0),
        Value::string("777"),
        Value::array(vec![
            Value::string("0"),
            Value::string("_"),
            Value::string("0"),
        ]),
        Value::object(vec![("work", Value::string("isOver"))]),
        beautiful_word(),
        Value::Undefined,
        Value::Null,
        Value::Number(nan_from_division()),
        Value::Number(infinity_from_arithmetic()),
        Value::date_now(),
        Value::regexp(r"\w+", "")?,
        Value::set_from(vec![]),
        Value::map_from(vec![]),
        Value::bigint(8800555),
    ])
}

/// `[11, 12, 13]`
pub fn numbers() -> Vec<Value> {
    [11, 12, 13].map(Value::from).to_vec()
}

/// `['11', '12', '13']`
pub fn strings() -> Vec<Value> {
    ["11", "12", "13"].map(Value::from).to_vec()
}

/// `['11', new String('12'), '13']`
pub fn strings_with_boxed() -> Vec<Value> {
    vec![
        Value::string("11"),
        Value::boxed(Value::string("12")),
        Value::string("13"),
    ]
}

/// `[123, 123 / 'a', 1 / 0]`
pub fn number_like() -> Vec<Value> {
    vec![
        Value::Number(123.0),
        Value::Number(123.0 / f64::NAN),
        Value::Number(1.0 / 0.0),
    ]
}

/// `[1, 1 / 0, 120 / 'beda']`
pub fn finite_infinite_nan() -> Vec<Value> {
    vec![
        Value::Number(1.0),
        Value::Number(1.0 / 0.0),
        Value::Number(120.0 / f64::NAN),
    ]
}

/// `[true, null, !null, !!null, {}]`
pub fn booleans_null_object() -> Vec<Value> {
    let not_null = !Value::Null.is_truthy();
    vec![
        Value::Boolean(true),
        Value::Null,
        Value::Boolean(not_null),
        Value::Boolean(!not_null),
        Value::object(Vec::<(&str, Value)>::new()),
    ]
}

/// `[[[0, ''], [{}], new Set([1, 2, 3])], [new Date()]]`
pub fn nested_arrays() -> Vec<Value> {
    vec![
        Value::array(vec![
            Value::array(vec![Value::Number(0.0), Value::string("")]),
            Value::array(vec![Value::object(Vec::<(&str, Value)>::new())]),
            Value::set_from([1, 2, 3].map(Value::from)),
        ]),
        Value::array(vec![Value::date_now()]),
    ]
}
