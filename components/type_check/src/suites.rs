//! The example suites
//!
//! Each function runs one block of checks against the classifier and the
//! list predicates. [`run_all`] runs them in order.

use core_types::Value;
use type_inspect::{
    all_items_have_the_same_type, count_real_types, every_item_has_a_unique_real_type,
    real_type_of, real_types_of_items, type_of, types_of_items,
};

use crate::error::HarnessResult;
use crate::harness::{Harness, ReportWriter};
use crate::samples;

/// Block names, in run order
pub const BLOCKS: [&str; 6] = [
    "getType",
    "allItemsHaveTheSameType",
    "getTypesOfItems VS getRealTypesOfItems",
    "everyItemHasAUniqueRealType",
    "countRealTypes",
    "mySillyTests",
];

/// Run every block
pub fn run_all<W: ReportWriter>(harness: &mut Harness<W>) -> HarnessResult<()> {
    get_type(harness)?;
    same_type(harness)?;
    types_of_items_vs_real(harness)?;
    unique_real_type(harness)?;
    count_types(harness)?;
    silly(harness)?;
    Ok(())
}

/// Coarse tags of single values
pub fn get_type<W: ReportWriter>(harness: &mut Harness<W>) -> HarnessResult<()> {
    harness.block(BLOCKS[0])?;

    let arrow = Value::function("", 0, |_| Value::Undefined);
    let cases = [
        ("Boolean", Value::Boolean(true), "boolean"),
        ("Number", Value::Number(123.0), "number"),
        ("String", Value::string("whoo"), "string"),
        ("Array", Value::array(vec![]), "object"),
        ("Object", Value::object(Vec::<(&str, Value)>::new()), "object"),
        ("Function", arrow, "function"),
        ("Undefined", Value::Undefined, "undefined"),
        ("Null", Value::Null, "object"),
    ];
    for (what, value, expected) in &cases {
        harness.check(what, &type_of(value), expected)?;
    }
    Ok(())
}

/// Coarse uniformity of lists
pub fn same_type<W: ReportWriter>(harness: &mut Harness<W>) -> HarnessResult<()> {
    harness.block(BLOCKS[1])?;

    harness.check(
        "All values are numbers",
        &all_items_have_the_same_type(&samples::numbers()),
        &true,
    )?;
    harness.check(
        "All values are strings",
        &all_items_have_the_same_type(&samples::strings()),
        &true,
    )?;
    // new String('12') is an object
    harness.check(
        "All values are strings but wait",
        &all_items_have_the_same_type(&samples::strings_with_boxed()),
        &false,
    )?;
    // NaN and Infinity are numbers to typeof
    harness.check(
        "Values like a number",
        &all_items_have_the_same_type(&samples::number_like()),
        &true,
    )?;
    harness.check(
        "Values like an object",
        &all_items_have_the_same_type(&[Value::object(Vec::<(&str, Value)>::new())]),
        &true,
    )?;
    harness.check(
        "No values at all",
        &all_items_have_the_same_type(&[]),
        &true,
    )?;
    Ok(())
}

/// Coarse and refined tag lists of the known types
pub fn types_of_items_vs_real<W: ReportWriter>(harness: &mut Harness<W>) -> HarnessResult<()> {
    harness.block(BLOCKS[2])?;

    let known = samples::known_types()?;
    harness.check(
        "Check basic types",
        &types_of_items(&known),
        &[
            "boolean",
            "number",
            "string",
            "object",
            "function",
            "undefined",
            "bigint",
        ],
    )?;
    harness.check(
        "Check real types",
        &real_types_of_items(&known),
        &[
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
        ],
    )?;
    Ok(())
}

/// Refined uniqueness of lists
pub fn unique_real_type<W: ReportWriter>(harness: &mut Harness<W>) -> HarnessResult<()> {
    harness.block(BLOCKS[3])?;

    let mixed = [
        Value::Boolean(true),
        Value::Number(123.0),
        Value::string("123"),
    ];
    harness.check(
        "All value types in the array are unique",
        &every_item_has_a_unique_real_type(&mixed),
        &true,
    )?;

    // '123' === 123
    let strict_equal =
        Value::Boolean(Value::string("123").same_value_zero(&Value::Number(123.0)));
    let two_booleans = [Value::Boolean(true), Value::Number(123.0), strict_equal];
    harness.check(
        "Two values have the same type",
        &every_item_has_a_unique_real_type(&two_booleans),
        &false,
    )?;

    harness.check(
        "There are no repeated types in knownTypes",
        &every_item_has_a_unique_real_type(&samples::known_types()?),
        &true,
    )?;
    Ok(())
}

/// Refined tag histograms
pub fn count_types<W: ReportWriter>(harness: &mut Harness<W>) -> HarnessResult<()> {
    harness.block(BLOCKS[4])?;

    let expected = (("boolean", 3), ("null", 1), ("object", 1));
    let items = samples::booleans_null_object();
    harness.check(
        "Count unique types of array items",
        &count_real_types(&items),
        &expected,
    )?;

    let mut shuffled = items;
    shuffled.rotate_right(1);
    harness.check(
        "Counted unique types are sorted",
        &count_real_types(&shuffled),
        &expected,
    )?;
    Ok(())
}

/// Assorted edge cases
pub fn silly<W: ReportWriter>(harness: &mut Harness<W>) -> HarnessResult<()> {
    harness.block(BLOCKS[5])?;

    let items = samples::finite_infinite_nan();
    let real: Vec<&str> = real_types_of_items(&items).iter().map(|t| t.as_str()).collect();
    let coarse: Vec<&str> = types_of_items(&items).iter().map(|t| t.as_str()).collect();
    harness.check(
        "All value types do not equal all real value types",
        &(real == coarse),
        &false,
    )?;

    let boxed_first = [Value::boxed(Value::Number(123.0)), Value::string("myBad")];
    harness.check(
        "String (not string) type in absent",
        &real_types_of_items(&boxed_first),
        &["object", "string"],
    )?;

    harness.check("Data", &real_type_of(&Value::date_now()), "date")?;

    harness.check(
        "Nested array with values has array type",
        &real_types_of_items(&samples::nested_arrays()),
        &["array"],
    )?;
    Ok(())
}
