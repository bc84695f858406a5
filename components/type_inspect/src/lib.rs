//! Real-type inspection of JavaScript values.
//!
//! `typeof` lumps arrays, dates, regular expressions, sets, maps and `null`
//! together as `object`, and NaN and Infinity together with ordinary
//! numbers. This crate provides the refined classification that tells them
//! apart, plus a few predicates over lists of values built on it.
//!
//! # Overview
//!
//! - [`type_of`] / [`real_type_of`] - classify one value
//! - [`types_of_items`] / [`real_types_of_items`] - distinct tags of a list
//! - [`all_items_have_the_same_type`] - coarse uniformity
//! - [`every_item_has_a_unique_real_type`] - refined uniqueness
//! - [`count_real_types`] - refined tag histogram, sorted by label
//!
//! # Example
//!
//! ```
//! use core_types::{RealType, TypeTag, Value};
//! use type_inspect::{real_type_of, real_types_of_items, type_of};
//!
//! let nested = Value::array(vec![
//!     Value::array(vec![Value::Number(0.0), Value::string("")]),
//!     Value::set_from(vec![Value::Number(1.0)]),
//! ]);
//! assert_eq!(type_of(&nested), TypeTag::Object);
//! assert_eq!(real_type_of(&nested), RealType::Array);
//!
//! let items = [Value::boxed(Value::Number(123.0)), Value::string("myBad")];
//! assert_eq!(real_types_of_items(&items), vec![RealType::Object, RealType::String]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod classify;
pub mod items;

pub use classify::{real_type_of, type_of};
pub use items::{
    all_items_have_the_same_real_type, all_items_have_the_same_type, count_real_types,
    distinct_tags, every_item_has_a_unique_real_type, real_types_of_items, types_of_items,
};
